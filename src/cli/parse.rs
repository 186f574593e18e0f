use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-d" | "--digits" => flags.digits = true,
            "-s" | "--symbols" => flags.symbols = true,
            "-A" | "--ambiguous" => flags.ambiguous = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "-b" | "--board" => flags.clipboard = true,
            "-l" | "--length" => flags.length = Some(count_value(args, &mut i)?),
            "-D" | "--min-digits" => flags.min_digits = Some(count_value(args, &mut i)?),
            "-S" | "--min-symbols" => flags.min_symbols = Some(count_value(args, &mut i)?),
            "-n" | "--number" => flags.number = Some(count_value(args, &mut i)?),
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Consume the value following a count-taking flag.
fn count_value(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    let flag = &args[*i];
    *i += 1;
    if *i >= args.len() {
        return Err(ParseError::MissingValue(flag.clone()));
    }
    args[*i]
        .parse()
        .map_err(|_| ParseError::InvalidNumber(args[*i].clone()))
}

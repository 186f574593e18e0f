//! Plain-text help output.

pub fn print_help() {
    println!("passgen {}", env!("CARGO_PKG_VERSION"));
    println!("Generate random passwords with per-class minimum counts.");
    println!();
    println!("Usage: passgen [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -l, --length <N>       Password length (default: 16, minimum: 8)");
    println!("  -d, --digits           Include digits");
    println!("  -s, --symbols          Include symbols (!@#$%^&*)");
    println!("  -D, --min-digits <N>   Minimum digits when -d is set (default: 3)");
    println!("  -S, --min-symbols <N>  Minimum symbols when -s is set (default: 2)");
    println!("  -A, --ambiguous        Allow ambiguous characters (I, O, l, o, 0, 1)");
    println!("      --no-upper         Exclude uppercase letters");
    println!("      --no-lower         Exclude lowercase letters");
    println!("  -n, --number <N>       Number of passwords to generate (default: 1)");
    println!("  -b, --board            Copy to clipboard instead of printing");
    println!("  -h, --help             Print this help");
    println!("  -v, --version          Print version");
    println!();
    println!("Examples:");
    println!("  passgen                    16 letters, ambiguous characters excluded");
    println!("  passgen -d -s              add digits (>=3) and symbols (>=2)");
    println!("  passgen -l 24 -d -D 5 -A   24 chars, >=5 digits, ambiguous allowed");
}

use crate::config::Config;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub digits: bool,
    pub symbols: bool,
    pub ambiguous: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub clipboard: bool,
    pub length: Option<usize>,
    pub min_digits: Option<usize>,
    pub min_symbols: Option<usize>,
    pub number: Option<usize>,
}

impl CliFlags {
    /// Fold the parsed flags over the default configuration.
    pub fn to_config(&self) -> Config {
        let defaults = Config::default();
        Config {
            length: self.length.unwrap_or(defaults.length),
            uppercase: !self.no_upper,
            lowercase: !self.no_lower,
            digits: self.digits,
            symbols: self.symbols,
            min_digits: self.min_digits.unwrap_or(defaults.min_digits),
            min_symbols: self.min_symbols.unwrap_or(defaults.min_symbols),
            include_ambiguous: self.ambiguous,
        }
    }
}

//! Password generation configuration.

use std::fmt;

/// Smallest password length the generator accepts.
pub const MIN_LENGTH: usize = 8;

/// Immutable password generation configuration.
///
/// Built once from the command line and handed to the composer by
/// reference; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub min_digits: usize,
    pub min_symbols: usize,
    pub include_ambiguous: bool,
}

impl Default for Config {
    /// CLI defaults: 16 characters, letters only, ambiguous characters
    /// excluded. The minimum counts only take effect once the matching
    /// class is enabled.
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: false,
            symbols: false,
            min_digits: 3,
            min_symbols: 2,
            include_ambiguous: false,
        }
    }
}

/// A constraint violated by the requested configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    LengthTooShort,
    MinCountsExceedHalfLength,
    NoClasses,
    NoLetterClass,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LengthTooShort => {
                write!(f, "password length must be at least {MIN_LENGTH} characters")
            }
            ConfigError::MinCountsExceedHalfLength => {
                write!(
                    f,
                    "minimum digits and symbols must be less than half of password length"
                )
            }
            ConfigError::NoClasses => {
                write!(f, "at least one character class must be enabled")
            }
            ConfigError::NoLetterClass => {
                write!(
                    f,
                    "uppercase or lowercase letters must be enabled: a password cannot begin with a digit or symbol"
                )
            }
        }
    }
}

impl Config {
    /// Check every invariant the composer relies on.
    ///
    /// The minimum counts are checked as configured, whether or not the
    /// matching class is enabled. The letter-class rule keeps the
    /// leading-character reshuffle reachable: with only digits and
    /// symbols enabled it could never finish.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length < MIN_LENGTH {
            return Err(ConfigError::LengthTooShort);
        }
        if self.min_digits.checked_add(self.min_symbols).is_none_or(|sum| sum > self.length / 2) {
            return Err(ConfigError::MinCountsExceedHalfLength);
        }
        if !self.uppercase && !self.lowercase && !self.digits && !self.symbols {
            return Err(ConfigError::NoClasses);
        }
        if !self.uppercase && !self.lowercase {
            return Err(ConfigError::NoLetterClass);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_length_below_minimum() {
        let config = Config {
            length: 7,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::LengthTooShort));
    }

    #[test]
    fn accepts_minimum_length_with_small_minimums() {
        let config = Config {
            length: 8,
            min_digits: 2,
            min_symbols: 2,
            ..Config::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_minimums_over_half_the_length() {
        let config = Config {
            length: 16,
            digits: true,
            symbols: true,
            min_digits: 5,
            min_symbols: 4,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MinCountsExceedHalfLength));
    }

    #[test]
    fn minimums_count_even_when_their_class_is_disabled() {
        // Default minimums are 3 + 2; at length 8 they exceed 8 / 2
        // although digits and symbols are both off.
        let config = Config {
            length: 8,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MinCountsExceedHalfLength));
    }

    #[test]
    fn rejects_minimum_sums_that_overflow() {
        let config = Config {
            digits: true,
            symbols: true,
            min_digits: usize::MAX,
            min_symbols: 1,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MinCountsExceedHalfLength));

        let both_max = Config {
            min_digits: usize::MAX,
            min_symbols: usize::MAX,
            ..Config::default()
        };
        assert_eq!(both_max.validate(), Err(ConfigError::MinCountsExceedHalfLength));
    }

    #[test]
    fn rejects_empty_character_set() {
        let config = Config {
            uppercase: false,
            lowercase: false,
            min_digits: 0,
            min_symbols: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoClasses));
    }

    #[test]
    fn rejects_digit_and_symbol_only_sets() {
        let config = Config {
            uppercase: false,
            lowercase: false,
            digits: true,
            symbols: true,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoLetterClass));
    }

    #[test]
    fn length_is_checked_first() {
        // Several constraints violated at once; the length error wins.
        let config = Config {
            length: 4,
            uppercase: false,
            lowercase: false,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::LengthTooShort));
    }

    #[test]
    fn messages_name_the_violated_constraint() {
        assert_eq!(
            ConfigError::LengthTooShort.to_string(),
            "password length must be at least 8 characters"
        );
        assert_eq!(
            ConfigError::MinCountsExceedHalfLength.to_string(),
            "minimum digits and symbols must be less than half of password length"
        );
        assert!(ConfigError::NoLetterClass.to_string().contains("begin with a digit or symbol"));
    }
}

//! Character pools for password composition.

use crate::config::Config;

pub const UPPER_ALL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const UPPER_UNAMBIGUOUS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ"; // no I, O
pub const LOWER_ALL: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const LOWER_UNAMBIGUOUS: &[u8] = b"abcdefghijkmnpqrstuvwxyz"; // no l, o
pub const DIGITS_ALL: &[u8] = b"0123456789";
pub const DIGITS_UNAMBIGUOUS: &[u8] = b"23456789"; // no 0, 1

/// Symbol pool; none of its characters count as ambiguous.
pub const SYMBOLS: &[u8] = b"!@#$%^&*";

/// Character pools selected for one composition run.
#[derive(Debug, Clone, Copy)]
pub struct Pools {
    pub upper: &'static [u8],
    pub lower: &'static [u8],
    pub digits: &'static [u8],
    pub symbols: &'static [u8],
}

/// Select the pool variant for each class.
pub fn select(include_ambiguous: bool) -> Pools {
    if include_ambiguous {
        Pools {
            upper: UPPER_ALL,
            lower: LOWER_ALL,
            digits: DIGITS_ALL,
            symbols: SYMBOLS,
        }
    } else {
        Pools {
            upper: UPPER_UNAMBIGUOUS,
            lower: LOWER_UNAMBIGUOUS,
            digits: DIGITS_UNAMBIGUOUS,
            symbols: SYMBOLS,
        }
    }
}

/// Build the combined fill set from the enabled classes.
pub fn build(config: &Config) -> Vec<u8> {
    let pools = select(config.include_ambiguous);
    let mut chars: Vec<u8> = Vec::new();

    if config.uppercase {
        chars.extend_from_slice(pools.upper);
    }
    if config.lowercase {
        chars.extend_from_slice(pools.lower);
    }
    if config.digits {
        chars.extend_from_slice(pools.digits);
    }
    if config.symbols {
        chars.extend_from_slice(pools.symbols);
    }

    chars
}

/// True for characters that may not begin a password.
pub fn is_digit_or_symbol(c: u8) -> bool {
    c.is_ascii_digit() || SYMBOLS.contains(&c)
}

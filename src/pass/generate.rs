//! Password composition.

use std::io::Write;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use zeroize::Zeroize;

use super::SecureBufWriter;
use super::charset;
use crate::config::Config;

/// Compose one password from the given RNG.
///
/// The config must have passed [`Config::validate`]: letters are then in
/// the fill set with positions left to fill, so the redraw and reshuffle
/// loops below terminate almost surely.
pub fn compose<R: Rng + CryptoRng>(config: &Config, rng: &mut R) -> String {
    let pools = charset::select(config.include_ambiguous);
    let fill = charset::build(config);
    let mut bytes: Vec<u8> = Vec::with_capacity(config.length);

    // Redraw entire assemblies that contain no letter; the reshuffle
    // below can only reorder what is already there.
    loop {
        bytes.clear();

        // Seed the minimum digit and symbol counts ahead of the uniform fill.
        if config.digits {
            for _ in 0..config.min_digits {
                bytes.push(pick(pools.digits, rng));
            }
        }
        if config.symbols {
            for _ in 0..config.min_symbols {
                bytes.push(pick(pools.symbols, rng));
            }
        }

        for _ in bytes.len()..config.length {
            bytes.push(pick(&fill, rng));
        }

        if bytes.iter().any(|&b| !charset::is_digit_or_symbol(b)) {
            break;
        }
    }

    // Reshuffle until the password no longer leads with a digit or symbol.
    loop {
        bytes.shuffle(rng);
        if !charset::is_digit_or_symbol(bytes[0]) {
            break;
        }
    }

    // Safety: every pool is ASCII.
    unsafe { String::from_utf8_unchecked(bytes) }
}

/// Draw one character uniformly from a pool.
#[inline]
fn pick<R: Rng + CryptoRng>(pool: &[u8], rng: &mut R) -> u8 {
    pool[rng.gen_range(0..pool.len())]
}

/// Generate a single password with the operating-system CSPRNG.
pub fn generate(config: &Config) -> String {
    compose(config, &mut OsRng)
}

/// Generate `count` passwords, one per line, to stdout. When
/// `to_clipboard` is set they are returned as a single newline-separated
/// clipboard payload instead, and the caller owns zeroizing it.
pub fn generate_batch(config: &Config, count: usize, to_clipboard: bool) -> Option<String> {
    if to_clipboard {
        let mut payload = String::new();
        for _ in 0..count {
            let mut pass = generate(config);
            payload.push_str(&pass);
            payload.push('\n');
            pass.zeroize();
        }
        return Some(payload);
    }

    let stdout = std::io::stdout();
    let mut out = SecureBufWriter::new(stdout.lock());

    for _ in 0..count {
        let mut pass = generate(config);
        let _ = out.write_all(pass.as_bytes());
        let _ = out.write_all(b"\n");
        pass.zeroize();
    }

    None
}

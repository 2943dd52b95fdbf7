use anyhow::{anyhow, Result};
use rand::distr::Alphanumeric;
use rand::Rng;

const MAX_RANDOM_DIGITS: usize = 64;
const RANDOM_EMAIL_DOMAIN: &str = "example.com";

/// Random number with exactly `n` digits, without a leading zero.
pub fn generate_random_with_n_digits(n: usize) -> Result<String> {
    if n == 0 || n > MAX_RANDOM_DIGITS {
        return Err(anyhow!("number of digits must be between 1 and {}, got {}", MAX_RANDOM_DIGITS, n));
    }
    let mut rng = rand::rng();
    let mut digits = String::with_capacity(n);
    digits.push(char::from(b'0' + rng.random_range(1..10u8)));
    for _ in 1..n {
        digits.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
    Ok(digits)
}

/// Throwaway address for tests and seed data.
pub fn generate_random_email() -> String {
    let local: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("{}@{}", local, RANDOM_EMAIL_DOMAIN)
}

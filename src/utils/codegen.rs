//! Short code and secret key generation.

use rand::Rng;

/// Character set for short codes.
///
/// Alphanumeric with the lookalike characters `0`, `O`, `I` and `l` removed,
/// so codes survive being read aloud or retyped from print.
pub const CODE_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Number of random characters appended to a short code to form its secret key.
const SECRET_SUFFIX_LENGTH: usize = 8;

/// Generates a random short code of the given length.
///
/// Every character is drawn uniformly from [`CODE_ALPHABET`]. The result is
/// random, not guaranteed unique; uniqueness is the allocator's job.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Derives the admin secret key for a short code.
///
/// The key embeds the code itself followed by a random suffix, e.g.
/// `Xk3fQ9a_J7mpR2wN`. Knowing the short code alone is not enough to manage
/// the link.
pub fn generate_secret_key(short_code: &str) -> String {
    format!("{}_{}", short_code, generate_code(SECRET_SUFFIX_LENGTH))
}

//! Stateless digest functions used as the entropy source for tile patterns
//!
//! A [`Digest`] wraps a plain function pointer, so every call hashes with a
//! freshly constructed hasher. Copies can be shared between threads and reused
//! across generations without any reset step.

use std::fmt;

use md5::Md5;
use sha2::{Digest as _, Sha256, Sha512};

use crate::io::configuration::MIN_DIGEST_BYTES;
use crate::io::error::{IdenticonError, Result, invalid_configuration};

/// Signature of a pure digest function
pub type DigestFn = fn(&[u8]) -> Vec<u8>;

const FNV128_OFFSET_BASIS: u128 = 0x6c62_272e_07bb_0142_62b8_2175_6295_c58d;
const FNV128_PRIME: u128 = 0x0000_0000_0100_0000_0000_0000_0000_013b;

/// Named digest function
///
/// Two digests compare equal when their names match.
#[derive(Clone, Copy)]
pub struct Digest {
    name: &'static str,
    function: DigestFn,
}

impl Digest {
    /// 128-bit FNV-1, big-endian output
    pub const FNV128: Self = Self::new("fnv128", fnv128_digest);
    /// MD5
    pub const MD5: Self = Self::new("md5", md5_digest);
    /// SHA-256
    pub const SHA256: Self = Self::new("sha256", sha256_digest);
    /// SHA-512
    pub const SHA512: Self = Self::new("sha512", sha512_digest);

    /// Wrap a custom digest function
    ///
    /// The function must be deterministic and should not return an empty
    /// output, otherwise stretching fails.
    pub const fn new(name: &'static str, function: DigestFn) -> Self {
        Self { name, function }
    }

    /// Name the digest was registered with
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Hash `input` once
    pub fn compute(&self, input: &[u8]) -> Vec<u8> {
        (self.function)(input)
    }

    /// Hash `input` and extend the result until it holds at least `required` bytes
    ///
    /// Each extension round appends the digest of everything produced so far,
    /// so the output depends only on the input and the digest function.
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::InvalidConfiguration`] if the digest function
    /// produces an empty output while more bytes are still needed
    pub fn stretched(&self, input: &[u8], required: usize) -> Result<Vec<u8>> {
        let mut digest = self.compute(input);

        while digest.len() < required {
            let extension = self.compute(&digest);
            if extension.is_empty() {
                return Err(invalid_configuration(
                    "digest",
                    &self.name,
                    &"digest function produced no output",
                ));
            }
            digest.extend_from_slice(&extension);
        }

        Ok(digest)
    }
}

impl Default for Digest {
    fn default() -> Self {
        Self::FNV128
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Digest {}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Digest").field(&self.name).finish()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Number of digest bytes the matrix of a given resolution reads
///
/// One byte per tile of the left half plus, for odd resolutions, the center
/// column. Equals `ceil(resolution² / 2)` rounded up to a whole column.
pub const fn required_digest_bytes(resolution: usize) -> usize {
    resolution * resolution.div_ceil(2)
}

/// Digest an identifier and stretch it for the given resolution
///
/// The result is never shorter than [`MIN_DIGEST_BYTES`], which keeps the
/// bytes used for a derived foreground color available at every resolution.
///
/// # Errors
///
/// Returns [`IdenticonError::InvalidIdentifier`] for an empty identifier and
/// propagates stretching failures of the digest function
pub fn digest_identifier(identifier: &str, resolution: usize, digest: Digest) -> Result<Vec<u8>> {
    if identifier.is_empty() {
        return Err(IdenticonError::InvalidIdentifier);
    }

    let required = required_digest_bytes(resolution).max(MIN_DIGEST_BYTES);
    digest.stretched(identifier.as_bytes(), required)
}

fn fnv128_digest(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .fold(FNV128_OFFSET_BASIS, |hash, &byte| {
            hash.wrapping_mul(FNV128_PRIME) ^ u128::from(byte)
        })
        .to_be_bytes()
        .to_vec()
}

fn md5_digest(input: &[u8]) -> Vec<u8> {
    Md5::digest(input).to_vec()
}

fn sha256_digest(input: &[u8]) -> Vec<u8> {
    Sha256::digest(input).to_vec()
}

fn sha512_digest(input: &[u8]) -> Vec<u8> {
    Sha512::digest(input).to_vec()
}

//! Hex encoded message digests of text.

use std::fmt;
use std::str::FromStr;

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::error::DigestError;

/// A supported digest algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// SHA-1, 160 bits.
    Sha1,
    /// SHA-256.
    #[default]
    Sha256,
    /// SHA-512.
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm.
    pub const ALL: [Algorithm; 3] = [Algorithm::Sha1, Algorithm::Sha256, Algorithm::Sha512];

    /// The conventional name, e.g. `SHA-256`.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    /// Accepts `sha1`, `SHA-1`, `sha256`, `SHA-256` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "").to_ascii_lowercase();
        match normalized.as_str() {
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha512" => Ok(Algorithm::Sha512),
            _ => Err(DigestError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Hash the UTF-8 bytes of `text` and return the lowercase hex digest.
pub fn digest_hex(algorithm: Algorithm, text: &str) -> Result<String, DigestError> {
    if text.trim().is_empty() {
        return Err(DigestError::EmptyInput);
    }

    let bytes = text.as_bytes();
    let digest = match algorithm {
        Algorithm::Sha1 => hex::encode(Sha1::digest(bytes)),
        Algorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
        Algorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
    };
    tracing::trace!(%algorithm, len = bytes.len(), "computed digest");

    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(
            digest_hex(Algorithm::Sha1, "abc").unwrap(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            digest_hex(Algorithm::Sha256, "abc").unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            digest_hex(Algorithm::Sha512, "abc").unwrap(),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(digest_hex(Algorithm::Sha256, ""), Err(DigestError::EmptyInput));
        assert_eq!(digest_hex(Algorithm::Sha1, " \n\t"), Err(DigestError::EmptyInput));
    }

    #[test]
    fn names() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("sha512".parse::<Algorithm>(), Ok(Algorithm::Sha512));
        assert_eq!(
            "md5".parse::<Algorithm>(),
            Err(DigestError::UnknownAlgorithm("md5".to_string()))
        );
    }
}

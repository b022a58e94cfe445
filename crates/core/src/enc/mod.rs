//! Contains simplified access to the `base58check` and `cashaddr` encoders/decoders for
//! Bitcoin Cash addresses. Also defines common encoder errors.

pub mod base58;
pub mod cashaddr;

pub use base58::*;
pub use cashaddr::*;

use thiserror::Error;

/// Errors that can be returned by the base58check and cashaddr codecs.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Bubbled up error from the bs58 library. Covers both bad characters and checksum
    /// mismatches.
    #[error(transparent)]
    B58Error(#[from] bs58::decode::Error),

    /// Bubbled up error from the bech32 library during 5-bit regrouping.
    #[error("BechError: {:?}", .0)]
    BechError(#[from] bech32::Error),

    /// A cashaddr string was given without a `prefix:` part.
    #[error("Missing cashaddr prefix separator")]
    MissingPrefix,

    /// The cashaddr prefix is empty or contains characters outside `[a-z0-9]`.
    #[error("Invalid cashaddr prefix {:?}", .0)]
    InvalidPrefix(String),

    /// The string mixes upper and lower case characters.
    #[error("Mixed case cashaddr string")]
    MixedCase,

    /// A character outside the cashaddr charset.
    #[error("Invalid cashaddr character {:?}", .0)]
    InvalidChar(char),

    /// The payload is too short to hold a version byte and checksum.
    #[error("Invalid cashaddr payload length")]
    InvalidLength,

    /// The embedded checksum does not match the prefix and payload.
    #[error("Cashaddr checksum mismatch")]
    BadChecksum,

    /// The version byte has its reserved bit set or names an unknown type.
    #[error("Unknown cashaddr version byte 0x{:02x}", .0)]
    UnknownVersion(u8),

    /// The hash length is not one of the sizes cashaddr can express, or disagrees with the
    /// size code in the version byte.
    #[error("Unsupported cashaddr hash length {}", .0)]
    InvalidHashLength(usize),
}

/// A simple result type alias
pub type EncodingResult<T> = Result<T, EncodingError>;

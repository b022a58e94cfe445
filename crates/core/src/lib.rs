//! # bchaddr core
//!
//! `bchaddr-core` contains the raw string codecs used by the `bchaddr` address
//! resolution engine.
//!
//! ## Crate Layout
//!
//! ### Enc
//!
//! The `enc` module wraps two checksummed encodings:
//!
//! - `base58`: base58check, as used by legacy and bitpay addresses. A thin
//!   layer over `bs58` with its `check` feature.
//! - `cashaddr`: the prefixed, BCH-checksummed base32 format used by cashaddr
//!   and slpaddr strings. Bit-packing is shared with `bech32`, while the
//!   polymod and prefix expansion are cashaddr-specific.
//!
//! Neither codec knows about networks or version tables. They turn bytes into
//! strings and back, and fail with an `EncodingError` when a checksum or
//! alphabet check does not pass.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod enc;

pub use enc::*;

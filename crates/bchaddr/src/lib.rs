//! # bchaddr
//!
//! Detect the format, network, and type of a Bitcoin Cash address string, and translate
//! between the legacy, bitpay, cashaddr, and slpaddr encodings of the same 20-byte hash.
//!
//! ```
//! use bchaddr::{detect_address_format, to_cash_address, Format, Mode};
//!
//! let legacy = "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu";
//! assert_eq!(detect_address_format(legacy, Mode::Standard).unwrap(), Format::Legacy);
//! assert_eq!(
//!     to_cash_address(legacy, Mode::Standard).unwrap(),
//!     "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a"
//! );
//! ```
//!
//! ## Crate Layout
//!
//! - `resolve` decodes a string of unknown format by trying base58check, cashaddr, and
//!   slpaddr in that order.
//! - `render` re-encodes a `DecodedAddress` into any format.
//! - `params` holds the version byte and prefix tables.
//! - `api` has the detect, translate, validate, and predicate functions built on the two.
//!
//! ## Modes
//!
//! Regtest reuses testnet version bytes, so resolution never guesses it. Every entry point
//! takes a `Mode`: `Mode::Standard` resolves mainnet and testnet, `Mode::Regtest` resolves
//! regtest only.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod api;
pub mod error;
pub mod params;
pub mod render;
pub mod resolve;
pub mod types;

pub use api::*;
pub use error::*;
pub use render::*;
pub use resolve::resolve;
pub use types::*;

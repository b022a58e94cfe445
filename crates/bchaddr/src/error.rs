//! Errors for address resolution and rendering.

use thiserror::Error;

use bchaddr_core::enc::EncodingError;

use crate::types::{Format, Network};

/// Errors returned by address resolution and rendering.
#[derive(Debug, Error)]
pub enum AddressError {
    /// No encoding scheme accepted the input under the active mode.
    #[error("Invalid address: {:?}", .0)]
    InvalidAddress(String),

    /// The format has no encoding for the network. E.g. bitpay has no regtest version
    /// bytes. This is a caller error, not a property of any input string.
    #[error("No {} encoding is defined for {}", .format, .network)]
    UnsupportedEncoding {
        /// The requested output format
        format: Format,
        /// The network of the decoded address
        network: Network,
    },

    /// Bubbled up from the codec while rendering.
    #[error(transparent)]
    EncodingError(#[from] EncodingError),
}

/// Type alias for address results
pub type AddressResult<T> = Result<T, AddressError>;

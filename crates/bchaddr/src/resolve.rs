//! Decode dispatch. An address of unknown format is offered to each scheme in a fixed
//! order: base58check, then cashaddr, then slpaddr. The first scheme to produce a
//! `DecodedAddress` wins. Scheme-level failures are traced and discarded, so callers only
//! ever see a single `InvalidAddress`.

use thiserror::Error;
use tracing::{debug, trace};

use bchaddr_core::enc::{decode_base58check, decode_cashaddr, CashType, EncodingError, SEPARATOR};

use crate::{
    error::{AddressError, AddressResult},
    params,
    types::{AddressType, DecodedAddress, Format, Mode, HASH_LEN},
};

/// Why a single scheme declined an address. Never leaves this module.
#[derive(Debug, Error)]
enum Miss {
    #[error(transparent)]
    Codec(#[from] EncodingError),

    #[error("payload is {} bytes, expected {}", .0, HASH_LEN + 1)]
    PayloadLength(usize),

    #[error("version byte 0x{:02x} is not known in this mode", .0)]
    UnknownVersion(u8),

    #[error("prefix {:?} is not known in this mode", .0)]
    UnknownPrefix(String),

    #[error("hash is {} bytes, expected {}", .0, HASH_LEN)]
    HashLength(usize),

    #[error("{} has no candidate prefixes in this mode", .0)]
    NoCandidates(Format),
}

type Attempt = fn(&str, Mode) -> Result<DecodedAddress, Miss>;

/// Schemes in the order they are tried. Base58check goes first: its checksum differs
/// enough from cashaddr's that neither accepts the other's strings.
const SCHEMES: [(&str, Attempt); 3] = [
    ("base58", decode_base58_address),
    ("cashaddr", decode_cashaddr_address),
    ("slpaddr", decode_slpaddr_address),
];

impl From<CashType> for AddressType {
    fn from(kind: CashType) -> Self {
        match kind {
            CashType::P2PKH => AddressType::P2PKH,
            CashType::P2SH => AddressType::P2SH,
        }
    }
}

impl From<AddressType> for CashType {
    fn from(kind: AddressType) -> Self {
        match kind {
            AddressType::P2PKH => CashType::P2PKH,
            AddressType::P2SH => CashType::P2SH,
        }
    }
}

/// Decode `address` under `mode`, trying each scheme in turn.
pub fn resolve(address: &str, mode: Mode) -> AddressResult<DecodedAddress> {
    SCHEMES
        .iter()
        .find_map(|(scheme, attempt)| match attempt(address, mode) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                trace!(scheme, %mode, error = %e, "scheme declined address");
                None
            }
        })
        .ok_or_else(|| {
            debug!(address, %mode, "no scheme accepted address");
            AddressError::InvalidAddress(address.to_owned())
        })
}

fn decode_base58_address(address: &str, mode: Mode) -> Result<DecodedAddress, Miss> {
    let payload = decode_base58check(address)?;
    let (&version, hash) = match payload.split_first() {
        Some(split) if payload.len() == HASH_LEN + 1 => split,
        _ => return Err(Miss::PayloadLength(payload.len())),
    };
    let (format, network, kind) =
        params::from_version_byte(version, mode).ok_or(Miss::UnknownVersion(version))?;
    let hash: [u8; HASH_LEN] = hash.try_into().map_err(|_| Miss::HashLength(hash.len()))?;
    Ok(DecodedAddress::from_parts(hash, format, network, kind))
}

fn decode_cashaddr_address(address: &str, mode: Mode) -> Result<DecodedAddress, Miss> {
    decode_prefixed_address(Format::Cashaddr, address, mode)
}

fn decode_slpaddr_address(address: &str, mode: Mode) -> Result<DecodedAddress, Miss> {
    decode_prefixed_address(Format::Slpaddr, address, mode)
}

/// An explicit prefix gets exactly one attempt. Otherwise each candidate prefix for the
/// mode is prepended in turn and the first one that decodes wins.
fn decode_prefixed_address(
    format: Format,
    address: &str,
    mode: Mode,
) -> Result<DecodedAddress, Miss> {
    if address.contains(SEPARATOR) {
        return decode_with_prefix(format, address, mode);
    }

    // match the body's case so an all-uppercase string stays single-case
    let upper = !address.chars().any(|c| c.is_ascii_lowercase());

    let mut miss = Miss::NoCandidates(format);
    for candidate in params::candidate_prefixes(format, mode) {
        let prefix = if upper {
            candidate.to_ascii_uppercase()
        } else {
            (*candidate).to_owned()
        };
        let prefixed = format!("{}{}{}", prefix, SEPARATOR, address);
        match decode_with_prefix(format, &prefixed, mode) {
            Ok(decoded) => return Ok(decoded),
            Err(e) => miss = e,
        }
    }
    Err(miss)
}

fn decode_with_prefix(format: Format, address: &str, mode: Mode) -> Result<DecodedAddress, Miss> {
    let payload = decode_cashaddr(address)?;
    let network = params::network_for_prefix(format, &payload.prefix, mode)
        .ok_or_else(|| Miss::UnknownPrefix(payload.prefix.clone()))?;
    let hash: [u8; HASH_LEN] = payload
        .hash
        .as_slice()
        .try_into()
        .map_err(|_| Miss::HashLength(payload.hash.len()))?;
    Ok(DecodedAddress::from_parts(
        hash,
        format,
        network,
        payload.kind.into(),
    ))
}

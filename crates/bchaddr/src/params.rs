//! Version byte and prefix tables. Both are exhaustive matches over the enum product, so a
//! new variant cannot be added without deciding its encoding here.

use crate::types::{AddressType, Format, Mode, Network};

/// Fixed cashaddr prefix forced by `encode_as_regtestaddr`.
pub const CASHADDR_REGTEST_PREFIX: &str = "bchreg";

/// Fixed slpaddr prefix forced by `encode_as_slp_regtestaddr`.
pub const SLPADDR_REGTEST_PREFIX: &str = "slpreg";

/// The base58check version byte for a format, network, and type. `None` for the prefixed
/// formats, and for bitpay on regtest.
///
/// Regtest legacy addresses reuse the testnet bytes, and bitpay testnet reuses the legacy
/// testnet bytes. `Mode` and table order disambiguate them on decode.
pub fn version_byte(format: Format, network: Network, kind: AddressType) -> Option<u8> {
    use AddressType::*;
    use Format::*;
    use Network::*;

    match (format, network, kind) {
        (Legacy, Mainnet, P2PKH) => Some(0x00),
        (Legacy, Mainnet, P2SH) => Some(0x05),
        (Legacy, Testnet | Regtest, P2PKH) => Some(0x6f),
        (Legacy, Testnet | Regtest, P2SH) => Some(0xc4),
        (Bitpay, Mainnet, P2PKH) => Some(0x1c),
        (Bitpay, Mainnet, P2SH) => Some(0x28),
        (Bitpay, Testnet, P2PKH) => Some(0x6f),
        (Bitpay, Testnet, P2SH) => Some(0xc4),
        (Bitpay, Regtest, _) => None,
        (Cashaddr | Slpaddr, _, _) => None,
    }
}

/// The cashaddr prefix for a format and network. `None` for the base58 formats.
pub fn prefix(format: Format, network: Network) -> Option<&'static str> {
    use Format::*;
    use Network::*;

    match (format, network) {
        (Cashaddr, Mainnet) => Some("bitcoincash"),
        (Cashaddr, Testnet) => Some("bchtest"),
        (Cashaddr, Regtest) => Some(CASHADDR_REGTEST_PREFIX),
        (Slpaddr, Mainnet) => Some("simpleledger"),
        (Slpaddr, Testnet) => Some("slptest"),
        (Slpaddr, Regtest) => Some(SLPADDR_REGTEST_PREFIX),
        (Legacy | Bitpay, _) => None,
    }
}

/// Prefixes tried, in order, when a prefixed-format string arrives without one.
pub fn candidate_prefixes(format: Format, mode: Mode) -> &'static [&'static str] {
    match (format, mode) {
        (Format::Cashaddr, Mode::Standard) => &["bitcoincash", "bchtest"],
        (Format::Cashaddr, Mode::Regtest) => &["regtest", "bchreg"],
        (Format::Slpaddr, Mode::Standard) => &["simpleledger", "slptest"],
        (Format::Slpaddr, Mode::Regtest) => &["slpreg"],
        (Format::Legacy | Format::Bitpay, _) => &[],
    }
}

/// True if `(format, network, kind)` has an entry in the table for its format.
pub fn is_defined(format: Format, network: Network, kind: AddressType) -> bool {
    match format {
        Format::Legacy | Format::Bitpay => version_byte(format, network, kind).is_some(),
        Format::Cashaddr | Format::Slpaddr => prefix(format, network).is_some(),
    }
}

/// Reverse version byte lookup restricted to the networks `mode` admits. Rows are scanned
/// legacy first, so a byte shared by legacy and bitpay resolves as legacy.
pub fn from_version_byte(version: u8, mode: Mode) -> Option<(Format, Network, AddressType)> {
    [Format::Legacy, Format::Bitpay]
        .into_iter()
        .flat_map(|format| mode.networks().map(move |network| (format, network)))
        .flat_map(|(format, network)| {
            AddressType::ALL
                .iter()
                .map(move |&kind| (format, network, kind))
        })
        .find(|&(format, network, kind)| version_byte(format, network, kind) == Some(version))
}

/// Reverse prefix lookup for `format`, restricted to the networks `mode` admits.
pub fn network_for_prefix(format: Format, prefix: &str, mode: Mode) -> Option<Network> {
    mode.networks()
        .find(|&network| self::prefix(format, network) == Some(prefix))
}

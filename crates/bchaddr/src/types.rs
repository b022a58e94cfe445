//! The value types shared by the resolver and renderer.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    error::{AddressError, AddressResult},
    params,
};

/// Length of the hash carried by every supported address.
pub const HASH_LEN: usize = 20;

/// Returned when parsing a `Format`, `Network`, `AddressType`, or `Mode` from a string
/// that names none of its variants.
#[derive(Debug, Error)]
#[error("Unknown {} name {:?}", .kind, .name)]
pub struct ParseNameError {
    kind: &'static str,
    name: String,
}

macro_rules! named_enum {
    (
        $(#[$outer:meta])*
        $name:ident, $kind:literal {
            $( $(#[$inner:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$inner])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The lowercase name used by `Display` and `FromStr`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseNameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.to_ascii_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == lower)
                    .ok_or_else(|| ParseNameError {
                        kind: $kind,
                        name: s.to_owned(),
                    })
            }
        }
    };
}

named_enum!(
    /// The textual encoding an address is presented in.
    Format, "format" {
        /// Base58check with the original version bytes.
        Legacy => "legacy",
        /// Base58check with the bitpay version bytes.
        Bitpay => "bitpay",
        /// Prefixed cashaddr.
        Cashaddr => "cashaddr",
        /// Prefixed cashaddr under the SLP token prefixes.
        Slpaddr => "slpaddr",
    }
);

named_enum!(
    /// The network an address belongs to.
    Network, "network" {
        /// Production network.
        Mainnet => "mainnet",
        /// Public test network.
        Testnet => "testnet",
        /// Local regression test network. Only resolvable in `Mode::Regtest`.
        Regtest => "regtest",
    }
);

named_enum!(
    /// The script role of the hash.
    AddressType, "address type" {
        /// Pay to pubkeyhash
        P2PKH => "p2pkh",
        /// Pay to scripthash
        P2SH => "p2sh",
    }
);

named_enum!(
    /// Selects which networks resolution may produce. Several formats reuse version bytes
    /// or near-identical prefixes across modes, so the caller picks the partition.
    Mode, "mode" {
        /// Mainnet and testnet only.
        Standard => "standard",
        /// Regtest only.
        Regtest => "regtest",
    }
);

impl Default for Mode {
    fn default() -> Self {
        Mode::Standard
    }
}

impl From<bool> for Mode {
    /// Maps a `regtest` flag onto a mode.
    fn from(regtest: bool) -> Self {
        if regtest {
            Mode::Regtest
        } else {
            Mode::Standard
        }
    }
}

impl Mode {
    /// True if addresses on `network` are resolvable in this mode.
    pub fn admits(self, network: Network) -> bool {
        matches!(
            (self, network),
            (Mode::Standard, Network::Mainnet | Network::Testnet)
                | (Mode::Regtest, Network::Regtest)
        )
    }

    /// The networks admitted by this mode, in table order.
    pub fn networks(self) -> impl Iterator<Item = Network> {
        Network::ALL.iter().copied().filter(move |n| self.admits(*n))
    }
}

/// A canonical decoded address: a 20-byte hash plus the format, network, and type it was
/// presented as. Produced by `decode_address` and consumed by the `encode_as_*` family.
///
/// Serializes with the hash as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDecodedAddress", into = "RawDecodedAddress")]
pub struct DecodedAddress {
    hash: [u8; HASH_LEN],
    format: Format,
    network: Network,
    kind: AddressType,
}

impl DecodedAddress {
    /// Instantiate a decoded address. Fails with `UnsupportedEncoding` if `format` has no
    /// encoding for `network`.
    pub fn new(
        hash: [u8; HASH_LEN],
        format: Format,
        network: Network,
        kind: AddressType,
    ) -> AddressResult<Self> {
        if !params::is_defined(format, network, kind) {
            return Err(AddressError::UnsupportedEncoding { format, network });
        }
        Ok(Self::from_parts(hash, format, network, kind))
    }

    /// Instantiate a decoded address from a hash slice. Fails with `InvalidAddress` unless
    /// the slice is exactly 20 bytes.
    pub fn from_slice(
        hash: &[u8],
        format: Format,
        network: Network,
        kind: AddressType,
    ) -> AddressResult<Self> {
        let hash: [u8; HASH_LEN] = hash
            .try_into()
            .map_err(|_| AddressError::InvalidAddress(hex::encode(hash)))?;
        Self::new(hash, format, network, kind)
    }

    /// Callers must have taken the triple from the tables.
    pub(crate) fn from_parts(
        hash: [u8; HASH_LEN],
        format: Format,
        network: Network,
        kind: AddressType,
    ) -> Self {
        Self {
            hash,
            format,
            network,
            kind,
        }
    }

    /// The 20-byte hash.
    pub fn hash(&self) -> &[u8; HASH_LEN] {
        &self.hash
    }

    /// The format the address was presented in.
    pub fn format(&self) -> Format {
        self.format
    }

    /// The network the address belongs to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The script type.
    pub fn kind(&self) -> AddressType {
        self.kind
    }
}

#[derive(Serialize, Deserialize)]
struct RawDecodedAddress {
    hash: String,
    format: Format,
    network: Network,
    #[serde(rename = "type")]
    kind: AddressType,
}

impl From<DecodedAddress> for RawDecodedAddress {
    fn from(d: DecodedAddress) -> Self {
        Self {
            hash: hex::encode(d.hash),
            format: d.format,
            network: d.network,
            kind: d.kind,
        }
    }
}

impl TryFrom<RawDecodedAddress> for DecodedAddress {
    type Error = AddressError;

    fn try_from(raw: RawDecodedAddress) -> AddressResult<Self> {
        let hash = hex::decode(&raw.hash).map_err(|_| AddressError::InvalidAddress(raw.hash))?;
        Self::from_slice(&hash, raw.format, raw.network, raw.kind)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_and_displays_names() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), *format);
        }
        assert_eq!("CashAddr".parse::<Format>().unwrap(), Format::Cashaddr);
        assert_eq!("P2SH".parse::<AddressType>().unwrap(), AddressType::P2SH);
        assert_eq!(Network::Regtest.to_string(), "regtest");
        assert!("signet".parse::<Network>().is_err());
    }

    #[test]
    fn it_partitions_networks_by_mode() {
        assert_eq!(Mode::default(), Mode::Standard);
        assert_eq!(Mode::from(true), Mode::Regtest);
        assert_eq!(
            Mode::Standard.networks().collect::<Vec<_>>(),
            vec![Network::Mainnet, Network::Testnet]
        );
        let regtest: Vec<_> = Mode::Regtest.networks().collect();
        assert_eq!(regtest, vec![Network::Regtest]);
    }

    #[test]
    fn it_enforces_hash_length_and_table_membership() {
        let err = DecodedAddress::from_slice(
            &[0u8; 21],
            Format::Legacy,
            Network::Mainnet,
            AddressType::P2PKH,
        );
        assert!(matches!(err, Err(AddressError::InvalidAddress(_))));

        let err = DecodedAddress::new(
            [0u8; HASH_LEN],
            Format::Bitpay,
            Network::Regtest,
            AddressType::P2PKH,
        );
        assert!(matches!(
            err,
            Err(AddressError::UnsupportedEncoding {
                format: Format::Bitpay,
                network: Network::Regtest
            })
        ));
    }

    #[test]
    fn it_serializes_with_a_hex_hash() {
        let d = DecodedAddress::new(
            [0xab; HASH_LEN],
            Format::Cashaddr,
            Network::Testnet,
            AddressType::P2SH,
        )
        .unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(
            json,
            r#"{"hash":"abababababababababababababababababababab","format":"cashaddr","network":"testnet","type":"p2sh"}"#
        );
        assert_eq!(serde_json::from_str::<DecodedAddress>(&json).unwrap(), d);

        let short = r#"{"hash":"abab","format":"cashaddr","network":"testnet","type":"p2sh"}"#;
        assert!(serde_json::from_str::<DecodedAddress>(short).is_err());
    }
}

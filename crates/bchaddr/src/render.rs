//! Encode dispatch. Looks up the version byte or prefix for the target format and hands
//! the hash to the matching codec.

use bchaddr_core::enc::{encode_base58check, encode_cashaddr};

use crate::{
    error::{AddressError, AddressResult},
    params,
    types::{DecodedAddress, Format, HASH_LEN},
};

/// Render `decoded` in `format`, keeping its network and type. Fails with
/// `UnsupportedEncoding` if the tables have no entry for the combination, e.g. bitpay on
/// regtest.
pub fn render(decoded: &DecodedAddress, format: Format) -> AddressResult<String> {
    let network = decoded.network();
    let unsupported = || AddressError::UnsupportedEncoding { format, network };

    match format {
        Format::Legacy | Format::Bitpay => {
            let version =
                params::version_byte(format, network, decoded.kind()).ok_or_else(unsupported)?;
            let mut payload = Vec::with_capacity(HASH_LEN + 1);
            payload.push(version);
            payload.extend_from_slice(decoded.hash());
            Ok(encode_base58check(&payload))
        }
        Format::Cashaddr | Format::Slpaddr => {
            let prefix = params::prefix(format, network).ok_or_else(unsupported)?;
            render_with_prefix(decoded, prefix)
        }
    }
}

/// Render `decoded` as cashaddr under a caller-chosen prefix, ignoring its network.
pub fn render_with_prefix(decoded: &DecodedAddress, prefix: &str) -> AddressResult<String> {
    Ok(encode_cashaddr(
        prefix,
        decoded.kind().into(),
        decoded.hash(),
    )?)
}

impl DecodedAddress {
    /// Render this address in `format`. See `render`.
    pub fn encode(&self, format: Format) -> AddressResult<String> {
        render(self, format)
    }
}

/// Encode as a legacy base58check address.
pub fn encode_as_legacy(decoded: &DecodedAddress) -> AddressResult<String> {
    render(decoded, Format::Legacy)
}

/// Encode as a bitpay base58check address. Fails for regtest addresses.
pub fn encode_as_bitpay(decoded: &DecodedAddress) -> AddressResult<String> {
    render(decoded, Format::Bitpay)
}

/// Encode as a cashaddr with the prefix for the address's network.
pub fn encode_as_cashaddr(decoded: &DecodedAddress) -> AddressResult<String> {
    render(decoded, Format::Cashaddr)
}

/// Encode as an slpaddr with the prefix for the address's network.
pub fn encode_as_slpaddr(decoded: &DecodedAddress) -> AddressResult<String> {
    render(decoded, Format::Slpaddr)
}

/// Encode as a `bchreg:` cashaddr, whatever the address's network.
pub fn encode_as_regtestaddr(decoded: &DecodedAddress) -> AddressResult<String> {
    render_with_prefix(decoded, params::CASHADDR_REGTEST_PREFIX)
}

/// Encode as an `slpreg:` slpaddr, whatever the address's network.
pub fn encode_as_slp_regtestaddr(decoded: &DecodedAddress) -> AddressResult<String> {
    render_with_prefix(decoded, params::SLPADDR_REGTEST_PREFIX)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::{AddressType, Network};

    const ZERO_LEGACY: &str = "1111111111111111111114oLvT2";

    fn zero(format: Format, network: Network, kind: AddressType) -> DecodedAddress {
        DecodedAddress::new([0u8; HASH_LEN], format, network, kind).unwrap()
    }

    #[test]
    fn it_renders_every_format() {
        let d = zero(Format::Legacy, Network::Mainnet, AddressType::P2PKH);
        let cases = [
            (Format::Legacy, ZERO_LEGACY),
            (Format::Bitpay, "CGTta3M4t3yXu8uRgkKvaWd2d8DQvDPnpL"),
            (
                Format::Cashaddr,
                "bitcoincash:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqfnhks603",
            ),
            (
                Format::Slpaddr,
                "simpleledger:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq9gud9630",
            ),
        ];
        for (format, expected) in cases.iter() {
            assert_eq!(&render(&d, *format).unwrap(), expected);
            assert_eq!(&d.encode(*format).unwrap(), expected);
        }
        assert_eq!(encode_as_legacy(&d).unwrap(), ZERO_LEGACY);
        assert_eq!(encode_as_bitpay(&d).unwrap(), cases[1].1);
        assert_eq!(encode_as_cashaddr(&d).unwrap(), cases[2].1);
        assert_eq!(encode_as_slpaddr(&d).unwrap(), cases[3].1);
    }

    #[test]
    fn it_follows_the_network() {
        let d = zero(Format::Cashaddr, Network::Testnet, AddressType::P2SH);
        let legacy = encode_as_legacy(&d).unwrap();
        assert_eq!(legacy, "2MsFDzHRUAMpjHxKyoEHU3aMCMsVtMqs1PV");
        let slp = encode_as_slpaddr(&d).unwrap();
        assert_eq!(slp, "slptest:pqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqpsf90epd");
    }

    #[test]
    fn it_forces_regtest_prefixes() {
        let d = zero(Format::Legacy, Network::Mainnet, AddressType::P2PKH);
        let cash = encode_as_regtestaddr(&d).unwrap();
        assert_eq!(cash, "bchreg:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqha9s37tt");
        let slp = encode_as_slp_regtestaddr(&d).unwrap();
        assert_eq!(slp, "slpreg:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq2alp6jjz");
    }

    #[test]
    fn it_refuses_bitpay_on_regtest() {
        let d = zero(Format::Legacy, Network::Regtest, AddressType::P2PKH);
        match encode_as_bitpay(&d) {
            Err(AddressError::UnsupportedEncoding {
                format: Format::Bitpay,
                network: Network::Regtest,
            }) => {}
            other => panic!("expected an unsupported encoding error, got {:?}", other),
        }
        let legacy = encode_as_legacy(&d).unwrap();
        assert_eq!(legacy, "mfWxJ45yp2SFn7UciZyNpvDKrzbhyfKrY8");
        let cash = encode_as_cashaddr(&d).unwrap();
        assert_eq!(cash, "bchreg:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqha9s37tt");
    }
}

//! Detection, translation, and validation. Everything here is a thin wrapper over
//! `resolve` and `render`.

use crate::{
    error::AddressResult,
    render::render,
    resolve::resolve,
    types::{AddressType, DecodedAddress, Format, Mode, Network},
};

/// True if `input` resolves in `Mode::Standard`.
pub fn is_valid_address(input: &str) -> bool {
    is_valid_address_in(input, Mode::Standard)
}

/// True if `input` resolves in `mode`.
pub fn is_valid_address_in(input: &str, mode: Mode) -> bool {
    resolve(input, mode).is_ok()
}

/// Decode an address of any supported format.
pub fn decode_address(address: &str, mode: Mode) -> AddressResult<DecodedAddress> {
    resolve(address, mode)
}

/// Detect the format of an address.
pub fn detect_address_format(address: &str, mode: Mode) -> AddressResult<Format> {
    Ok(resolve(address, mode)?.format())
}

/// Detect the network of an address.
pub fn detect_address_network(address: &str, mode: Mode) -> AddressResult<Network> {
    Ok(resolve(address, mode)?.network())
}

/// Detect the script type of an address.
pub fn detect_address_type(address: &str, mode: Mode) -> AddressResult<AddressType> {
    Ok(resolve(address, mode)?.kind())
}

fn translate(address: &str, mode: Mode, target: Format) -> AddressResult<String> {
    let decoded = resolve(address, mode)?;
    if decoded.format() == target {
        return Ok(address.to_owned());
    }
    render(&decoded, target)
}

/// Translate to legacy format. Returns the input unchanged if it is already legacy.
pub fn to_legacy_address(address: &str, mode: Mode) -> AddressResult<String> {
    translate(address, mode, Format::Legacy)
}

/// Translate to bitpay format. Returns the input unchanged if it is already bitpay.
/// Bitpay has no regtest variant, so this always resolves in `Mode::Standard`.
pub fn to_bitpay_address(address: &str) -> AddressResult<String> {
    translate(address, Mode::Standard, Format::Bitpay)
}

/// Translate to cashaddr format. Returns the input unchanged if it is already cashaddr,
/// prefixed or not.
pub fn to_cash_address(address: &str, mode: Mode) -> AddressResult<String> {
    translate(address, mode, Format::Cashaddr)
}

/// Translate to slpaddr format. Returns the input unchanged if it is already slpaddr.
pub fn to_slp_address(address: &str, mode: Mode) -> AddressResult<String> {
    translate(address, mode, Format::Slpaddr)
}

/// True if the address is legacy. Resolves in `Mode::Standard`.
pub fn is_legacy_address(address: &str) -> AddressResult<bool> {
    let format = detect_address_format(address, Mode::Standard)?;
    Ok(format == Format::Legacy)
}

/// True if the address is bitpay. Resolves in `Mode::Standard`.
pub fn is_bitpay_address(address: &str) -> AddressResult<bool> {
    let format = detect_address_format(address, Mode::Standard)?;
    Ok(format == Format::Bitpay)
}

/// True if the address is cashaddr.
pub fn is_cash_address(address: &str, mode: Mode) -> AddressResult<bool> {
    Ok(detect_address_format(address, mode)? == Format::Cashaddr)
}

/// True if the address is slpaddr.
pub fn is_slp_address(address: &str, mode: Mode) -> AddressResult<bool> {
    Ok(detect_address_format(address, mode)? == Format::Slpaddr)
}

/// True if the address is for mainnet.
pub fn is_mainnet_address(address: &str, mode: Mode) -> AddressResult<bool> {
    Ok(detect_address_network(address, mode)? == Network::Mainnet)
}

/// True if the address is for testnet.
pub fn is_testnet_address(address: &str, mode: Mode) -> AddressResult<bool> {
    Ok(detect_address_network(address, mode)? == Network::Testnet)
}

/// True if the address is for regtest.
pub fn is_regtest_address(address: &str, mode: Mode) -> AddressResult<bool> {
    Ok(detect_address_network(address, mode)? == Network::Regtest)
}

/// True if the address is pay to pubkeyhash.
pub fn is_p2pkh_address(address: &str, mode: Mode) -> AddressResult<bool> {
    Ok(detect_address_type(address, mode)? == AddressType::P2PKH)
}

/// True if the address is pay to scripthash.
pub fn is_p2sh_address(address: &str, mode: Mode) -> AddressResult<bool> {
    Ok(detect_address_type(address, mode)? == AddressType::P2SH)
}

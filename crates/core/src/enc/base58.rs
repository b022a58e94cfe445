//! Base58check, as used by legacy and bitpay addresses.

use crate::enc::EncodingResult;

/// Encode a byte slice as a base58check string. The 4-byte double-sha256 checksum is
/// appended before encoding.
pub fn encode_base58check(v: &[u8]) -> String {
    bs58::encode(v).with_check().into_string()
}

/// Decode a base58check string. The checksum is verified and stripped, so the returned
/// vector is the versioned payload only.
pub fn decode_base58check(s: &str) -> EncodingResult<Vec<u8>> {
    Ok(bs58::decode(s).with_check(None).into_vec()?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::enc::EncodingError;

    #[test]
    fn it_should_encode_and_decode_base58check() {
        let cases = [
            (
                "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu",
                "0076a04053bda0a88bda5177b86a15c3b29f559873",
            ),
            (
                "3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC",
                "0576a04053bda0a88bda5177b86a15c3b29f559873",
            ),
            (
                "1111111111111111111114oLvT2",
                "000000000000000000000000000000000000000000",
            ),
            (
                "CGTta3M4t3yXu8uRgkKvaWd2d8DQvDPnpL",
                "1c0000000000000000000000000000000000000000",
            ),
        ];
        for (addr, payload) in cases.iter() {
            let decoded = decode_base58check(addr).unwrap();
            assert_eq!(hex::encode(&decoded), *payload);
            assert_eq!(encode_base58check(&decoded), *addr);
        }
    }

    #[test]
    fn it_should_error_on_bad_checksum_and_alphabet() {
        match decode_base58check("1111111111111111111114oLvT3") {
            Err(EncodingError::B58Error(_)) => {}
            other => panic!("expected a checksum error, got {:?}", other),
        }
        // '0' is outside the base58 alphabet
        let bad_char = "10BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu";
        assert!(decode_base58check(bad_char).is_err());
        assert!(decode_base58check("not an address").is_err());
    }
}

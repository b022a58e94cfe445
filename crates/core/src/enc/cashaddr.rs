//! The cashaddr codec. Encodes a `(prefix, type, hash)` triple as
//! `prefix:payload`, where the payload carries a version byte, the hash, and a 40-bit
//! checksum committed to the prefix.
//!
//! The 8-to-5 bit regrouping is identical to bech32, so we reuse the `bech32` crate for
//! it. The checksum is not: cashaddr uses its own generator set, expands the prefix using
//! only the low 5 bits of each character, and appends 8 checksum characters instead of 6.

use bech32::{u5, FromBase32, ToBase32};

use crate::enc::{EncodingError, EncodingResult};

/// The cashaddr separator between prefix and payload.
pub const SEPARATOR: char = ':';

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const CHECKSUM_LEN: usize = 8;

const GENERATORS: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Hash lengths in bytes, indexed by the size code in the low 3 bits of the version byte.
const HASH_SIZES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

/// The script type marker carried in a cashaddr version byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CashType {
    /// Pay to pubkeyhash. Type bits `0`.
    P2PKH,
    /// Pay to scripthash. Type bits `1`.
    P2SH,
}

impl CashType {
    fn to_bits(self) -> u8 {
        match self {
            CashType::P2PKH => 0,
            CashType::P2SH => 1,
        }
    }

    fn from_version(version: u8) -> EncodingResult<Self> {
        if version & 0x80 != 0 {
            return Err(EncodingError::UnknownVersion(version));
        }
        match (version >> 3) & 0x0f {
            0 => Ok(CashType::P2PKH),
            1 => Ok(CashType::P2SH),
            _ => Err(EncodingError::UnknownVersion(version)),
        }
    }
}

/// A decoded cashaddr string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashPayload {
    /// The lowercased prefix the checksum was verified against.
    pub prefix: String,
    /// The script type from the version byte.
    pub kind: CashType,
    /// The hash. Its length agrees with the version byte's size code.
    pub hash: Vec<u8>,
}

fn polymod<I>(values: I) -> u64
where
    I: IntoIterator<Item = u8>,
{
    let mut c: u64 = 1;
    for d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07_ffff_ffff) << 5) ^ u64::from(d);
        for (i, g) in GENERATORS.iter().enumerate() {
            if c0 & (1 << i) != 0 {
                c ^= g;
            }
        }
    }
    c ^ 1
}

fn expand_prefix(prefix: &str) -> impl Iterator<Item = u8> + '_ {
    prefix.bytes().map(|b| b & 0x1f).chain(std::iter::once(0))
}

fn size_code(len: usize) -> EncodingResult<u8> {
    HASH_SIZES
        .iter()
        .position(|&size| size == len)
        .map(|code| code as u8)
        .ok_or(EncodingError::InvalidHashLength(len))
}

fn check_prefix(prefix: &str) -> EncodingResult<()> {
    let alphanumeric = prefix.bytes().all(|b| b.is_ascii_alphanumeric());
    let has_lower = prefix.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = prefix.bytes().any(|b| b.is_ascii_uppercase());
    if prefix.is_empty() || !alphanumeric || (has_lower && has_upper) {
        return Err(EncodingError::InvalidPrefix(prefix.to_owned()));
    }
    Ok(())
}

fn to_char(value: u8) -> char {
    CHARSET[usize::from(value & 0x1f)] as char
}

fn from_char(c: char) -> EncodingResult<u8> {
    CHARSET
        .iter()
        .position(|&x| char::from(x) == c)
        .map(|p| p as u8)
        .ok_or(EncodingError::InvalidChar(c))
}

/// Encode a hash as a cashaddr string under `prefix`. The output is always lowercase and
/// always carries the prefix.
pub fn encode_cashaddr(prefix: &str, kind: CashType, hash: &[u8]) -> EncodingResult<String> {
    check_prefix(prefix)?;
    let prefix = prefix.to_ascii_lowercase();

    let mut payload = Vec::with_capacity(hash.len() + 1);
    payload.push((kind.to_bits() << 3) | size_code(hash.len())?);
    payload.extend_from_slice(hash);

    let data: Vec<u8> = payload.to_base32().into_iter().map(u5::to_u8).collect();
    let checksum = polymod(
        expand_prefix(&prefix)
            .chain(data.iter().copied())
            .chain([0u8; CHECKSUM_LEN]),
    );

    let mut s = String::with_capacity(prefix.len() + 1 + data.len() + CHECKSUM_LEN);
    s.push_str(&prefix);
    s.push(SEPARATOR);
    s.extend(data.iter().map(|&d| to_char(d)));
    for i in 0..CHECKSUM_LEN {
        s.push(to_char((checksum >> (5 * (7 - i))) as u8));
    }
    Ok(s)
}

/// Decode a prefixed cashaddr string. Accepts all-lowercase or all-uppercase input. The
/// prefix is required; callers that want to guess a prefix must prepend candidates
/// themselves.
pub fn decode_cashaddr(s: &str) -> EncodingResult<CashPayload> {
    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(EncodingError::MixedCase);
    }
    let s = s.to_ascii_lowercase();

    let (prefix, body) = s
        .split_once(SEPARATOR)
        .ok_or(EncodingError::MissingPrefix)?;
    check_prefix(prefix)?;

    let data = body
        .chars()
        .map(from_char)
        .collect::<EncodingResult<Vec<u8>>>()?;
    if data.len() <= CHECKSUM_LEN {
        return Err(EncodingError::InvalidLength);
    }
    if polymod(expand_prefix(prefix).chain(data.iter().copied())) != 0 {
        return Err(EncodingError::BadChecksum);
    }

    let groups = data[..data.len() - CHECKSUM_LEN]
        .iter()
        .map(|&d| u5::try_from_u8(d))
        .collect::<Result<Vec<u5>, _>>()?;
    let payload = Vec::<u8>::from_base32(&groups)?;

    let (&version, hash) = payload.split_first().ok_or(EncodingError::InvalidLength)?;
    let kind = CashType::from_version(version)?;
    if HASH_SIZES[usize::from(version & 0x07)] != hash.len() {
        return Err(EncodingError::InvalidHashLength(hash.len()));
    }

    Ok(CashPayload {
        prefix: prefix.to_owned(),
        kind,
        hash: hash.to_vec(),
    })
}

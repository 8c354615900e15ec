//! The account address model: a 20-byte hash with bech32 text and hex
//! representations.

use hex::encode as hex_encode;
use thiserror::Error;

use crate::Network;
use crate::bech32::{self, Bech32Error};
use crate::special::is_special;

/// Length of an encoded standard address: 2-char prefix + `'1'` + 32 data
/// symbols + 6 checksum symbols.
pub const ADDRESS_STRING_LENGTH: usize = 41;

/// A 160-bit hash, the canonical binary form of an account or contract
/// address. Carries no network association.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hash160([u8; Hash160::LENGTH]);

impl Hash160 {
    /// Byte length of the hash.
    pub const LENGTH: usize = 20;

    /// Builds a hash from an arbitrary byte slice. Oversized input keeps the
    /// rightmost 20 bytes, undersized input is left-padded with zeros, so
    /// big-endian-padded values survive unchanged.
    #[must_use]
    pub fn from_slice(b: &[u8]) -> Self {
        let b = if b.len() > Self::LENGTH {
            &b[b.len() - Self::LENGTH..]
        } else {
            b
        };
        let mut hash = [0u8; Self::LENGTH];
        hash[Self::LENGTH - b.len()..].copy_from_slice(b);
        Hash160(hash)
    }

    /// Borrows the underlying 20 bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }
}

impl From<[u8; Hash160::LENGTH]> for Hash160 {
    fn from(b: [u8; Hash160::LENGTH]) -> Self {
        Hash160(b)
    }
}

impl AsRef<[u8]> for Hash160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Errors from the strict decode path and from hex conversion.
#[derive(Error, Debug)]
pub enum AddressError {
    /// Encoded address is not exactly 41 characters.
    #[error("invalid address: address length = {0}, expecting 41")]
    InvalidLength(usize),

    /// Underlying bech32 or regrouping failure.
    #[error("invalid address: {0}")]
    Bech32(#[from] Bech32Error),

    /// Decoded hrp does not match the given network's prefix.
    #[error("invalid address: hrp {hrp} and address prefix {prefix} don't match")]
    PrefixMismatch { hrp: String, prefix: &'static str },

    /// Non-hex input to [`Address::from_hex`].
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// A blockchain account address.
///
/// A `Standard` address owns a [`Hash160`] payload and derives its text form
/// on demand from the network passed to [`Address::encode`]. A `Special`
/// address is one of the reserved protocol strings (see [`crate::special`]):
/// it round-trips verbatim and has no binary payload at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Address {
    /// A regular address backed by a 20-byte hash.
    Standard(Hash160),
    /// A reserved protocol string that is not a valid bech32 encoding.
    Special(String),
}

impl Address {
    /// Decodes an encoded address string, enforcing the fixed 41-character
    /// length and the given network's prefix. Reserved special addresses are
    /// returned verbatim without touching the codec.
    ///
    /// # Errors
    ///
    /// [`AddressError`] with the failing length, prefix pair, or underlying
    /// bech32 error.
    pub fn from_string(encoded: &str, network: Network) -> Result<Self, AddressError> {
        if is_special(encoded) {
            return Ok(Address::Special(encoded.to_string()));
        }
        if encoded.len() != ADDRESS_STRING_LENGTH {
            return Err(AddressError::InvalidLength(encoded.len()));
        }
        let (hrp, grouped) = bech32::decode(encoded)?;
        if hrp != network.prefix() {
            return Err(AddressError::PrefixMismatch {
                hrp,
                prefix: network.prefix(),
            });
        }
        let payload = bech32::convert_bits(&grouped, 5, 8, false)?;
        Ok(Self::from_bytes(&payload))
    }

    /// Decodes an encoded address string the way pre-41-character tooling
    /// did: no length pre-check, and codec failures are surfaced unwrapped
    /// rather than folded into the `invalid address` family.
    ///
    /// # Errors
    ///
    /// The raw [`Bech32Error`], including
    /// [`Bech32Error::HrpMismatch`] when the prefix disagrees with `network`.
    pub fn from_string_legacy(encoded: &str, network: Network) -> Result<Self, Bech32Error> {
        if is_special(encoded) {
            return Ok(Address::Special(encoded.to_string()));
        }
        let (hrp, grouped) = bech32::decode(encoded)?;
        if hrp != network.prefix() {
            return Err(Bech32Error::HrpMismatch {
                hrp,
                prefix: network.prefix().to_string(),
            });
        }
        let payload = bech32::convert_bits(&grouped, 5, 8, false)?;
        Ok(Self::from_bytes(&payload))
    }

    /// Builds a standard address from raw bytes, cropping from the left or
    /// left-padding with zeros to 20 bytes (see [`Hash160::from_slice`]).
    #[must_use]
    pub fn from_bytes(b: &[u8]) -> Self {
        Address::Standard(Hash160::from_slice(b))
    }

    /// Builds a standard address from a hex string. An optional `0x`/`0X`
    /// prefix is stripped and odd-length input gains a leading zero nibble.
    ///
    /// # Errors
    ///
    /// [`AddressError::Hex`] on non-hex characters.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = if s.len() % 2 == 1 {
            hex::decode(format!("0{s}"))?
        } else {
            hex::decode(s)?
        };
        Ok(Self::from_bytes(&bytes))
    }

    /// Encodes the address under the given network. The prefix is read at
    /// call time, so the same address serializes differently on mainnet and
    /// testnet. Special addresses return their stored string regardless of
    /// the network.
    ///
    /// # Panics
    ///
    /// Only if the internal 8-to-5 regrouping or the hard-coded prefix were
    /// ever invalid, which would be a bug in this crate.
    #[must_use]
    pub fn encode(&self, network: Network) -> String {
        match self {
            Address::Special(s) => s.clone(),
            Address::Standard(hash) => {
                let grouped = bech32::convert_bits(hash.as_bytes(), 8, 5, true)
                    .expect("8-to-5 regrouping with padding cannot fail");
                bech32::encode(network.prefix(), &grouped)
                    .expect("network prefix is a valid hrp")
            }
        }
    }

    /// The 20-byte payload.
    ///
    /// # Panics
    ///
    /// Panics on a special address: such an address is known to be special
    /// before any call site could reach for its bytes, so this is a contract
    /// violation by the caller, not a data error.
    #[must_use]
    pub fn bytes(&self) -> [u8; Hash160::LENGTH] {
        match self {
            Address::Standard(hash) => *hash.as_bytes(),
            Address::Special(s) => panic!("bytes() does not apply to special address {s}"),
        }
    }

    /// Lowercase hex of the payload, prefixed with `0x`.
    ///
    /// # Panics
    ///
    /// Panics on a special address, like [`Address::bytes`].
    #[must_use]
    pub fn hex(&self) -> String {
        match self {
            Address::Standard(hash) => format!("0x{}", hex_encode(hash)),
            Address::Special(s) => panic!("hex() does not apply to special address {s}"),
        }
    }

    /// Whether this is one of the reserved special addresses.
    #[must_use]
    pub fn is_special(&self) -> bool {
        matches!(self, Address::Special(_))
    }
}

/// Byte-equality of two possibly-absent addresses. Two absent addresses are
/// equal; an absent and a present one are not.
///
/// # Panics
///
/// Panics if either present address is special, as [`Address::bytes`] does.
#[must_use]
pub fn equal(a: Option<&Address>, b: Option<&Address>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.bytes() == b.bytes(),
        _ => false,
    }
}

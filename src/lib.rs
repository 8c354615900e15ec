//! A bech32 address encoder/decoder for 20-byte account hashes.
//!
//! This crate supports:
//! - Mainnet (`io…`) vs Testnet (`it…`) via HRP, selected per call.
//! - Strict and legacy decoding, with the legacy path preserving the exact
//!   error surface of older tooling.
//! - Hex (`0x…`) conversion in both directions.
//! - A registry of reserved protocol addresses that bypass the codec.
//!
//! The network is an explicit argument to every encode/decode rather than
//! process state, so the same [`Address`] can be rendered for either network
//! and tests can flip modes freely. [`Network::from_env`] covers the
//! conventional environment-variable selection at startup.

pub mod bech32;

mod address;
mod special;

pub use address::{ADDRESS_STRING_LENGTH, Address, AddressError, Hash160, equal};
pub use bech32::Bech32Error;
pub use special::{
    REWARDING_POOL_ADDR, REWARDING_PROTOCOL_ADDR, REWARDING_PROTOCOL_ADDR_HASH,
    RESERVED_ADDRESSES, STAKING_ADD_DEPOSIT_ADDR, STAKING_ADD_DEPOSIT_ADDR_HASH,
    STAKING_BUCKET_POOL_ADDR, STAKING_CHANGE_CAND_ADDR, STAKING_CHANGE_CAND_ADDR_HASH,
    STAKING_CREATE_ADDR, STAKING_CREATE_ADDR_HASH, STAKING_PROTOCOL_ADDR,
    STAKING_PROTOCOL_ADDR_HASH, STAKING_REGISTER_CAND_ADDR, STAKING_REGISTER_CAND_ADDR_HASH,
    STAKING_RESTAKE_ADDR, STAKING_RESTAKE_ADDR_HASH, STAKING_TRANSFER_ADDR,
    STAKING_TRANSFER_ADDR_HASH, STAKING_UNSTAKE_ADDR, STAKING_UNSTAKE_ADDR_HASH,
    STAKING_UPDATE_CAND_ADDR, STAKING_UPDATE_CAND_ADDR_HASH, STAKING_WITHDRAW_ADDR,
    STAKING_WITHDRAW_ADDR_HASH, ZERO_ADDRESS, is_special,
};

/// Environment variable conventionally read at startup to select the
/// network; see [`Network::from_env`].
pub const NETWORK_TYPE_ENV: &str = "IOTX_NETWORK_TYPE";

/// Which network you're on.
///
/// This determines the human-readable part of an encoded address. It is
/// passed explicitly to every encode and decode; nothing in this crate
/// caches it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Network {
    /// Mainnet addresses use `io…`
    #[default]
    Mainnet,
    /// Testnet addresses use `it…`
    Testnet,
}

impl Network {
    /// Returns the human-readable prefix for this network.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Network::Mainnet => "io",
            Network::Testnet => "it",
        }
    }

    /// Maps a network-type string to a network: `"testnet"` (case ignored)
    /// selects testnet, anything else selects mainnet.
    #[must_use]
    pub fn from_type_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("testnet") {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    /// Reads the network from the `IOTX_NETWORK_TYPE` environment variable.
    /// Unset or unrecognized values select mainnet.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_type_str(&std::env::var(NETWORK_TYPE_ENV).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_type_string_is_case_insensitive() {
        assert_eq!(Network::from_type_str("testnet"), Network::Testnet);
        assert_eq!(Network::from_type_str("TestNet"), Network::Testnet);
        assert_eq!(Network::from_type_str("mainnet"), Network::Mainnet);
        assert_eq!(Network::from_type_str(""), Network::Mainnet);
        assert_eq!(Network::from_type_str("anything"), Network::Mainnet);
    }

    #[test]
    fn prefixes() {
        assert_eq!(Network::Mainnet.prefix(), "io");
        assert_eq!(Network::Testnet.prefix(), "it");
        assert_eq!(Network::default(), Network::Mainnet);
    }
}

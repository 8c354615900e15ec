//! Reserved protocol addresses.
//!
//! Two kinds of entry live here. The pool addresses are opaque sentinels:
//! 41-character strings shaped like addresses that are deliberately not a
//! valid bech32 encoding of anything, matched by exact string equality and
//! round-tripped verbatim. The remaining constants are ordinary addresses
//! whose payloads are derived from fixed ASCII labels, either through
//! Keccak-256 (protocol addresses) or by embedding the label bytes directly
//! (staking action sentinels). Both derivations are historical and frozen;
//! the encoded string constants are the source of truth.

use std::sync::LazyLock;

use sha3::{Digest, Keccak256};

use crate::address::Hash160;

/// The address whose payload is all zero.
pub const ZERO_ADDRESS: &str = "io1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqd39ym7";

/// The staking bucket pool address.
pub const STAKING_BUCKET_POOL_ADDR: &str = "io000000000000000000000000stakingprotocol";

/// The rewarding pool address.
pub const REWARDING_POOL_ADDR: &str = "io0000000000000000000000rewardingprotocol";

/// The staking protocol address.
pub const STAKING_PROTOCOL_ADDR: &str = "io1qnpz47hx5q6r3w876axtrn6yz95d70cjl35r53";

/// The rewarding protocol address.
pub const REWARDING_PROTOCOL_ADDR: &str = "io154mvzs09vkgn0hw6gg3ayzw5w39jzp47f8py9v";

/// The staking create action address.
pub const STAKING_CREATE_ADDR: &str = "io1qqqqqqqqqqq8xarpdd5kue6rwfjkzar9k0wk6t";

/// The staking add deposit action address.
pub const STAKING_ADD_DEPOSIT_ADDR: &str = "io1qqqqqum5v94kjmn8g9jxg3r9wphhx6t58x7tye";

/// The staking change candidate action address.
pub const STAKING_CHANGE_CAND_ADDR: &str = "io1qqqqqum5v94kjmn8gd5xzmn8v4pkzmnye5v3fh";

/// The staking unstake action address.
pub const STAKING_UNSTAKE_ADDR: &str = "io1qqqqqqqqqpehgcttd9hxw4twwd6xz6m9pl4r27";

/// The staking withdraw action address.
pub const STAKING_WITHDRAW_ADDR: &str = "io1qqqqqqqqwd6xz6mfden4w6t5dpj8ycthwsq5ng";

/// The staking restake action address.
pub const STAKING_RESTAKE_ADDR: &str = "io1qqqqqqqqqpehgcttd9hxw5n9wd6xz6m995w4zm";

/// The staking transfer action address.
pub const STAKING_TRANSFER_ADDR: &str = "io1qqqqqqqqwd6xz6mfden4gunpdeekvetjzwh99y";

/// The staking register candidate action address.
pub const STAKING_REGISTER_CAND_ADDR: &str = "io1qpehgcttd9hxw5n9va5hxar9wfpkzmnyahxhjk";

/// The staking update candidate action address.
pub const STAKING_UPDATE_CAND_ADDR: &str = "io1qqqqqum5v94kjmn824cxgct5v4pkzmnyxxj98n";

/// Keccak-256 of the input, truncated to its rightmost 20 bytes.
fn hash160b(input: &[u8]) -> Hash160 {
    Hash160::from_slice(&Keccak256::digest(input)[12..])
}

/// Payload of [`STAKING_PROTOCOL_ADDR`].
pub static STAKING_PROTOCOL_ADDR_HASH: LazyLock<Hash160> =
    LazyLock::new(|| hash160b(b"staking"));

/// Payload of [`REWARDING_PROTOCOL_ADDR`].
pub static REWARDING_PROTOCOL_ADDR_HASH: LazyLock<Hash160> =
    LazyLock::new(|| hash160b(b"rewarding"));

/// Payload of [`STAKING_CREATE_ADDR`].
pub static STAKING_CREATE_ADDR_HASH: LazyLock<Hash160> =
    LazyLock::new(|| Hash160::from_slice(b"stakingCreate"));

/// Payload of [`STAKING_ADD_DEPOSIT_ADDR`].
pub static STAKING_ADD_DEPOSIT_ADDR_HASH: LazyLock<Hash160> =
    LazyLock::new(|| Hash160::from_slice(b"stakingAddDeposit"));

/// Payload of [`STAKING_CHANGE_CAND_ADDR`].
pub static STAKING_CHANGE_CAND_ADDR_HASH: LazyLock<Hash160> =
    LazyLock::new(|| Hash160::from_slice(b"stakingChangeCand"));

/// Payload of [`STAKING_UNSTAKE_ADDR`].
pub static STAKING_UNSTAKE_ADDR_HASH: LazyLock<Hash160> =
    LazyLock::new(|| Hash160::from_slice(b"stakingUnstake"));

/// Payload of [`STAKING_WITHDRAW_ADDR`].
pub static STAKING_WITHDRAW_ADDR_HASH: LazyLock<Hash160> =
    LazyLock::new(|| Hash160::from_slice(b"stakingWithdraw"));

/// Payload of [`STAKING_RESTAKE_ADDR`].
pub static STAKING_RESTAKE_ADDR_HASH: LazyLock<Hash160> =
    LazyLock::new(|| Hash160::from_slice(b"stakingRestake"));

/// Payload of [`STAKING_TRANSFER_ADDR`].
pub static STAKING_TRANSFER_ADDR_HASH: LazyLock<Hash160> =
    LazyLock::new(|| Hash160::from_slice(b"stakingTransfer"));

/// Payload of [`STAKING_REGISTER_CAND_ADDR`].
pub static STAKING_REGISTER_CAND_ADDR_HASH: LazyLock<Hash160> =
    LazyLock::new(|| Hash160::from_slice(b"stakingRegisterCand"));

/// Payload of [`STAKING_UPDATE_CAND_ADDR`].
pub static STAKING_UPDATE_CAND_ADDR_HASH: LazyLock<Hash160> =
    LazyLock::new(|| Hash160::from_slice(b"stakingUpdateCand"));

/// Every reserved address string, mapped to its derived payload. The two
/// pool addresses carry `None`: they have no payload and must never reach
/// the codec. Built once, never mutated.
pub static RESERVED_ADDRESSES: LazyLock<Vec<(&'static str, Option<Hash160>)>> =
    LazyLock::new(|| {
        vec![
            (STAKING_BUCKET_POOL_ADDR, None),
            (REWARDING_POOL_ADDR, None),
            (ZERO_ADDRESS, Some(Hash160::default())),
            (STAKING_PROTOCOL_ADDR, Some(*STAKING_PROTOCOL_ADDR_HASH)),
            (REWARDING_PROTOCOL_ADDR, Some(*REWARDING_PROTOCOL_ADDR_HASH)),
            (STAKING_CREATE_ADDR, Some(*STAKING_CREATE_ADDR_HASH)),
            (STAKING_ADD_DEPOSIT_ADDR, Some(*STAKING_ADD_DEPOSIT_ADDR_HASH)),
            (STAKING_CHANGE_CAND_ADDR, Some(*STAKING_CHANGE_CAND_ADDR_HASH)),
            (STAKING_UNSTAKE_ADDR, Some(*STAKING_UNSTAKE_ADDR_HASH)),
            (STAKING_WITHDRAW_ADDR, Some(*STAKING_WITHDRAW_ADDR_HASH)),
            (STAKING_RESTAKE_ADDR, Some(*STAKING_RESTAKE_ADDR_HASH)),
            (STAKING_TRANSFER_ADDR, Some(*STAKING_TRANSFER_ADDR_HASH)),
            (STAKING_REGISTER_CAND_ADDR, Some(*STAKING_REGISTER_CAND_ADDR_HASH)),
            (STAKING_UPDATE_CAND_ADDR, Some(*STAKING_UPDATE_CAND_ADDR_HASH)),
        ]
    });

/// Whether `s` is one of the opaque special addresses. Exact string
/// equality only; no case folding, no prefix matching.
#[must_use]
pub fn is_special(s: &str) -> bool {
    s == STAKING_BUCKET_POOL_ADDR || s == REWARDING_POOL_ADDR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{Address, ADDRESS_STRING_LENGTH};
    use crate::Network;

    #[test]
    fn pool_addresses_are_special_and_opaque() {
        for addr in [STAKING_BUCKET_POOL_ADDR, REWARDING_POOL_ADDR] {
            assert_eq!(addr.len(), ADDRESS_STRING_LENGTH);
            assert!(is_special(addr));
            let decoded = Address::from_string(addr, Network::Mainnet).unwrap();
            assert_eq!(decoded.encode(Network::Mainnet), addr);
            let decoded = Address::from_string_legacy(addr, Network::Mainnet).unwrap();
            assert_eq!(decoded.encode(Network::Mainnet), addr);
        }
    }

    #[test]
    fn derived_addresses_match_their_payloads() {
        for (encoded, hash) in RESERVED_ADDRESSES.iter() {
            assert_eq!(encoded.len(), ADDRESS_STRING_LENGTH);
            let Some(hash) = hash else {
                assert!(is_special(encoded));
                continue;
            };
            assert!(!is_special(encoded));
            let addr = Address::from_bytes(hash.as_bytes());
            assert_eq!(addr.encode(Network::Mainnet), *encoded);
            let addr = Address::from_string(encoded, Network::Mainnet).unwrap();
            assert_eq!(addr.bytes(), *hash.as_bytes());
        }
    }

    #[test]
    fn label_derivations_are_distinct() {
        // keccak for protocol addresses, raw label bytes for action sentinels
        assert_ne!(*STAKING_PROTOCOL_ADDR_HASH, Hash160::from_slice(b"staking"));
        assert_eq!(
            *STAKING_CREATE_ADDR_HASH,
            Hash160::from_slice(b"stakingCreate")
        );
    }
}

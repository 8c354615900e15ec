//! Bech32 codec and bit-regrouping primitives.
//!
//! This is the original bech32 variant (BIP-173 checksum constant `1`, not
//! bech32m). The codec is implemented here rather than pulled from a crate
//! because the decode diagnostics are part of the public contract: a failed
//! checksum must report the six symbols that would have been correct, and the
//! legacy decode path surfaces these errors unwrapped.

use thiserror::Error;

/// The 32-character bech32 alphabet.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Generator coefficients of the BCH code over GF(32).
const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Checksum residue of a valid bech32 string.
const CHECKSUM_RESIDUE: u32 = 1;

/// A bech32 string is at most 90 characters long per BIP-173, and at least
/// hrp (>= 1) + separator + checksum (6).
const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 90;

/// Errors raised by the codec and by bit regrouping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Bech32Error {
    /// Overall string length outside the bech32 bounds.
    #[error("invalid bech32 string length {0}")]
    InvalidLength(usize),

    /// Both upper- and lowercase characters present.
    #[error("string not all lowercase or all uppercase")]
    MixedCase,

    /// A character outside printable ASCII, or outside the alphabet in the
    /// data part.
    #[error("invalid character in string: '{0}'")]
    InvalidCharacter(char),

    /// The `'1'` separator is missing, first, or leaves no room for the
    /// checksum.
    #[error("invalid index of 1")]
    InvalidSeparator,

    /// Checksum verification failed; `expected` holds the six symbols a valid
    /// string would have ended with.
    #[error("checksum failed: Expected {expected}, got {got}")]
    ChecksumFailed { expected: String, got: String },

    /// The human-readable part is empty, mixed-case, or not printable ASCII.
    #[error("invalid human-readable part {0:?}")]
    InvalidHrp(String),

    /// Decoded hrp does not match the active network prefix. Not produced
    /// by this module: the legacy address decode builds it, since that path
    /// reports prefix mismatches unwrapped alongside the codec's own errors.
    #[error("hrp {hrp} and address prefix {prefix} don't match")]
    HrpMismatch { hrp: String, prefix: String },

    /// A regrouping input symbol does not fit its declared group width.
    #[error("invalid data value {value}: exceeds {width} bits")]
    ExcessBits { value: u8, width: u8 },

    /// Malformed padding in the final regrouping group.
    #[error("invalid incomplete group")]
    InvalidPadding,
}

/// Regroups a bitstream from `from_bits`-wide symbols into `to_bits`-wide
/// symbols, most-significant bit first.
///
/// With `pad` set, a final incomplete group is right-padded with zero bits.
/// Without it, an all-zero incomplete group is dropped, while any nonzero
/// leftover bits (or `from_bits` or more of them) fail with
/// [`Bech32Error::InvalidPadding`].
///
/// # Panics
///
/// Panics if either group width is outside `1..=8`. The widths are fixed by
/// the caller, never by input data.
///
/// # Errors
///
/// [`Bech32Error::ExcessBits`] if an input symbol does not fit in `from_bits`
/// bits, [`Bech32Error::InvalidPadding`] as described above.
pub fn convert_bits(
    data: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, Bech32Error> {
    assert!(
        (1..=8).contains(&from_bits) && (1..=8).contains(&to_bits),
        "bit group widths must be between 1 and 8"
    );
    let max_out = (1u32 << to_bits) - 1;
    let mut acc = 0u32;
    let mut bits = 0u32;
    let mut out = Vec::with_capacity((data.len() * from_bits as usize).div_ceil(to_bits as usize));
    for &value in data {
        if u32::from(value) >> from_bits != 0 {
            return Err(Bech32Error::ExcessBits {
                value,
                width: from_bits as u8,
            });
        }
        acc = (acc << from_bits) | u32::from(value);
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            out.push(((acc >> bits) & max_out) as u8);
        }
    }
    if pad {
        if bits > 0 {
            out.push(((acc << (to_bits - bits)) & max_out) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_out) != 0 {
        return Err(Bech32Error::InvalidPadding);
    }
    Ok(out)
}

fn polymod(values: &[u8]) -> u32 {
    let mut chk = 1u32;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ff_ffff) << 5) ^ u32::from(v);
        for (i, g) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 != 0 {
                chk ^= g;
            }
        }
    }
    chk
}

/// Expands the hrp into the 5-bit values covered by the checksum: the high
/// bits of each character, a zero, then the low bits.
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut v = Vec::with_capacity(hrp.len() * 2 + 1);
    v.extend(hrp.bytes().map(|b| b >> 5));
    v.push(0);
    v.extend(hrp.bytes().map(|b| b & 0x1f));
    v
}

fn checksum(hrp: &str, data: &[u8]) -> [u8; 6] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; 6]);
    let residue = polymod(&values) ^ CHECKSUM_RESIDUE;
    let mut out = [0u8; 6];
    for (i, sym) in out.iter_mut().enumerate() {
        *sym = ((residue >> (5 * (5 - i))) & 0x1f) as u8;
    }
    out
}

fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    polymod(&values) == CHECKSUM_RESIDUE
}

fn charset_char(value: u8) -> Result<char, Bech32Error> {
    if value >= 32 {
        return Err(Bech32Error::ExcessBits { value, width: 5 });
    }
    Ok(CHARSET[value as usize] as char)
}

/// Encodes 5-bit symbols under the given human-readable part, appending the
/// six-symbol checksum.
///
/// # Errors
///
/// [`Bech32Error::InvalidHrp`] if the hrp is empty, mixes case, or contains
/// characters outside printable ASCII 33-126; [`Bech32Error::ExcessBits`] if
/// a data symbol is 32 or more.
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, Bech32Error> {
    let printable = hrp.bytes().all(|b| (33..=126).contains(&b));
    let mixed = hrp.bytes().any(|b| b.is_ascii_lowercase())
        && hrp.bytes().any(|b| b.is_ascii_uppercase());
    if hrp.is_empty() || !printable || mixed {
        return Err(Bech32Error::InvalidHrp(hrp.to_string()));
    }
    let check = checksum(hrp, data);
    let mut encoded = String::with_capacity(hrp.len() + 1 + data.len() + 6);
    encoded.push_str(hrp);
    encoded.push('1');
    for &sym in data.iter().chain(&check) {
        encoded.push(charset_char(sym)?);
    }
    Ok(encoded)
}

/// Decodes a bech32 string into its human-readable part and 5-bit data
/// symbols, with the six checksum symbols verified and stripped.
///
/// # Errors
///
/// See [`Bech32Error`]; a checksum mismatch reports the six symbols the
/// string should have ended with.
pub fn decode(encoded: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    if encoded.len() < MIN_LENGTH || encoded.len() > MAX_LENGTH {
        return Err(Bech32Error::InvalidLength(encoded.len()));
    }
    if let Some(c) = encoded.chars().find(|&c| !('\x21'..='\x7e').contains(&c)) {
        return Err(Bech32Error::InvalidCharacter(c));
    }
    let has_lower = encoded.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = encoded.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Bech32Error::MixedCase);
    }
    let bech = encoded.to_lowercase();
    let pos = bech.rfind('1').ok_or(Bech32Error::InvalidSeparator)?;
    if pos == 0 || pos + 7 > bech.len() {
        return Err(Bech32Error::InvalidSeparator);
    }
    let hrp = &bech[..pos];
    let mut data = Vec::with_capacity(bech.len() - pos - 1);
    for c in bech[pos + 1..].chars() {
        let sym = CHARSET
            .iter()
            .position(|&b| b == c as u8)
            .ok_or(Bech32Error::InvalidCharacter(c))?;
        data.push(sym as u8);
    }
    if !verify_checksum(hrp, &data) {
        let expected = checksum(hrp, &data[..data.len() - 6])
            .iter()
            .map(|&sym| CHARSET[sym as usize] as char)
            .collect();
        return Err(Bech32Error::ChecksumFailed {
            expected,
            got: bech[bech.len() - 6..].to_string(),
        });
    }
    data.truncate(data.len() - 6);
    Ok((hrp.to_string(), data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_strings_roundtrip() {
        for valid in [
            "a12uel5l",
            "abcdef1qpzry9x8gf2tvdw0s3jn54khcehmxsvg",
            "split1checkupstagehandshakeupstreamerranterredcaperred2y9e3w",
            "io1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqd39ym7",
            "io1djlzhwxdqqahhwhdxtn9hkhppvnnrptqtwf2h5",
        ] {
            let (hrp, data) = decode(valid).unwrap();
            assert_eq!(encode(&hrp, &data).unwrap(), valid);
        }
    }

    #[test]
    fn ascending_symbols_checksum() {
        // hrp "abcdef" over the data symbols 0..=25 checks out as "hmxsvg"
        let data: Vec<u8> = (0..26).collect();
        assert_eq!(
            encode("abcdef", &data).unwrap(),
            "abcdef1qpzry9x8gf2tvdw0s3jn54khcehmxsvg"
        );
        let (hrp, decoded) = decode("abcdef1qpzry9x8gf2tvdw0s3jn54khcehmxsvg").unwrap();
        assert_eq!(hrp, "abcdef");
        assert_eq!(decoded, data);
    }

    #[test]
    fn uppercase_input_is_normalized() {
        let (hrp, data) = decode("A12UEL5L").unwrap();
        assert_eq!(hrp, "a");
        assert!(data.is_empty());
    }

    #[test]
    fn mixed_case_rejected() {
        assert_eq!(decode("A12UeL5L"), Err(Bech32Error::MixedCase));
    }

    #[test]
    fn length_bounds_enforced() {
        assert_eq!(decode("10a06t8"), Err(Bech32Error::InvalidLength(7)));
        let long = format!("io1{}", "q".repeat(95));
        assert_eq!(decode(&long), Err(Bech32Error::InvalidLength(98)));
    }

    #[test]
    fn separator_placement_enforced() {
        // missing, leading, and short-checksum separators
        assert_eq!(decode("pzry9x0s0muk"), Err(Bech32Error::InvalidSeparator));
        assert_eq!(decode("1qzzfheqzzfhe"), Err(Bech32Error::InvalidSeparator));
        assert_eq!(decode("li1dgmt3"), Err(Bech32Error::InvalidSeparator));
    }

    #[test]
    fn out_of_range_characters_rejected() {
        assert_eq!(decode(" 1nwldj5q"), Err(Bech32Error::InvalidCharacter(' ')));
        assert_eq!(decode("x1b4n0q5vq"), Err(Bech32Error::InvalidCharacter('b')));
    }

    #[test]
    fn checksum_failure_reports_expected_symbols() {
        let err = decode("iota1qp3mxh8gx8fkqmss9c6jsm979wuv6qpm0waw6vhxt0dwzze8xxzkqzy3lxu")
            .unwrap_err();
        assert_eq!(
            err,
            Bech32Error::ChecksumFailed {
                expected: "anqr4d".to_string(),
                got: "zy3lxu".to_string(),
            }
        );
        assert!(
            err.to_string()
                .contains("checksum failed: Expected anqr4d")
        );
    }

    #[test]
    fn encode_rejects_bad_hrp() {
        assert!(matches!(encode("", &[]), Err(Bech32Error::InvalidHrp(_))));
        assert!(matches!(encode("Io", &[]), Err(Bech32Error::InvalidHrp(_))));
        assert!(matches!(
            encode("io\x7f", &[]),
            Err(Bech32Error::InvalidHrp(_))
        ));
    }

    #[test]
    fn encode_rejects_wide_symbols() {
        assert_eq!(
            encode("io", &[32]),
            Err(Bech32Error::ExcessBits { value: 32, width: 5 })
        );
    }

    #[test]
    fn regroup_pads_on_encode() {
        assert_eq!(convert_bits(&[0xff], 8, 5, true).unwrap(), vec![31, 28]);
        let grouped = convert_bits(&[0u8; 20], 8, 5, true).unwrap();
        assert_eq!(grouped.len(), 32);
    }

    #[test]
    fn regroup_drops_zero_padding_on_decode() {
        assert_eq!(convert_bits(&[31, 28], 5, 8, false).unwrap(), vec![0xff]);
    }

    #[test]
    fn regroup_rejects_nonzero_padding() {
        assert_eq!(
            convert_bits(&[31, 31], 5, 8, false),
            Err(Bech32Error::InvalidPadding)
        );
    }

    #[test]
    fn regroup_rejects_excess_padding_bits() {
        // 15 bits leave a 7-bit remainder, a full input symbol of padding
        assert_eq!(
            convert_bits(&[0, 0, 0], 5, 8, false),
            Err(Bech32Error::InvalidPadding)
        );
    }

    #[test]
    fn regroup_rejects_wide_input_symbols() {
        assert_eq!(
            convert_bits(&[32], 5, 8, false),
            Err(Bech32Error::ExcessBits { value: 32, width: 5 })
        );
    }
}

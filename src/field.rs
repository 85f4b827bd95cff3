//! Field element encoding utilities
//!
//! This module provides conversions between BN254 scalar field elements
//! and the wire encodings used by the protocol:
//! - Hex strings with an optional `0x` prefix (secrets, nonces, calldata)
//! - Decimal strings (commitments, proof coordinates, public signals)
//! - Big-endian byte strings reduced into the field (digest outputs)
//!
//! Inputs wider than the field modulus are reduced modulo the field as
//! part of encoding. Malformed encodings fail with a validation error
//! before any cryptographic work happens.

use ff::{Field as _, FromUniformBytes, PrimeField};
use halo2curves::bn256::Fr as Field;

use crate::error::{Error, Result};

/// Field element encoding utilities
///
/// Provides static methods for the hex/decimal/byte encodings used on
/// the protocol's wire contracts.
pub struct FieldUtils;

impl FieldUtils {
    /// Parse a hex string into a field element
    ///
    /// Accepts an optional `0x`/`0X` prefix and odd-length digit strings.
    /// Values wider than the modulus are reduced modulo the field. Inputs
    /// wider than 512 bits are rejected.
    ///
    /// # Arguments
    /// * `value` - Hex string, with or without `0x` prefix
    ///
    /// # Returns
    /// `Ok(Field)` on success, `Err(Error::Validation)` on malformed input
    pub fn from_hex(value: &str) -> Result<Field> {
        let digits = value.trim();
        let digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);

        if digits.is_empty() {
            return Err(Error::Validation("empty hex string".to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::Validation(format!("invalid hex string: {:?}", value)));
        }
        if digits.len() > 128 {
            return Err(Error::Validation(format!(
                "hex string wider than 512 bits: {} digits",
                digits.len()
            )));
        }

        // Tolerate odd digit counts the way bigint formatting produces them
        let padded = if digits.len() % 2 == 1 {
            format!("0{}", digits)
        } else {
            digits.to_string()
        };
        let bytes = hex::decode(&padded)
            .map_err(|e| Error::Validation(format!("invalid hex string: {}", e)))?;

        Ok(Self::from_be_bytes_reduce(&bytes))
    }

    /// Encode a field element as a minimal lowercase hex string
    ///
    /// Output carries a `0x` prefix and no leading zero digits, matching
    /// bigint `toString(16)` formatting. Zero encodes as `0x0`.
    pub fn to_hex(value: &Field) -> String {
        let repr = value.to_repr();
        let be: Vec<u8> = repr.as_ref().iter().rev().copied().collect();
        let encoded = hex::encode(be);
        let trimmed = encoded.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{}", trimmed)
        }
    }

    /// Parse a decimal string into a field element
    ///
    /// Values at or above the modulus are reduced modulo the field.
    ///
    /// # Arguments
    /// * `value` - Decimal digit string
    ///
    /// # Returns
    /// `Ok(Field)` on success, `Err(Error::Validation)` on malformed input
    pub fn from_dec(value: &str) -> Result<Field> {
        let digits = value.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Validation(format!(
                "invalid decimal string: {:?}",
                value
            )));
        }

        let ten = Field::from(10u64);
        let mut acc = Field::ZERO;
        for b in digits.bytes() {
            acc = acc * ten + Field::from(u64::from(b - b'0'));
        }
        Ok(acc)
    }

    /// Encode a field element as its canonical decimal string
    pub fn to_dec(value: &Field) -> String {
        let repr = value.to_repr();
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&repr.as_ref()[i * 8..(i + 1) * 8]);
            *limb = u64::from_le_bytes(bytes);
        }

        let mut digits = Vec::new();
        while limbs.iter().any(|&l| l != 0) {
            // Long division of the 256-bit value by 10, most significant
            // limb first
            let mut rem: u64 = 0;
            for limb in limbs.iter_mut().rev() {
                let cur = (u128::from(rem) << 64) | u128::from(*limb);
                *limb = (cur / 10) as u64;
                rem = (cur % 10) as u64;
            }
            digits.push(b'0' + rem as u8);
        }
        if digits.is_empty() {
            digits.push(b'0');
        }
        digits.reverse();
        String::from_utf8(digits).unwrap_or_default()
    }

    /// Reduce big-endian bytes into a field element
    ///
    /// Interprets the bytes as a big-endian unsigned integer and reduces
    /// it modulo the field. Up to 64 bytes (512 bits) are consumed;
    /// longer inputs are truncated to their low 512 bits.
    pub fn from_be_bytes_reduce(bytes: &[u8]) -> Field {
        let mut wide = [0u8; 64];
        for (dst, src) in wide.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        Field::from_uniform_bytes(&wide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_hex_with_and_without_prefix() {
        let a = FieldUtils::from_hex("0x2a").unwrap();
        let b = FieldUtils::from_hex("2a").unwrap();
        let c = FieldUtils::from_hex("0X2A").unwrap();
        assert_eq!(a, Field::from(42u64));
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_from_hex_odd_length() {
        let a = FieldUtils::from_hex("0xf").unwrap();
        assert_eq!(a, Field::from(15u64));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(FieldUtils::from_hex("").is_err());
        assert!(FieldUtils::from_hex("0x").is_err());
        assert!(FieldUtils::from_hex("0xzz").is_err());
        assert!(FieldUtils::from_hex("not hex").is_err());
        assert!(FieldUtils::from_hex(&"f".repeat(129)).is_err());
    }

    #[test]
    fn test_to_hex_minimal_form() {
        assert_eq!(FieldUtils::to_hex(&Field::ZERO), "0x0");
        assert_eq!(FieldUtils::to_hex(&Field::from(15u64)), "0xf");
        assert_eq!(FieldUtils::to_hex(&Field::from(255u64)), "0xff");
    }

    #[test]
    fn test_from_dec_basic() {
        assert_eq!(FieldUtils::from_dec("0").unwrap(), Field::ZERO);
        assert_eq!(FieldUtils::from_dec("42").unwrap(), Field::from(42u64));
        assert_eq!(
            FieldUtils::from_dec("18446744073709551615").unwrap(),
            Field::from(u64::MAX)
        );
    }

    #[test]
    fn test_from_dec_rejects_garbage() {
        assert!(FieldUtils::from_dec("").is_err());
        assert!(FieldUtils::from_dec("-1").is_err());
        assert!(FieldUtils::from_dec("12a").is_err());
        assert!(FieldUtils::from_dec("0x12").is_err());
    }

    #[test]
    fn test_to_dec_basic() {
        assert_eq!(FieldUtils::to_dec(&Field::ZERO), "0");
        assert_eq!(FieldUtils::to_dec(&Field::from(42u64)), "42");
        assert_eq!(
            FieldUtils::to_dec(&Field::from(u64::MAX)),
            "18446744073709551615"
        );
    }

    #[test]
    fn test_from_dec_strips_leading_zeros() {
        assert_eq!(
            FieldUtils::from_dec("007").unwrap(),
            FieldUtils::from_dec("7").unwrap()
        );
        assert_eq!(FieldUtils::to_dec(&FieldUtils::from_dec("007").unwrap()), "7");
    }

    #[test]
    fn test_reduction_above_modulus() {
        // The BN254 scalar modulus itself reduces to zero
        let modulus_dec =
            "21888242871839275222246405745257275088548364400416034343698204186575808495617";
        assert_eq!(FieldUtils::from_dec(modulus_dec).unwrap(), Field::ZERO);
    }

    #[test]
    fn test_from_be_bytes_reduce() {
        assert_eq!(FieldUtils::from_be_bytes_reduce(&[]), Field::ZERO);
        assert_eq!(FieldUtils::from_be_bytes_reduce(&[42]), Field::from(42u64));
        assert_eq!(
            FieldUtils::from_be_bytes_reduce(&[1, 0]),
            Field::from(256u64)
        );
    }

    #[test]
    fn test_hex_dec_agree() {
        let f = FieldUtils::from_hex("0xdeadbeef").unwrap();
        assert_eq!(FieldUtils::to_dec(&f), "3735928559");
    }

    proptest! {
        #[test]
        fn prop_dec_roundtrip(v in any::<u128>()) {
            let s = v.to_string();
            let f = FieldUtils::from_dec(&s).unwrap();
            prop_assert_eq!(FieldUtils::to_dec(&f), s);
        }

        #[test]
        fn prop_hex_roundtrip(v in 1u128..) {
            let s = format!("0x{:x}", v);
            let f = FieldUtils::from_hex(&s).unwrap();
            prop_assert_eq!(FieldUtils::to_hex(&f), s);
        }

        #[test]
        fn prop_hex_dec_consistency(v in any::<u64>()) {
            let from_hex = FieldUtils::from_hex(&format!("{:x}", v)).unwrap();
            let from_dec = FieldUtils::from_dec(&v.to_string()).unwrap();
            prop_assert_eq!(from_hex, from_dec);
        }
    }
}

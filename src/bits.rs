//! Growable bit sequence with hex and fingerprint-alphabet conversions
//!
//! Both conversions share one regrouping mechanism: the buffer is split into
//! `width` interleaved lanes and the lanes are zipped back into groups, so
//! group `k` carries bits `k * width .. (k + 1) * width`, most significant
//! bit first. A short final group is zero-filled.

use std::collections::VecDeque;

use base64::alphabet::Alphabet;

use crate::error::Error;

/// Bits carried by one hex digit
pub const HEX_DIGIT_BITS: usize = 4;

/// Bits carried by one fingerprint symbol
pub const BASE64_SYMBOL_BITS: usize = 6;

const FINGERPRINT_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789%#";

/// Symbol table of fingerprints; `Alphabet::new` rejects repeated symbols
pub static FINGERPRINT_ALPHABET: Alphabet = match Alphabet::new(FINGERPRINT_SYMBOLS) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("fingerprint alphabet must hold 64 distinct symbols"),
};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: VecDeque<bool>,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a fingerprint into its bits
    pub fn from_base64(text: &str) -> Result<Self, Error> {
        let mut buffer = Self::new();
        buffer.append_base64(text)?;
        Ok(buffer)
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no bit is set
    pub fn is_clear(&self) -> bool {
        !self.bits.iter().any(|&bit| bit)
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push_back(bit);
    }

    /// Append 4 bits per hex digit (either case)
    pub fn append_hex(&mut self, text: &str) -> Result<(), Error> {
        for symbol in text.chars() {
            let value = symbol
                .to_digit(16)
                .ok_or(Error::InvalidSymbol { radix: 16, symbol })?;
            self.append_value(value, HEX_DIGIT_BITS);
        }
        Ok(())
    }

    /// Append 6 bits per fingerprint symbol
    pub fn append_base64(&mut self, text: &str) -> Result<(), Error> {
        let symbols = FINGERPRINT_ALPHABET.as_str();
        for symbol in text.chars() {
            // The alphabet is ASCII, so byte offsets are symbol indices
            let value = symbols
                .find(symbol)
                .ok_or(Error::InvalidSymbol { radix: 64, symbol })?;
            self.append_value(value as u32, BASE64_SYMBOL_BITS);
        }
        Ok(())
    }

    fn append_value(&mut self, value: u32, width: usize) {
        for shift in (0..width).rev() {
            self.push((value >> shift) & 1 == 1);
        }
    }

    /// Remove and return the first bit
    pub fn pop(&mut self) -> Result<bool, Error> {
        self.bits.pop_front().ok_or(Error::Underflow {
            requested: 1,
            available: 0,
        })
    }

    /// Remove the first `count` bits and return them as a new buffer
    pub fn pop_leading(&mut self, count: usize) -> Result<BitBuffer, Error> {
        if count > self.bits.len() {
            return Err(Error::Underflow {
                requested: count,
                available: self.bits.len(),
            });
        }
        let rest = self.bits.split_off(count);
        let leading = std::mem::replace(&mut self.bits, rest);
        Ok(BitBuffer { bits: leading })
    }

    pub fn render_hex(&self) -> String {
        self.groups(HEX_DIGIT_BITS)
            .into_iter()
            .map(|value| HEX_DIGITS[value as usize] as char)
            .collect()
    }

    pub fn render_base64(&self) -> String {
        let symbols = FINGERPRINT_ALPHABET.as_str().as_bytes();
        self.groups(BASE64_SYMBOL_BITS)
            .into_iter()
            .map(|value| symbols[value as usize] as char)
            .collect()
    }

    /// Demultiplex into `width` lanes, then zip the lanes back into values
    fn groups(&self, width: usize) -> Vec<u8> {
        let lanes: Vec<Vec<bool>> = (0..width)
            .map(|lane| self.bits.iter().skip(lane).step_by(width).copied().collect())
            .collect();
        // Lane 0 is never shorter than any other lane
        let count = lanes.first().map_or(0, Vec::len);

        (0..count)
            .map(|k| {
                lanes.iter().fold(0u8, |value, lane| {
                    (value << 1) | u8::from(lane.get(k).copied().unwrap_or(false))
                })
            })
            .collect()
    }
}

impl FromIterator<bool> for BitBuffer {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        BitBuffer {
            bits: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(pattern: &str) -> BitBuffer {
        pattern.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_alphabet_has_64_distinct_symbols() {
        let symbols = FINGERPRINT_ALPHABET.as_str();
        assert_eq!(symbols.len(), 64);
        assert_eq!(&symbols[..1], "A");
        assert_eq!(&symbols[52..53], "0");
        assert_eq!(&symbols[62..], "%#");
    }

    #[test]
    fn test_append_hex_msb_first() {
        let mut buffer = BitBuffer::new();
        buffer.append_hex("a3").unwrap();
        assert_eq!(buffer, bits("10100011"));

        let mut upper = BitBuffer::new();
        upper.append_hex("A3").unwrap();
        assert_eq!(upper, buffer);
    }

    #[test]
    fn test_append_base64_msb_first() {
        let mut buffer = BitBuffer::new();
        buffer.append_base64("B#").unwrap();
        assert_eq!(buffer, bits("000001111111"));
    }

    #[test]
    fn test_append_rejects_foreign_symbols() {
        let mut buffer = BitBuffer::new();
        assert_eq!(
            buffer.append_hex("0g"),
            Err(Error::InvalidSymbol {
                radix: 16,
                symbol: 'g'
            })
        );
        assert_eq!(
            BitBuffer::from_base64("AB+"),
            Err(Error::InvalidSymbol {
                radix: 64,
                symbol: '+'
            })
        );
        assert!(BitBuffer::from_base64("=").is_err());
    }

    #[test]
    fn test_render_groups_consecutive_bits() {
        let buffer = bits("00011111");
        assert_eq!(buffer.render_hex(), "1f");

        let buffer = bits("000000000001");
        assert_eq!(buffer.render_base64(), "AB");
    }

    #[test]
    fn test_render_zero_fills_last_group() {
        assert_eq!(bits("1").render_hex(), "8");
        assert_eq!(bits("1").render_base64(), "g");
        assert_eq!(bits("00").render_base64(), "A");
        assert_eq!(bits("1111111").render_base64(), "#g");
        assert_eq!(BitBuffer::new().render_base64(), "");
    }

    #[test]
    fn test_render_inverts_append() {
        let patterns: [fn(usize) -> bool; 2] = [|i| (i * 7 + i / 3) % 5 < 2, |_| true];

        for pattern in patterns {
            for len in [0, 4, 8, 12, 24, 36, 48] {
                let buffer: BitBuffer = (0..len).map(pattern).collect();
                let mut hex = BitBuffer::new();
                hex.append_hex(&buffer.render_hex()).unwrap();
                assert_eq!(hex, buffer, "hex, {} bits", len);
            }

            for len in [0, 6, 12, 18, 36, 48] {
                let buffer: BitBuffer = (0..len).map(pattern).collect();
                let base64 = BitBuffer::from_base64(&buffer.render_base64()).unwrap();
                assert_eq!(base64, buffer, "base64, {} bits", len);
            }
        }
    }

    #[test]
    fn test_all_ones_symbols() {
        let ones: BitBuffer = std::iter::repeat(true).take(18).collect();
        assert_eq!(ones.render_base64(), "###");
        assert_eq!(ones.render_hex(), "ffffc");
    }

    #[test]
    fn test_hash_sign_is_last_symbol() {
        // `#` carries 0b111111, `%` carries 0b111110
        assert_eq!(BitBuffer::from_base64("#").unwrap(), bits("111111"));
        assert_eq!(BitBuffer::from_base64("%").unwrap(), bits("111110"));
        assert_eq!(bits("111110").render_base64(), "%");
    }

    #[test]
    fn test_pop_and_pop_leading() {
        let mut buffer = bits("1011001");
        assert!(buffer.pop().unwrap());
        assert!(!buffer.pop().unwrap());

        let leading = buffer.pop_leading(3).unwrap();
        assert_eq!(leading, bits("110"));
        assert_eq!(buffer, bits("01"));

        assert_eq!(buffer.pop_leading(0).unwrap().len(), 0);
        assert_eq!(
            buffer.pop_leading(3),
            Err(Error::Underflow {
                requested: 3,
                available: 2
            })
        );
        // A failed pop leaves the buffer alone
        assert_eq!(buffer.len(), 2);

        buffer.pop_leading(2).unwrap();
        assert!(buffer.pop().is_err());
    }

    #[test]
    fn test_is_clear() {
        assert!(BitBuffer::new().is_clear());
        assert!(bits("0000").is_clear());
        assert!(!bits("0010").is_clear());
    }
}

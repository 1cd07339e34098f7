// src/utils/hex.rs
use bytemuck::Pod;
use std::fmt;

/// Displays a byte slice as space-separated lowercase hex, highest address first.
///
/// On a little-endian host this prints a value's most significant byte first,
/// which makes the effect of a byte reversal easy to read off.
///
/// ```
/// use endian_swap::HexDump;
///
/// assert_eq!(HexDump(&[0xa6, 0xb5, 0x01, 0x00]).to_string(), "00 01 b5 a6");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Format `bytes` as a newline-terminated hex line.
pub fn hex_dump(bytes: &[u8]) -> String {
    format!("{}\n", HexDump(bytes))
}

/// Format the in-memory image of `value` as a newline-terminated hex line.
pub fn hex_dump_value<T: Pod>(value: &T) -> String {
    hex_dump(bytemuck::bytes_of(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_dump_order() {
        assert_eq!(hex_dump(&[0x01, 0x02, 0xab]), "ab 02 01\n");
    }

    #[test]
    fn test_hex_dump_empty() {
        assert_eq!(hex_dump(&[]), "\n");
        assert_eq!(HexDump(&[]).to_string(), "");
    }

    #[test]
    fn test_hex_dump_value() {
        let value = 0x0001_B5A6u32;
        let expected = if cfg!(target_endian = "little") {
            "00 01 b5 a6\n"
        } else {
            "a6 b5 01 00\n"
        };
        assert_eq!(hex_dump_value(&value), expected);
    }

    #[test]
    fn test_two_digit_padding() {
        assert_eq!(HexDump(&[0x00, 0x0f]).to_string(), "0f 00");
    }
}

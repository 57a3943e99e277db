//! Two-digit hexadecimal encoding of color channel bytes.

/// Render a byte as two uppercase hex digits, zero-padded ("00".."FF").
pub fn byte_to_hex(value: u8) -> String {
    format!("{:02X}", value)
}

/// Decode two hex digits into a byte.
///
/// Accepts both upper- and lower-case digits. Any other character (or a
/// missing one) contributes zero to the result instead of failing; the
/// whole converter is lenient about garbage input and this is the bottom
/// of that policy.
pub fn hex_pair_to_byte(pair: &str) -> u8 {
    let mut bytes = pair.bytes();
    let hi = bytes.next().map_or(0, hex_digit);
    let lo = bytes.next().map_or(0, hex_digit);
    hi * 16 + lo
}

fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        b'a'..=b'f' => c - b'a' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_hex_formatting() {
        assert_eq!(byte_to_hex(0), "00");
        assert_eq!(byte_to_hex(16), "10");
        assert_eq!(byte_to_hex(255), "FF");
        assert_eq!(byte_to_hex(10), "0A");
    }

    #[test]
    fn test_hex_pair_to_byte_both_cases() {
        assert_eq!(hex_pair_to_byte("ff"), 255);
        assert_eq!(hex_pair_to_byte("FF"), 255);
        assert_eq!(hex_pair_to_byte("0a"), 10);
        assert_eq!(hex_pair_to_byte("80"), 128);
    }

    #[test]
    fn test_hex_pair_to_byte_garbage_contributes_zero() {
        assert_eq!(hex_pair_to_byte("G5"), 5);
        assert_eq!(hex_pair_to_byte("5G"), 80);
        assert_eq!(hex_pair_to_byte("!!"), 0);
        assert_eq!(hex_pair_to_byte(""), 0);
        assert_eq!(hex_pair_to_byte("A"), 160);
    }

    #[test]
    fn test_round_trip_all_bytes() {
        for n in 0..=255u8 {
            assert_eq!(hex_pair_to_byte(&byte_to_hex(n)), n);
        }
    }
}

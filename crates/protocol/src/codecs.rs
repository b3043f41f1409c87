//! Endless Online number codec
//!
//! Numbers are stored as 1-4 bytes, least significant first, each byte
//! holding one base-253 digit offset by one. Raw bytes 0 and 255 are kept
//! out of payloads because the file formats use them as sentinels.

/// Largest value of one encoded digit plus one
pub const ONE_BYTE_MAX: u32 = 253;
/// 253^2
pub const TWO_BYTE_MAX: u32 = ONE_BYTE_MAX * ONE_BYTE_MAX;
/// 253^3
pub const THREE_BYTE_MAX: u32 = TWO_BYTE_MAX * ONE_BYTE_MAX;
/// Largest value representable in 4 encoded bytes (253^4 - 1)
pub const MAX_NUMBER: u32 = 4_097_152_080;

/// Placeholder for an unused byte position; decodes to a zero digit
pub const ABSENT_BYTE: u8 = 254;

/// Adjust one raw byte into its digit value
///
/// # Format
/// - 254 (absent) reads as 1
/// - 0 reads as 128
/// - every value is then decremented by one
#[inline]
fn digit(byte: u8) -> u32 {
    let adjusted = match byte {
        ABSENT_BYTE => 1,
        0 => 128,
        b => b as u32,
    };
    adjusted - 1
}

/// Decode up to 4 raw bytes into a number
///
/// Missing trailing positions are treated as [`ABSENT_BYTE`]. The first
/// byte is the least significant digit:
/// `b4 * 253^3 + b3 * 253^2 + b2 * 253 + b1`.
#[inline]
pub fn decode_number(bytes: &[u8]) -> u32 {
    debug_assert!(bytes.len() <= 4, "numbers are at most 4 bytes");

    let mut raw = [ABSENT_BYTE; 4];
    for (slot, &b) in raw.iter_mut().zip(bytes) {
        *slot = b;
    }

    digit(raw[3]) * THREE_BYTE_MAX
        + digit(raw[2]) * TWO_BYTE_MAX
        + digit(raw[1]) * ONE_BYTE_MAX
        + digit(raw[0])
}

/// Encode a number into 4 raw bytes
///
/// Inverse of [`decode_number`]. Positions above the highest used digit are
/// left as [`ABSENT_BYTE`]. Values above [`MAX_NUMBER`] saturate.
pub fn encode_number(value: u32) -> [u8; 4] {
    let value = value.min(MAX_NUMBER);
    let mut bytes = [ABSENT_BYTE; 4];
    let mut remaining = value;

    if value >= THREE_BYTE_MAX {
        bytes[3] = (remaining / THREE_BYTE_MAX + 1) as u8;
        remaining %= THREE_BYTE_MAX;
    }

    if value >= TWO_BYTE_MAX {
        bytes[2] = (remaining / TWO_BYTE_MAX + 1) as u8;
        remaining %= TWO_BYTE_MAX;
    }

    if value >= ONE_BYTE_MAX {
        bytes[1] = (remaining / ONE_BYTE_MAX + 1) as u8;
        remaining %= ONE_BYTE_MAX;
    }

    bytes[0] = (remaining + 1) as u8;
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_decode() {
        for b in 1u8..=253 {
            assert_eq!(decode_number(&[b]), b as u32 - 1, "Failed for {}", b);
        }
    }

    #[test]
    fn test_sentinel_bytes() {
        // Zero is read as 128 before the decrement
        assert_eq!(decode_number(&[0]), 127);
        // Absent marker alone is the canonical "no value"
        assert_eq!(decode_number(&[ABSENT_BYTE]), 0);
        assert_eq!(decode_number(&[ABSENT_BYTE; 4]), 0);
        assert_eq!(decode_number(&[]), 0);
    }

    #[test]
    fn test_multi_byte_decode() {
        // 2 + 1 * 253
        assert_eq!(decode_number(&[3, 2]), 255);
        // 1 * 253^2
        assert_eq!(decode_number(&[1, 1, 2]), TWO_BYTE_MAX);
        // Trailing absent positions contribute nothing
        assert_eq!(decode_number(&[3, 2, ABSENT_BYTE, ABSENT_BYTE]), 255);
        // Largest value
        assert_eq!(decode_number(&[253, 253, 253, 253]), MAX_NUMBER);
    }

    #[test]
    fn test_number_roundtrip() {
        let test_cases = vec![
            0u32,
            1,
            252,
            253,
            254,
            1000,
            TWO_BYTE_MAX - 1,
            TWO_BYTE_MAX,
            64_009 * 7 + 13,
            THREE_BYTE_MAX - 1,
            THREE_BYTE_MAX,
            3_000_000_000,
            MAX_NUMBER,
        ];

        for val in test_cases {
            let bytes = encode_number(val);
            assert!(bytes.iter().all(|&b| (1..=254).contains(&b)), "Bad byte for {}", val);
            assert_eq!(decode_number(&bytes), val, "Failed for {}", val);
        }
    }

    #[test]
    fn test_encoding_matches_format() {
        assert_eq!(encode_number(0), [1, 254, 254, 254]);
        assert_eq!(encode_number(252), [253, 254, 254, 254]);
        assert_eq!(encode_number(253), [1, 2, 254, 254]);
        assert_eq!(encode_number(u32::MAX), encode_number(MAX_NUMBER));
    }
}

//! Small building blocks shared by the generators: sliding windows over
//! characters and bytes, and the chunk interleave used by the Meta-Code.

/// Sliding n-grams of `width` code points over `text`.
///
/// Always yields at least one window: when the input is shorter than
/// `width` the whole input is the only window. `width` must be at least 2.
pub fn sliding_windows(text: &str, width: usize) -> Vec<String> {
    debug_assert!(width >= 2, "sliding window width must be 2 or bigger");
    let chars: Vec<char> = text.chars().collect();
    let count = chars.len().saturating_sub(width - 1).max(1);
    (0..count)
        .map(|i| chars[i..(i + width).min(chars.len())].iter().collect())
        .collect()
}

/// Sliding n-grams of `width` bytes over `data`, with the same at-least-one
/// window rule as [`sliding_windows`].
pub fn sliding_byte_windows(data: &[u8], width: usize) -> Vec<&[u8]> {
    debug_assert!(width >= 2, "sliding window width must be 2 or bigger");
    let count = data.len().saturating_sub(width - 1).max(1);
    (0..count)
        .map(|i| &data[i..(i + width).min(data.len())])
        .collect()
}

/// Interleave the leading 16 bytes of two digests in 4-byte chunks:
/// `a0 b0 a1 b1 a2 b2 a3 b3` → 32 bytes.
pub fn interleave_quads(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for i in 0..4 {
        out[i * 8..i * 8 + 4].copy_from_slice(&a[i * 4..i * 4 + 4]);
        out[i * 8 + 4..i * 8 + 8].copy_from_slice(&b[i * 4..i * 4 + 4]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_regular() {
        assert_eq!(sliding_windows("hello", 3), vec!["hel", "ell", "llo"]);
    }

    #[test]
    fn windows_short_input() {
        assert_eq!(sliding_windows("hi", 4), vec!["hi"]);
        assert_eq!(sliding_windows("", 4), vec![""]);
    }

    #[test]
    fn windows_multibyte() {
        assert_eq!(sliding_windows("☃💩x", 2), vec!["☃💩", "💩x"]);
    }

    #[test]
    fn byte_windows() {
        assert_eq!(
            sliding_byte_windows(&[1, 2, 3, 4], 3),
            vec![&[1u8, 2, 3][..], &[2, 3, 4]]
        );
        assert_eq!(sliding_byte_windows(b"", 3), vec![&b""[..]]);
    }

    #[test]
    fn interleave() {
        let a = [0x11u8; 32];
        let b = [0x22u8; 32];
        let mixed = interleave_quads(&a, &b);
        assert_eq!(&mixed[..8], &[0x11, 0x11, 0x11, 0x11, 0x22, 0x22, 0x22, 0x22]);
    }
}

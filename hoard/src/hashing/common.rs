/// Fold the high half of a 64-bit value into its low half.
///
/// Multiply-shift schemes concentrate their entropy in the top bits of the product, while hash
/// tables usually pick buckets from the bottom bits - folding gives both ends good quality.
#[inline]
pub const fn fold_64(value: u64) -> u64 {
    value ^ (value >> 32)
}

/// Split a 128-bit value into its two 64-bit halves (low, high).
#[inline]
pub const fn split_128(value: u128) -> (u64, u64) {
    (value as u64, (value >> 64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_64_moves_high_bits_down() {
        assert_eq!(fold_64(0), 0);
        assert_eq!(fold_64(1 << 32), (1 << 32) | 1);
        assert_eq!(fold_64(0xFFFF_FFFF), 0xFFFF_FFFF);
    }

    #[test]
    fn test_split_128() {
        assert_eq!(split_128(u128::MAX), (u64::MAX, u64::MAX));
        assert_eq!(split_128(1 << 64), (0, 1));
    }
}

//! Stable string hashing for set membership

/// Hash a string with CRC-32 (IEEE).
///
/// The result depends only on the bytes of `s`, so set ordering built on it is
/// reproducible across processes and platforms.
pub fn string(s: &str) -> u32 {
    crc32fast::hash(s.as_bytes())
}

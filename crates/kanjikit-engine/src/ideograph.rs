//! CJK unified ideograph detection.

/// True iff `c` is a CJK Unified Ideograph (a "kanji").
///
/// A character qualifies when its Unicode name has the form
/// `CJK UNIFIED IDEOGRAPH-XXXX`, which is exactly the URO plus
/// extensions A through I. Everything else is false: kana, latin,
/// control characters (which have no name at all), and CJK
/// *compatibility* ideographs, whose names do not match the unified
/// pattern.
pub fn is_kanji(c: char) -> bool {
    matches!(
        u32::from(c),
        0x4E00..=0x9FFF       // CJK Unified Ideographs
        | 0x3400..=0x4DBF     // Extension A
        | 0x20000..=0x2A6DF   // Extension B
        | 0x2A700..=0x2B73F   // Extension C
        | 0x2B740..=0x2B81F   // Extension D
        | 0x2B820..=0x2CEAF   // Extension E
        | 0x2CEB0..=0x2EBEF   // Extension F
        | 0x2EBF0..=0x2EE5D   // Extension I
        | 0x30000..=0x3134A   // Extension G
        | 0x31350..=0x323AF   // Extension H
    )
}

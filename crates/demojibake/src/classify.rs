//! Byte-shape classification of UTF-8 sequence starts.

/// The byte the lossy transcoding pass left behind for anything it could not
/// represent: an ASCII question mark.
pub(crate) const DAMAGE_MARKER: u8 = 0x3F;

/// Neutral byte written over values judged unrecoverable: an ASCII full stop.
pub(crate) const PLACEHOLDER: u8 = 0x2E;

/// Returns `true` if `byte` is a UTF-8 continuation byte.
pub(crate) fn is_continuation(byte: u8) -> bool {
    matches!(byte, 0x80..=0xBF)
}

/// Total sequence length announced by a multi-byte lead byte, or `None` when
/// `byte` is not a multi-byte lead (ASCII, a continuation byte, or the
/// invalid `0xF8..=0xFF` range).
pub(crate) fn lead_len(byte: u8) -> Option<usize> {
    match byte {
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

/// Returns `true` iff a structurally well-formed UTF-8 sequence starts at
/// `pos` and fits entirely inside `window`.
///
/// An ASCII byte counts as a one-byte sequence, with one deliberate
/// exception: the question mark (`0x3F`). A `?` in the input may be a genuine
/// literal, or it may be a damaged continuation byte belonging to the
/// previous sequence, and byte-shape inspection alone cannot tell the two
/// apart. It is therefore never accepted as a clean anchor.
///
/// Multi-byte leads are accepted only when every continuation byte they
/// announce is present in the window and lies in `0x80..=0xBF`.
#[must_use]
pub fn sequence_starts_at(window: &[u8], pos: usize) -> bool {
    let Some(&byte) = window.get(pos) else {
        return false;
    };
    if byte <= 0x7F {
        return byte != DAMAGE_MARKER;
    }
    match lead_len(byte) {
        Some(len) => window
            .get(pos + 1..pos + len)
            .is_some_and(|tail| tail.iter().copied().all(is_continuation)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::sequence_starts_at;

    #[rstest]
    #[case::ascii(&[0x41], 0, true)]
    #[case::question_mark(&[0x3F], 0, false)]
    #[case::two_byte(&[0xC2, 0xB0], 0, true)]
    #[case::two_byte_damaged(&[0xC2, 0x3F], 0, false)]
    #[case::two_byte_truncated(&[0xC2], 0, false)]
    #[case::three_byte(&[0xE4, 0xB8, 0xAD], 0, true)]
    #[case::three_byte_truncated(&[0xE4, 0xB8], 0, false)]
    #[case::three_byte_bad_tail(&[0xE0, 0x41, 0xB8], 0, false)]
    #[case::four_byte(&[0xF0, 0x9F, 0x92, 0xA9], 0, true)]
    #[case::four_byte_truncated(&[0xF0, 0x9F, 0x92], 0, false)]
    #[case::invalid_lead(&[0xF8, 0x80, 0x80, 0x80, 0x80], 0, false)]
    #[case::lone_continuation(&[0x80], 0, false)]
    #[case::interior_position(&[0x41, 0xC2, 0xB0], 1, true)]
    #[case::position_past_end(&[0x41], 3, false)]
    fn classifies_sequence_starts(
        #[case] window: &[u8],
        #[case] pos: usize,
        #[case] expected: bool,
    ) {
        assert_eq!(sequence_starts_at(window, pos), expected);
    }
}

//! The in-place repair pass.

use bstr::ByteSlice;

use crate::classify::{DAMAGE_MARKER, PLACEHOLDER, is_continuation, lead_len};

/// Repairs `buf` in place and returns the number of bytes overwritten.
///
/// A single forward pass over the range, sequence by sequence:
///
/// - ASCII bytes are left untouched. This includes a literal `?`: outside a
///   recognized multi-byte context there is no evidence it is damage.
/// - A multi-byte lead whose full sequence fits in the range has each `0x3F`
///   continuation byte overwritten with `guessed_continuation`. If any
///   continuation byte is still out of range after that substitution, the
///   sequence is judged unrecoverable and every byte of the span above
///   `0x7F` — except the ones just substituted — becomes the placeholder
///   (`0x2E`).
/// - Any other byte above `0x7F` (a continuation with no lead, an `0xF8..`
///   byte, or a lead truncated by the end of the range) is an orphan and
///   becomes the placeholder.
///
/// The pass never reads or writes outside `buf`, always terminates, and
/// cannot fail: every byte value has a defined outcome. `guessed_continuation`
/// must itself be a continuation byte (`0x80..=0xBF`).
pub fn repair_in_place(buf: &mut [u8], guessed_continuation: u8) -> u64 {
    debug_assert!(is_continuation(guessed_continuation));

    let mut overwritten = 0u64;
    let mut i = 0;
    while i < buf.len() {
        let byte = buf[i];
        if byte <= 0x7F {
            match buf[i..].find_non_ascii_byte() {
                Some(skip) => i += skip,
                None => break,
            }
            continue;
        }
        match lead_len(byte) {
            Some(len) if i + len <= buf.len() => {
                overwritten += repair_sequence(&mut buf[i..i + len], guessed_continuation);
                i += len;
            }
            _ => {
                buf[i] = PLACEHOLDER;
                overwritten += 1;
                i += 1;
            }
        }
    }
    overwritten
}

/// Repairs one multi-byte sequence span: `seq[0]` is the lead byte, the rest
/// are its continuation positions.
///
/// The order is substitute, then recheck, then placeholder. All damage
/// markers are replaced with the guess before the span is judged, so a
/// sequence that is unrecoverable for a different reason still keeps its
/// substituted bytes.
fn repair_sequence(seq: &mut [u8], guessed_continuation: u8) -> u64 {
    let mut overwritten = 0u64;
    let mut substituted = [false; 4];

    for (pos, byte) in seq.iter_mut().enumerate().skip(1) {
        if *byte == DAMAGE_MARKER {
            *byte = guessed_continuation;
            substituted[pos] = true;
            overwritten += 1;
        }
    }

    if seq[1..].iter().copied().all(is_continuation) {
        return overwritten;
    }

    // Unrecoverable: the original character is lost for good. Only bytes
    // that cannot pass as ASCII are blanked.
    for (pos, byte) in seq.iter_mut().enumerate() {
        if *byte > 0x7F && !substituted[pos] {
            *byte = PLACEHOLDER;
            overwritten += 1;
        }
    }
    overwritten
}

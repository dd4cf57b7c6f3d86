//! Worked examples driven through the full pipeline.

use alloc::vec::Vec;
use std::io::Cursor;

use rstest::rstest;

use crate::{RepairOptions, RepairPipeline, repair_in_place};

const GUESS: u8 = 0x98;

fn run_pipeline(input: &[u8], window_capacity: usize) -> (Vec<u8>, u64) {
    let mut out = Vec::new();
    let stats = RepairPipeline::new(RepairOptions {
        guessed_continuation: GUESS,
        window_capacity,
    })
    .run(Cursor::new(input.to_vec()), &mut out)
    .unwrap();
    assert_eq!(stats.bytes_read, input.len() as u64);
    assert_eq!(stats.bytes_emitted, input.len() as u64);
    (out, stats.bytes_overwritten)
}

#[test]
fn plain_ascii_with_literal_question_marks_is_untouched() {
    let (out, overwritten) = run_pipeline(b"why? because.", 64);
    assert_eq!(out, b"why? because.");
    assert_eq!(overwritten, 0);
}

#[test]
fn clean_utf8_is_idempotent() {
    let text = "почему? потому — вот почему.";
    let (out, overwritten) = run_pipeline(text.as_bytes(), 16);
    assert_eq!(out, text.as_bytes());
    assert_eq!(overwritten, 0);
}

#[test]
fn damaged_two_byte_continuation_gets_the_guess() {
    let (out, overwritten) = run_pipeline(&[0xC2, 0x3F], 64);
    assert_eq!(out, [0xC2, GUESS]);
    assert_eq!(overwritten, 1);
}

#[test]
fn unrecoverable_sequence_keeps_substitution_order() {
    // Lead, ASCII where a continuation should be, then a damage marker. The
    // marker is substituted first; the recheck then condemns the span, but
    // only the lead is above 0x7F and becomes the placeholder.
    let (out, overwritten) = run_pipeline(&[0xE0, 0x41, 0x3F], 64);
    assert_eq!(out, [0x2E, 0x41, GUESS]);
    assert_eq!(overwritten, 2);
}

#[test]
fn orphaned_high_byte_becomes_placeholder() {
    let (out, overwritten) = run_pipeline(&[0x91], 64);
    assert_eq!(out, [0x2E]);
    assert_eq!(overwritten, 1);
}

#[test]
fn repeated_two_byte_damage_restores_deterministically() {
    // Every continuation byte of a 2-byte run stomped to `?`.
    let clean = "привет";
    let mut damaged = clean.as_bytes().to_vec();
    for i in (1..damaged.len()).step_by(2) {
        damaged[i] = 0x3F;
    }

    let (first, overwritten) = run_pipeline(&damaged, 64);
    let (second, _) = run_pipeline(&damaged, 64);
    assert_eq!(first, second);
    assert_eq!(overwritten, (clean.chars().count()) as u64);
    for pair in first.chunks(2) {
        assert_eq!(pair[1], GUESS);
    }
}

#[rstest]
#[case::window_of_eight(8)]
#[case::window_of_sixteen(16)]
#[case::window_larger_than_input(4096)]
fn chunked_run_matches_whole_buffer_repair(#[case] window_capacity: usize) {
    // Sparse damage over mixed ASCII and Cyrillic, so windows always contain
    // classifiable anchors.
    let clean = "цена: 100? нет — дорого, сказал он. и ещё раз: дорого.";
    let mut damaged = clean.as_bytes().to_vec();
    let mut seen = 0usize;
    for byte in &mut damaged {
        if matches!(*byte, 0x80..=0xBF) {
            seen += 1;
            if seen % 5 == 0 {
                *byte = 0x3F;
            }
        }
    }

    let mut whole = damaged.clone();
    let expected_overwritten = repair_in_place(&mut whole, GUESS);

    let (out, overwritten) = run_pipeline(&damaged, window_capacity);
    assert_eq!(out, whole);
    assert_eq!(overwritten, expected_overwritten);
}

#[test]
fn truncated_lead_at_end_of_input_is_an_orphan() {
    let (out, overwritten) = run_pipeline(&[0x41, 0xE0], 64);
    assert_eq!(out, [0x41, 0x2E]);
    assert_eq!(overwritten, 1);
}

#[test]
fn empty_input_yields_empty_output() {
    let (out, overwritten) = run_pipeline(&[], 64);
    assert_eq!(out, Vec::<u8>::new());
    assert_eq!(overwritten, 0);
}

#[test]
fn full_window_without_a_cut_still_makes_progress() {
    // Sixteen damaged 2-byte sequences: nothing in the window classifies,
    // so whole windows are flushed and repaired via the sequence pass.
    let damaged: Vec<u8> = core::iter::repeat([0xD0, 0x3F])
        .take(16)
        .flatten()
        .collect();
    let (out, overwritten) = run_pipeline(&damaged, 8);
    assert_eq!(overwritten, 16);
    for pair in out.chunks(2) {
        assert_eq!(pair, [0xD0, GUESS]);
    }
}

//! Chunked streaming from a byte source to a byte sink.

use alloc::{vec, vec::Vec};
use std::io::{ErrorKind, Read, Write};

use crate::{
    boundary::find_cut, error::PipelineError, options::RepairOptions, repair::repair_in_place,
    stats::RepairStats,
};

/// Streams bytes from a reader to a writer in bounded windows, repairing
/// each window before it is emitted.
///
/// The pipeline fills a window of fixed capacity, asks [`find_cut`] for the
/// rightmost safe boundary, repairs and emits the prefix, and carries the
/// unresolved tail into the next window. No multi-byte sequence is ever
/// split across two windows, so the result is identical to repairing the
/// whole input in one buffer; memory use stays bounded by the window
/// capacity regardless of input size.
///
/// Two degenerate windows are handled specially:
///
/// - the final window (the reader is exhausted before the window fills) is
///   repaired and emitted whole, with nothing deferred;
/// - a full window with no safe cut cannot grow, so it is also repaired and
///   emitted whole, the orphaned-byte fallback resolving whatever is there.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// use demojibake::{RepairOptions, RepairPipeline};
///
/// let mut out = Vec::new();
/// let stats = RepairPipeline::new(RepairOptions::default())
///     .run(Cursor::new(b"caf\xC3\x3F".to_vec()), &mut out)
///     .unwrap();
/// assert_eq!(out, b"caf\xC3\x98");
/// assert_eq!(stats.bytes_overwritten, 1);
/// ```
#[derive(Debug, Clone)]
pub struct RepairPipeline {
    options: RepairOptions,
}

impl RepairPipeline {
    /// Creates a pipeline with the given options.
    ///
    /// # Panics
    ///
    /// Panics if `options.window_capacity < 4` (a window must be able to
    /// hold the longest UTF-8 sequence) or if `options.guessed_continuation`
    /// is not a continuation byte.
    #[must_use]
    pub fn new(options: RepairOptions) -> Self {
        assert!(
            options.window_capacity >= 4,
            "window capacity must hold at least one full UTF-8 sequence"
        );
        assert!(
            matches!(options.guessed_continuation, 0x80..=0xBF),
            "guessed continuation byte must lie in 0x80..=0xBF"
        );
        Self { options }
    }

    /// The options this pipeline was built with.
    #[must_use]
    pub fn options(&self) -> &RepairOptions {
        &self.options
    }

    /// Streams `reader` to `writer`, repairing as it goes.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] when a read or write fails; the run aborts
    /// immediately and the sink keeps whatever was already flushed.
    pub fn run<R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<RepairStats, PipelineError> {
        self.run_with_progress(reader, writer, |_| {})
    }

    /// Like [`run`](Self::run), invoking `progress` with the running totals
    /// after each emitted window.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] when a read or write fails.
    pub fn run_with_progress<R, W, F>(
        &self,
        mut reader: R,
        mut writer: W,
        mut progress: F,
    ) -> Result<RepairStats, PipelineError>
    where
        R: Read,
        W: Write,
        F: FnMut(&RepairStats),
    {
        let capacity = self.options.window_capacity;
        let guess = self.options.guessed_continuation;

        let mut stats = RepairStats::default();
        let mut window: Vec<u8> = vec![0; capacity];
        // The carry occupies window[..filled] between iterations.
        let mut filled = 0usize;

        loop {
            filled = fill_window(&mut reader, &mut window, filled, stats.bytes_emitted)?;
            stats.bytes_read = stats.bytes_emitted + filled as u64;

            if filled < capacity {
                // Final window: the reader is exhausted. Repair the whole
                // remainder, carry nothing.
                emit(&mut writer, &mut window[..filled], guess, &mut stats)?;
                progress(&stats);
                break;
            }

            // A full window with no classifiable boundary cannot grow;
            // emit it whole and let the orphan fallback resolve it.
            let cut = find_cut(&window[..filled]).unwrap_or(filled);
            emit(&mut writer, &mut window[..cut], guess, &mut stats)?;
            window.copy_within(cut..filled, 0);
            filled -= cut;
            progress(&stats);
        }

        writer.flush().map_err(|source| PipelineError::Write {
            bytes_emitted: stats.bytes_emitted,
            source,
        })?;
        Ok(stats)
    }
}

/// Reads fresh bytes into `window[filled..]` until the window is full or the
/// reader is exhausted; returns the new filled length.
fn fill_window<R: Read>(
    reader: &mut R,
    window: &mut [u8],
    mut filled: usize,
    bytes_emitted: u64,
) -> Result<usize, PipelineError> {
    while filled < window.len() {
        match reader.read(&mut window[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(source) if source.kind() == ErrorKind::Interrupted => {}
            Err(source) => {
                return Err(PipelineError::Read {
                    bytes_read: bytes_emitted + filled as u64,
                    source,
                });
            }
        }
    }
    Ok(filled)
}

/// Repairs `range` in place, writes it out, and advances the counters.
fn emit<W: Write>(
    writer: &mut W,
    range: &mut [u8],
    guess: u8,
    stats: &mut RepairStats,
) -> Result<(), PipelineError> {
    stats.bytes_overwritten += repair_in_place(range, guess);
    writer.write_all(range).map_err(|source| PipelineError::Write {
        bytes_emitted: stats.bytes_emitted,
        source,
    })?;
    stats.bytes_emitted += range.len() as u64;
    Ok(())
}

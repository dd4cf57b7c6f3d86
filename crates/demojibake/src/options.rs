//! Policy knobs for the repair pass and the streaming pipeline.

/// Default replacement for a damaged continuation byte.
///
/// Tuned for CP1251-damaged Cyrillic text, where `0x98` is the most common
/// continuation byte. It is a lossy guess, not a recovered truth; callers
/// repairing other scripts should pick their own constant.
pub const DEFAULT_GUESSED_CONTINUATION: u8 = 0x98;

/// Default window capacity for the streaming pipeline, in bytes.
pub const DEFAULT_WINDOW_CAPACITY: usize = 5_000_000;

/// Configuration for [`repair_in_place`] and [`RepairPipeline`].
///
/// # Examples
///
/// ```rust
/// use demojibake::RepairOptions;
///
/// let options = RepairOptions {
///     guessed_continuation: 0x91,
///     ..RepairOptions::default()
/// };
/// ```
///
/// [`repair_in_place`]: crate::repair_in_place
/// [`RepairPipeline`]: crate::RepairPipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairOptions {
    /// The byte written over a `0x3F` damage marker found in continuation
    /// position.
    ///
    /// Must lie in `0x80..=0xBF` so the substituted sequence is structurally
    /// valid UTF-8 again.
    ///
    /// # Default
    ///
    /// [`DEFAULT_GUESSED_CONTINUATION`] (`0x98`)
    pub guessed_continuation: u8,

    /// Capacity of the processing window, in bytes.
    ///
    /// Bounds the pipeline's memory use independently of input size. Must be
    /// at least `4` so every UTF-8 sequence can fit in a single window.
    ///
    /// # Default
    ///
    /// [`DEFAULT_WINDOW_CAPACITY`] (5 MB)
    pub window_capacity: usize,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            guessed_continuation: DEFAULT_GUESSED_CONTINUATION,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
        }
    }
}

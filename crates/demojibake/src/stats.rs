//! Running totals for a pipeline run.

/// Byte counters accumulated over one streaming run.
///
/// Purely observational: the counters never influence the repair decisions.
/// Once a run completes, `bytes_emitted` equals `bytes_read`; the repair pass
/// only overwrites bytes, it never inserts or deletes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairStats {
    /// Bytes consumed from the input source so far.
    pub bytes_read: u64,
    /// Bytes written to the output sink so far.
    pub bytes_emitted: u64,
    /// Bytes overwritten by the repair policy so far.
    pub bytes_overwritten: u64,
}

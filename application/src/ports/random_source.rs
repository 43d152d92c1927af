//! Random source port

/// Source of uniformly distributed indices
///
/// Injected into the selection engine so tests can make quote selection
/// deterministic.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. Never called with `len == 0`.
    fn next_index(&self, len: usize) -> usize;
}

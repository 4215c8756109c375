/// Construction-time configuration error.
///
/// This is the only fallible surface in the crate: every runtime operation is a deterministic
/// pure computation over in-memory state, with out-of-range fractions clamped and the
/// `loaded_count == 0` division special-cased rather than reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `chunk_size` must be at least 1. Fatal to construction; the caller must reconstruct
    /// with valid parameters.
    #[error("invalid configuration: chunk_size must be >= 1 (got {chunk_size})")]
    InvalidConfiguration { chunk_size: usize },
}

/// A lightweight, serializable snapshot of the incremental-loading state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// Invariants (maintained by [`crate::LazyList`], clamped on restore):
/// - `chunk_size >= 1`
/// - `loaded_count <= total_count`
/// - `loaded_count` never decreases over a controller's lifetime
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadState {
    pub total_count: usize,
    pub chunk_size: usize,
    pub loaded_count: usize,
}

impl LoadState {
    /// `true` once every dataset row has been materialized. Terminal and irreversible.
    pub fn is_fully_loaded(&self) -> bool {
        self.loaded_count >= self.total_count
    }
}

/// A lightweight, serializable snapshot of the current viewport position.
///
/// Fractions are relative to the *total* dataset, not the loaded subset.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_fraction: f64,
    pub page_size_fraction: f64,
}

/// A combined snapshot of load + viewport state.
///
/// This is useful for restoring UI state across frames or sessions without coupling the
/// controller to any specific UI framework.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub load: LoadState,
    pub viewport: ViewportState,
}

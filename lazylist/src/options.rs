use alloc::sync::Arc;

use crate::LoadRange;
use crate::list::LazyList;

/// Default chunk size, matching the classic lazy-treeview demos.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// A callback fired once per materialized chunk.
///
/// Chunks are emitted in ascending order and each dataset row is produced exactly once over the
/// controller's lifetime; the host appends the corresponding visual rows.
pub type OnMaterializeCallback = Arc<dyn Fn(LoadRange) + Send + Sync>;

/// A callback fired when the controller's state changes.
///
/// Public operations batch internal updates, so this fires at most once per operation even when
/// a catch-up loop materializes several chunks.
pub type OnChangeCallback = Arc<dyn Fn(&LazyList) + Send + Sync>;

/// Configuration for [`crate::LazyList`].
///
/// This type is designed to be cheap to clone: callbacks are stored in `Arc`s.
pub struct LazyListOptions {
    /// The number of logical rows in the dataset.
    pub total_count: usize,

    /// How many rows to materialize per load step. Must be at least 1.
    ///
    /// Catch-up always loads in `chunk_size` increments, never fewer and never skipping ahead,
    /// so the burst of materialization work per event stays bounded by a predictable multiple
    /// of this value.
    pub chunk_size: usize,

    /// The viewport's initial page size as a fraction of the total dataset.
    ///
    /// Hosts typically compute this from widget geometry (visible rows / total rows) and update
    /// it later via `set_page_size_fraction`.
    pub initial_page_size_fraction: f64,

    /// Optional callback fired once per materialized chunk.
    pub on_materialize: Option<OnMaterializeCallback>,

    /// Optional callback fired when the controller's state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl LazyListOptions {
    /// Creates options for a dataset of `total_count` rows with the default chunk size.
    pub fn new(total_count: usize) -> Self {
        Self {
            total_count,
            chunk_size: DEFAULT_CHUNK_SIZE,
            initial_page_size_fraction: 0.0,
            on_materialize: None,
            on_change: None,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_initial_page_size_fraction(mut self, page_size_fraction: f64) -> Self {
        self.initial_page_size_fraction = page_size_fraction;
        self
    }

    pub fn with_on_materialize(
        mut self,
        on_materialize: Option<impl Fn(LoadRange) + Send + Sync + 'static>,
    ) -> Self {
        self.on_materialize = on_materialize.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&LazyList) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for LazyListOptions {
    fn clone(&self) -> Self {
        Self {
            total_count: self.total_count,
            chunk_size: self.chunk_size,
            initial_page_size_fraction: self.initial_page_size_fraction,
            on_materialize: self.on_materialize.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for LazyListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LazyListOptions")
            .field("total_count", &self.total_count)
            .field("chunk_size", &self.chunk_size)
            .field(
                "initial_page_size_fraction",
                &self.initial_page_size_fraction,
            )
            .finish_non_exhaustive()
    }
}

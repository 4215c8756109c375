/// Raw wheel-delta to row-count mapping.
///
/// Desktop toolkits report wheel motion in hardware deltas (±120 per notch on most platforms)
/// with positive values meaning "scroll up". The classic lazy-treeview demos turn that into
/// view rows with `int(-5 * delta / 120)`; the numbers are empirically tuned UI feel, not a
/// contract, so they live here as configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelConfig {
    /// The raw delta one wheel notch produces.
    pub delta_per_notch: i32,
    /// How many view rows one notch scrolls.
    pub rows_per_notch: i64,
    /// Flip the sign so a positive raw delta (wheel up) scrolls backward.
    pub invert: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            delta_per_notch: 120,
            rows_per_notch: 5,
            invert: true,
        }
    }
}

impl WheelConfig {
    /// Converts a raw device delta into a signed row count (positive = forward).
    pub fn rows_for(&self, raw_delta: i32) -> i64 {
        let notches = raw_delta as i64 * self.rows_per_notch;
        let rows = notches / self.delta_per_notch.max(1) as i64;
        if self.invert { -rows } else { rows }
    }
}

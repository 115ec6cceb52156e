use indexmap::IndexMap;

use crate::core::SeriesId;

/// Which sample sequence of a series a hint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveSlot {
    Primary,
    /// Second boundary curve of area series.
    Secondary,
}

/// Last window-start index per series curve.
///
/// Hints are advisory: a stale or missing entry only makes the next windowed
/// search start farther from the answer.
#[derive(Debug, Clone, Default)]
pub struct WindowHintCache {
    hints: IndexMap<(SeriesId, CurveSlot), usize>,
}

impl WindowHintCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, series_id: SeriesId, slot: CurveSlot) -> usize {
        self.hints.get(&(series_id, slot)).copied().unwrap_or(0)
    }

    pub fn set(&mut self, series_id: SeriesId, slot: CurveSlot, index: usize) {
        self.hints.insert((series_id, slot), index);
    }

    /// Copy of the hints of one series, for searches whose updates are
    /// discarded (e.g. parallel candidate scans).
    #[must_use]
    pub fn snapshot_for(&self, series_id: SeriesId) -> Self {
        let hints = [CurveSlot::Primary, CurveSlot::Secondary]
            .into_iter()
            .filter_map(|slot| {
                self.hints
                    .get(&(series_id, slot))
                    .map(|index| ((series_id, slot), *index))
            })
            .collect();
        Self { hints }
    }

    /// Drops hints of a removed or reloaded series.
    pub fn forget(&mut self, series_id: SeriesId) {
        self.hints.retain(|(id, _), _| *id != series_id);
    }

    pub fn clear(&mut self) {
        self.hints.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

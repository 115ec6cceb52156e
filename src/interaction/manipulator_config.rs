use serde::{Deserialize, Serialize};

use crate::core::{Series, SeriesKind};
use crate::error::{TrackerError, TrackerResult};

/// Which series kinds take part in series selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeriesFilter {
    #[default]
    Any,
    AreaOnly,
    LineOnly,
}

impl SeriesFilter {
    #[must_use]
    pub fn accepts(self, series: &Series) -> bool {
        match self {
            Self::Any => true,
            Self::AreaOnly => series.kind() == SeriesKind::Area,
            Self::LineOnly => series.kind() == SeriesKind::Line,
        }
    }
}

/// Tuning of the touch-drag tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerManipulatorConfig {
    /// Prefer the nearest sample when it lies within `fires_distance`.
    #[serde(default)]
    pub snap: bool,
    /// Never interpolate between samples.
    #[serde(default)]
    pub points_only: bool,
    /// Keep the series picked at gesture start for the whole drag.
    #[serde(default = "default_lock_to_initial_series")]
    pub lock_to_initial_series: bool,
    /// Screen distance (pixels) within which a series is picked.
    #[serde(default = "default_fires_distance")]
    pub fires_distance: f64,
    /// Only read when `points_only` is set.
    #[serde(default)]
    pub check_distance_between_points: bool,
    #[serde(default)]
    pub series_filter: SeriesFilter,
}

impl Default for TrackerManipulatorConfig {
    fn default() -> Self {
        Self {
            snap: false,
            points_only: false,
            lock_to_initial_series: default_lock_to_initial_series(),
            fires_distance: default_fires_distance(),
            check_distance_between_points: false,
            series_filter: SeriesFilter::Any,
        }
    }
}

impl TrackerManipulatorConfig {
    #[must_use]
    pub fn with_snap(mut self, snap: bool) -> Self {
        self.snap = snap;
        self
    }

    #[must_use]
    pub fn with_points_only(mut self, points_only: bool) -> Self {
        self.points_only = points_only;
        self
    }

    #[must_use]
    pub fn with_lock_to_initial_series(mut self, lock: bool) -> Self {
        self.lock_to_initial_series = lock;
        self
    }

    #[must_use]
    pub fn with_fires_distance(mut self, fires_distance: f64) -> Self {
        self.fires_distance = fires_distance;
        self
    }

    #[must_use]
    pub fn with_check_distance_between_points(mut self, check: bool) -> Self {
        self.check_distance_between_points = check;
        self
    }

    #[must_use]
    pub fn with_series_filter(mut self, filter: SeriesFilter) -> Self {
        self.series_filter = filter;
        self
    }

    /// `fires_distance` must be `>= 0`; `+∞` selects the closest series
    /// regardless of distance.
    pub fn validate(self) -> TrackerResult<Self> {
        if self.fires_distance.is_nan() || self.fires_distance < 0.0 {
            return Err(TrackerError::InvalidData(
                "tracker fires_distance must be >= 0 and not NaN".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn to_json_pretty(self) -> TrackerResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            TrackerError::InvalidData(format!("failed to serialize tracker config: {e}"))
        })
    }

    /// Parses and validates.
    pub fn from_json_str(input: &str) -> TrackerResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| TrackerError::InvalidData(format!("failed to parse tracker config: {e}")))?;
        config.validate()
    }
}

fn default_lock_to_initial_series() -> bool {
    true
}

fn default_fires_distance() -> f64 {
    200.0
}

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{format_decimal, unix_seconds_to_datetime};
use crate::core::{DataPoint, LinearScale, PlotRect, ScreenPoint};
use crate::error::{TrackerError, TrackerResult};

pub const DEFAULT_X_AXIS_TITLE: &str = "X";
pub const DEFAULT_Y_AXIS_TITLE: &str = "Y";

/// How an axis renders a data value inside tracker labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisValueFormat {
    /// Fixed maximum number of fractional digits; trailing zeros are dropped.
    Decimal { precision: u32 },
    /// Value is unix seconds, rendered in UTC with a strftime pattern.
    UnixTime { pattern: String },
}

impl Default for AxisValueFormat {
    fn default() -> Self {
        Self::Decimal { precision: 4 }
    }
}

impl AxisValueFormat {
    pub fn unix_time(pattern: impl Into<String>) -> TrackerResult<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(TrackerError::InvalidData(format!(
                "invalid time pattern `{pattern}`"
            )));
        }
        Ok(Self::UnixTime { pattern })
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Decimal { precision } => format_decimal(value, *precision),
            Self::UnixTime { pattern } => {
                let Some(time) = unix_seconds_to_datetime(value) else {
                    return format_decimal(value, 3);
                };
                let mut text = String::new();
                if write!(text, "{}", time.format(pattern)).is_err() {
                    return format_decimal(value, 3);
                }
                text
            }
        }
    }
}

/// One data axis: a title, a linear data↔pixel mapping and a value format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    title: Option<String>,
    scale: LinearScale,
    value_format: AxisValueFormat,
}

impl Axis {
    #[must_use]
    pub fn new(scale: LinearScale) -> Self {
        Self {
            title: None,
            scale,
            value_format: AxisValueFormat::default(),
        }
    }

    /// Maps `[domain_start, domain_end]` onto the plot area's left→right span.
    pub fn horizontal(domain_start: f64, domain_end: f64, plot_area: PlotRect) -> TrackerResult<Self> {
        let scale = LinearScale::new(domain_start, domain_end, plot_area.left, plot_area.right())?;
        Ok(Self::new(scale))
    }

    /// Maps `[domain_min, domain_max]` onto the plot area's bottom→top span.
    pub fn vertical(domain_min: f64, domain_max: f64, plot_area: PlotRect) -> TrackerResult<Self> {
        let scale = LinearScale::new(domain_min, domain_max, plot_area.bottom(), plot_area.top)?;
        Ok(Self::new(scale))
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_value_format(mut self, value_format: AxisValueFormat) -> Self {
        self.value_format = value_format;
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn scale(&self) -> LinearScale {
        self.scale
    }

    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        self.value_format.format(value)
    }

    pub fn transform(&self, value: f64) -> TrackerResult<f64> {
        self.scale.domain_to_pixel(value)
    }

    pub fn inverse_transform(&self, pixel: f64) -> TrackerResult<f64> {
        self.scale.pixel_to_domain(pixel)
    }
}

/// X/Y axis pair a series is plotted against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesAxes {
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl SeriesAxes {
    #[must_use]
    pub fn new(x_axis: Axis, y_axis: Axis) -> Self {
        Self { x_axis, y_axis }
    }

    /// Axes spanning `plot_area` for the given data ranges.
    pub fn for_plot_area(
        plot_area: PlotRect,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> TrackerResult<Self> {
        Ok(Self {
            x_axis: Axis::horizontal(x_range.0, x_range.1, plot_area)?,
            y_axis: Axis::vertical(y_range.0, y_range.1, plot_area)?,
        })
    }

    pub fn transform(&self, point: DataPoint) -> TrackerResult<ScreenPoint> {
        Ok(ScreenPoint::new(
            self.x_axis.transform(point.x)?,
            self.y_axis.transform(point.y)?,
        ))
    }

    pub fn inverse_transform(&self, point: ScreenPoint) -> TrackerResult<DataPoint> {
        Ok(DataPoint::new(
            self.x_axis.inverse_transform(point.x)?,
            self.y_axis.inverse_transform(point.y)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, AxisValueFormat, SeriesAxes};
    use crate::core::{DataPoint, PlotRect, ScreenPoint};

    #[test]
    fn vertical_axis_grows_upwards() {
        let area = PlotRect::new(10.0, 20.0, 400.0, 200.0).expect("area");
        let axes = SeriesAxes::for_plot_area(area, (0.0, 4.0), (0.0, 1.0)).expect("axes");

        let origin = axes.transform(DataPoint::new(0.0, 0.0)).expect("origin");
        assert_eq!(origin, ScreenPoint::new(10.0, 220.0));

        let corner = axes.transform(DataPoint::new(4.0, 1.0)).expect("corner");
        assert_eq!(corner, ScreenPoint::new(410.0, 20.0));

        let back = axes.inverse_transform(corner).expect("inverse");
        assert!((back.x - 4.0).abs() <= 1e-12);
        assert!((back.y - 1.0).abs() <= 1e-12);
    }

    #[test]
    fn nan_values_do_not_transform() {
        let area = PlotRect::new(0.0, 0.0, 100.0, 100.0).expect("area");
        let axis = Axis::horizontal(0.0, 1.0, area).expect("axis");
        assert!(axis.transform(f64::NAN).is_err());
    }

    #[test]
    fn unix_time_format_rejects_bad_patterns_and_renders_utc() {
        assert!(AxisValueFormat::unix_time("%Q").is_err());
        let format = AxisValueFormat::unix_time("%Y-%m-%d %H:%M").expect("pattern");
        assert_eq!(format.format(0.0), "1970-01-01 00:00");
    }
}

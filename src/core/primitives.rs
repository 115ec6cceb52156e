use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::error::{TrackerError, TrackerResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> TrackerResult<f64> {
    value.to_f64().ok_or_else(|| {
        TrackerError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`datetime_to_unix_seconds`]; `None` for non-finite or
/// out-of-range inputs.
#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis > i64::MAX as f64 || millis < i64::MIN as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}

/// Rounds half away from zero to `precision` fractional digits.
///
/// Goes through `Decimal` so labels such as `0.6` do not render as
/// `0.6000000000000001`.
#[must_use]
pub fn format_decimal(value: f64, precision: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    match Decimal::from_f64(value) {
        Some(decimal) => decimal
            .round_dp_with_strategy(
                precision,
                rust_decimal::RoundingStrategy::MidpointAwayFromZero,
            )
            .normalize()
            .to_string(),
        None => format!("{value:.prec$}", prec = precision as usize),
    }
}

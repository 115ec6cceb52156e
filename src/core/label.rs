//! Tracker label templates.
//!
//! Templates use positional placeholders:
//!
//! | placeholder | value |
//! | --- | --- |
//! | `{0}` | series title |
//! | `{1}` | X axis title (`"X"` when unset) |
//! | `{2}` | X value, formatted by the X axis |
//! | `{3}` | Y axis title (`"Y"` when unset) |
//! | `{4}` | Y value, formatted by the Y axis |
//!
//! `{2:.N}` and `{4:.N}` override the axis format with `N` fractional digits.
//! Any other name (`{Volume}`) is looked up as a field of the hit's data item.
//! `{{` and `}}` produce literal braces; unknown placeholders are kept as-is.

use serde_json::Value;

use crate::core::primitives::format_decimal;

pub const DEFAULT_TRACKER_FORMAT: &str = "{0}\n{1}: {2}\n{3}: {4}";

/// Values available to a tracker label template.
#[derive(Debug, Clone, Copy)]
pub struct TrackerLabelArgs<'a> {
    pub series_title: &'a str,
    pub x_title: &'a str,
    pub x_value: f64,
    pub x_text: &'a str,
    pub y_title: &'a str,
    pub y_value: f64,
    pub y_text: &'a str,
    pub item: Option<&'a Value>,
}

#[must_use]
pub fn format_tracker_label(template: &str, args: &TrackerLabelArgs<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(position) = rest.find(['{', '}']) {
        out.push_str(&rest[..position]);
        let tail = &rest[position..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let token = &tail[1..close];
        match resolve_placeholder(token, args) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

fn resolve_placeholder(token: &str, args: &TrackerLabelArgs<'_>) -> Option<String> {
    let (key, format_spec) = match token.split_once(':') {
        Some((key, format_spec)) => (key.trim(), Some(format_spec.trim())),
        None => (token.trim(), None),
    };
    let precision = format_spec
        .and_then(|format_spec| format_spec.strip_prefix('.'))
        .and_then(|digits| digits.parse::<u32>().ok());

    match key {
        "0" => Some(args.series_title.to_owned()),
        "1" => Some(args.x_title.to_owned()),
        "2" => Some(match precision {
            Some(precision) => format_decimal(args.x_value, precision),
            None => args.x_text.to_owned(),
        }),
        "3" => Some(args.y_title.to_owned()),
        "4" => Some(match precision {
            Some(precision) => format_decimal(args.y_value, precision),
            None => args.y_text.to_owned(),
        }),
        field => item_field(args.item?, field, precision),
    }
}

fn item_field(item: &Value, field: &str, precision: Option<u32>) -> Option<String> {
    let value = item.as_object()?.get(field)?;
    Some(match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => match (precision, number.as_f64()) {
            (Some(precision), Some(number)) => format_decimal(number, precision),
            _ => number.to_string(),
        },
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

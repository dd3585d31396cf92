//! Forecast series shown by the dashboard.
//!
//! The client hands the payload over as opaque JSON; this module picks out
//! the fields the panels need. The backend serializes numbers as strings
//! ("20" rather than 20) and timestamps without a zone, so decoding is
//! deliberately lenient: entries that do not carry a usable timestamp and
//! temperature are skipped, never turned into errors.

use chrono::NaiveDateTime;
use serde_json::Value;

/// One decoded forecast sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    pub humidity: Option<f64>,
    pub condition: Option<String>,
}

impl ForecastPoint {
    pub fn epoch_seconds(&self) -> i64 {
        self.timestamp.and_utc().timestamp()
    }
}

/// Chart window, cycled with the `t` key. `ThreeDays` matches the backend's
/// prediction horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    Day,
    ThreeDays,
    Week,
}

impl TimeRange {
    pub fn hours(self) -> i64 {
        match self {
            TimeRange::Day => 24,
            TimeRange::ThreeDays => 72,
            TimeRange::Week => 168,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Day => "24h",
            TimeRange::ThreeDays => "72h",
            TimeRange::Week => "7d",
        }
    }

    pub fn next(self) -> Self {
        match self {
            TimeRange::Day => TimeRange::ThreeDays,
            TimeRange::ThreeDays => TimeRange::Week,
            TimeRange::Week => TimeRange::Day,
        }
    }
}

/// Decode an opaque forecast payload into points; non-array bodies and
/// undecodable elements yield fewer points, not an error.
pub fn decode_points(body: &Value) -> Vec<ForecastPoint> {
    let items = match body.as_array() {
        Some(items) => items,
        None => return Vec::new(),
    };
    items.iter().filter_map(point_from_value).collect()
}

/// Prefix of the series within `range` hours of its first point. The series
/// arrives in chronological order, so a window anchored at the first point
/// is a prefix; anchoring there rather than at wall clock keeps rendering
/// deterministic.
pub fn clip_to_range(points: &[ForecastPoint], range: TimeRange) -> &[ForecastPoint] {
    let first = match points.first() {
        Some(first) => first,
        None => return points,
    };
    let cutoff = first.timestamp + chrono::Duration::hours(range.hours());
    let end = points
        .iter()
        .position(|p| p.timestamp > cutoff)
        .unwrap_or(points.len());
    &points[..end]
}

fn point_from_value(item: &Value) -> Option<ForecastPoint> {
    let timestamp = parse_timestamp(item.get("timestamp")?.as_str()?)?;
    let temperature = number(item.get("temperature")?)?;
    Some(ForecastPoint {
        timestamp,
        temperature,
        humidity: item.get("humidity").and_then(number),
        condition: item
            .get("condition")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

// RFC 3339 first (offset discarded), then the backend's zone-less form.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

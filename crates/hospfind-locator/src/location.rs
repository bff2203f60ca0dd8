//! Coordinate extraction from free-text location fields.
//!
//! The dataset stores an address blob whose last line is usually a
//! parenthesized `(lat, lng)` pair, e.g.
//! `"1700 S TAMIAMI TRL\nSARASOTA, FL\n(27.3233, -82.5246)"`.

use std::sync::LazyLock;

use regex::Regex;

static COORDINATE_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([-+]?[0-9]+\.[0-9]+),\s*([-+]?[0-9]+\.[0-9]+)\)")
        .expect("valid coordinate regex")
});

/// Cheap pre-filter: rows without a literal `(` cannot carry coordinates.
#[must_use]
pub fn has_coordinate_marker(text: &str) -> bool {
    text.contains('(')
}

/// Extracts the first parenthesized `(latitude, longitude)` pair from `text`.
///
/// Both numbers must carry a decimal point. Out-of-range magnitudes
/// (e.g. latitude 123.0) are returned unchanged.
#[must_use]
pub fn parse_coordinates(text: &str) -> Option<(f64, f64)> {
    let caps = COORDINATE_PAIR_RE.captures(text)?;
    let lat = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let lng = caps.get(2)?.as_str().parse::<f64>().ok()?;
    Some((lat, lng))
}

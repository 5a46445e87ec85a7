//! Fixed-point coordinate scaling
//!
//! The two file formats store coordinates as scaled integers: outline files
//! at 1e-5 board units per count, drill files at 1e-4. All internal
//! computation uses floating-point board units; conversion happens exactly
//! once, at the I/O boundary.

/// Board units per outline-file integer count.
pub const OUTLINE_SCALE: f64 = 1e-5;

/// Board units per drill-file integer count.
pub const DRILL_SCALE: f64 = 1e-4;

/// Decode an outline-file integer coordinate into board units.
pub fn outline_units(raw: i64) -> f64 {
    raw as f64 * OUTLINE_SCALE
}

/// Decode a drill-file integer coordinate into board units.
pub fn drill_units(raw: i64) -> f64 {
    raw as f64 * DRILL_SCALE
}

/// Encode a board-unit coordinate as a drill-file integer count, rounded
/// to the nearest count.
pub fn drill_counts(value: f64) -> i64 {
    (value / DRILL_SCALE).round() as i64
}

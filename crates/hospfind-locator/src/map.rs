//! Marker payload for map rendering.

use hospfind_core::{Candidate, MapPoint, UserQuery};

pub const HOSPITAL_MARKER_COLOR: &str = "#FF0000";
pub const USER_MARKER_COLOR: &str = "#0000FF";
pub const MARKER_SIZE: u32 = 100;

/// Hospital markers (red) in rank order, followed by the user marker (blue).
#[must_use]
pub fn map_points(query: &UserQuery, top: &[Candidate]) -> Vec<MapPoint> {
    top.iter()
        .map(|c| MapPoint {
            latitude: c.hospital.latitude,
            longitude: c.hospital.longitude,
            color: HOSPITAL_MARKER_COLOR.to_string(),
            size: MARKER_SIZE,
        })
        .chain(std::iter::once(MapPoint {
            latitude: query.latitude,
            longitude: query.longitude,
            color: USER_MARKER_COLOR.to_string(),
            size: MARKER_SIZE,
        }))
        .collect()
}

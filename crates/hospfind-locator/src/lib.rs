//! Hospital recommendation pipeline.
//!
//! Reads the hospital CSV, extracts coordinates from the free-text location
//! column, triages complaint text into an urgency tier, and ranks nearby
//! hospitals for that tier.

pub mod cache;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod location;
pub mod map;
pub mod normalize;
pub mod rank;
pub mod search;
pub mod triage;
pub mod types;

pub use cache::{DatasetCache, SharedRecords};
pub use error::LocatorError;
pub use geo::{distance_km, GeoPoint};
pub use location::parse_coordinates;
pub use map::map_points;
pub use normalize::{load_and_normalize, normalize_rows, read_dataset};
pub use rank::select_and_rank;
pub use search::search;
pub use triage::{classify_urgency, validate_complaint};
pub use types::RawHospitalRow;

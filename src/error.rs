use thiserror::Error;

/// Validation errors surfaced to the caller before any compute stage runs.
///
/// The engine refuses to compute on malformed input rather than produce
/// nonsensical figures. Everything else (rainfall source outages, degenerate
/// geometry) degrades to documented defaults or sentinels instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssessmentError {
    #[error("roof area must be positive, got {value} m²")]
    InvalidRoofArea { value: f64 },

    #[error("open space must not be negative, got {value} m²")]
    InvalidOpenSpace { value: f64 },

    #[error("coordinates out of range: lat {lat}, lon {lon}")]
    CoordinatesOutOfRange { lat: f64, lon: f64 },

    #[error("malformed coordinate pair: '{text}'")]
    MalformedCoordinates { text: String },

    #[error("malformed rainfall record: {reason}")]
    InvalidRainfall { reason: String },
}

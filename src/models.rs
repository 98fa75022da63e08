use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

/// Resolved geographic position of the assessed site.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Build a coordinate pair, rejecting out-of-range or non-finite values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, AssessmentError> {
        if !lat.is_finite()
            || !lon.is_finite()
            || !(-90.0..=90.0).contains(&lat)
            || !(-180.0..=180.0).contains(&lon)
        {
            return Err(AssessmentError::CoordinatesOutOfRange { lat, lon });
        }
        Ok(Coordinates { lat, lon })
    }

    /// Parse the free-text `"lat, lon"` form produced by the capture layer
    /// (e.g. `"12.9716, 77.5946"`).
    pub fn parse(text: &str) -> Result<Self, AssessmentError> {
        let malformed = || AssessmentError::MalformedCoordinates {
            text: text.to_string(),
        };

        let mut parts = text.splitn(2, ',');
        let lat = parts
            .next()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .ok_or_else(malformed)?;
        let lon = parts
            .next()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .ok_or_else(malformed)?;

        Coordinates::new(lat, lon)
    }
}

/// Dominant soil type of the open ground at the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    Rocky,
    Mixed,
}

impl SoilType {
    /// Resolve a free-text soil label. Unrecognized labels fall back to
    /// `Mixed`, the canonical default applied by every lookup table.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "clay" => SoilType::Clay,
            "sandy" => SoilType::Sandy,
            "loamy" => SoilType::Loamy,
            "rocky" => SoilType::Rocky,
            _ => SoilType::Mixed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Sandy => "sandy",
            SoilType::Loamy => "loamy",
            SoilType::Rocky => "rocky",
            SoilType::Mixed => "mixed",
        }
    }
}

/// Site geometry and ground conditions supplied by the assessment form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Roof catchment area in square meters. Must be positive.
    pub roof_area_m2: f64,
    /// Open ground available for recharge structures, in square meters.
    pub open_space_m2: f64,
    pub soil_type: SoilType,
    /// Human-readable location (address or "lat, lon" fallback).
    pub location_label: String,
    pub coordinates: Option<Coordinates>,
}

/// Rainfall for one calendar month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRainfall {
    pub month: String,
    pub mm: f64,
}

/// Annual rainfall observations for the site's region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RainfallRecord {
    pub current_year_mm: f64,
    pub previous_year_mm: f64,
    pub average_mm: f64,
    /// Calendar-ordered monthly split, nominally 12 entries.
    pub monthly_distribution: Vec<MonthlyRainfall>,
    pub rainy_days: u32,
    pub peak_month: Option<String>,
    pub region: String,
}

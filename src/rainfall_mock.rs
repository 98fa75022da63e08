//! Fixed-dataset rainfall source, the stand-in oracle for the live climate
//! service.

use crate::models::{Coordinates, RainfallRecord};
use crate::rainfall::{month, RainfallError, RainfallSource};

/// In-memory rainfall source returning a canned record, with optional
/// failure injection for exercising the degrade path.
#[derive(Clone, Debug)]
pub struct MockRainfallSource {
    pub record: RainfallRecord,
    pub fail: Option<RainfallError>,
}

impl MockRainfallSource {
    /// Source carrying the monsoon-pattern record for Central India.
    pub fn with_monsoon_data() -> Self {
        Self {
            record: monsoon_record(),
            fail: None,
        }
    }

    /// Source whose every fetch fails with `err`.
    pub fn failing(err: RainfallError) -> Self {
        Self {
            record: monsoon_record(),
            fail: Some(err),
        }
    }
}

impl RainfallSource for MockRainfallSource {
    fn fetch(&self, _coords: &Coordinates) -> Result<RainfallRecord, RainfallError> {
        match &self.fail {
            Some(err) => Err(err.clone()),
            None => Ok(self.record.clone()),
        }
    }
}

/// Monsoon-pattern annual record (Central India).
pub fn monsoon_record() -> RainfallRecord {
    RainfallRecord {
        current_year_mm: 1250.0,
        previous_year_mm: 1180.0,
        average_mm: 1200.0,
        monthly_distribution: vec![
            month("Jan", 15.0),
            month("Feb", 20.0),
            month("Mar", 25.0),
            month("Apr", 45.0),
            month("May", 85.0),
            month("Jun", 180.0),
            month("Jul", 220.0),
            month("Aug", 210.0),
            month("Sep", 160.0),
            month("Oct", 95.0),
            month("Nov", 35.0),
            month("Dec", 20.0),
        ],
        rainy_days: 65,
        peak_month: Some("July".to_string()),
        region: "Central India".to_string(),
    }
}

//! Rainfall data boundary.
//!
//! The engine consumes a [`RainfallRecord`] supplied by a [`RainfallSource`].
//! Conceptually the source is an HTTP GET against a climate data service
//! keyed by coordinates; this crate owns only the contract and the
//! normalization of the service's JSON payload, not the transport.
//!
//! Resolution is degrade-not-fail: one fetch attempt, no retries, and any
//! failure (including absent coordinates) resolves to the fixed
//! national-average record instead of an error. The degradation is
//! observable through [`ResolvedRainfall::used_default`].

use serde::Deserialize;
use tracing::warn;

use crate::models::{Coordinates, MonthlyRainfall, RainfallRecord};

/// Failure modes of a rainfall source. Never surfaced to callers of the
/// engine — absorbed by [`resolve_rainfall`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RainfallError {
    Unreachable,
    Timeout,
    MalformedResponse,
    NoCoordinates,
}

/// Supplier of rainfall observations for a coordinate pair.
pub trait RainfallSource {
    fn fetch(&self, coords: &Coordinates) -> Result<RainfallRecord, RainfallError>;
}

/// Outcome of rainfall resolution: always a usable record, plus whether the
/// default had to stand in for live data.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRainfall {
    pub record: RainfallRecord,
    pub used_default: bool,
}

/// Resolve rainfall for the site: a single fetch attempt against `source`,
/// falling back to [`default_record`] when coordinates are absent or the
/// source fails.
pub fn resolve_rainfall<S: RainfallSource>(
    source: &S,
    coords: Option<&Coordinates>,
) -> ResolvedRainfall {
    let Some(coords) = coords else {
        warn!("no coordinates for rainfall lookup, using national average record");
        return ResolvedRainfall {
            record: default_record(),
            used_default: true,
        };
    };

    match source.fetch(coords) {
        Ok(record) => ResolvedRainfall {
            record,
            used_default: false,
        },
        Err(e) => {
            warn!("rainfall source unavailable: {e:?}, using national average record");
            ResolvedRainfall {
                record: default_record(),
                used_default: true,
            }
        }
    }
}

/// Fixed national-average record used when no live data is available.
pub fn default_record() -> RainfallRecord {
    RainfallRecord {
        current_year_mm: 1200.0,
        previous_year_mm: 1150.0,
        average_mm: 1180.0,
        monthly_distribution: vec![
            month("Jun", 200.0),
            month("Jul", 250.0),
            month("Aug", 230.0),
            month("Sep", 150.0),
        ],
        rainy_days: 60,
        peak_month: None,
        region: "India".to_string(),
    }
}

pub(crate) fn month(name: &str, mm: f64) -> MonthlyRainfall {
    MonthlyRainfall {
        month: name.to_string(),
        mm,
    }
}

/// One month of the climate service response.
#[derive(Debug, Deserialize)]
struct ServiceMonth {
    month: String,
    rainfall_mm: f64,
}

/// Shape of the climate service's JSON document. Only `annual_rainfall_mm`
/// is required; everything else degrades to sensible defaults.
#[derive(Debug, Deserialize)]
struct ServicePayload {
    annual_rainfall_mm: f64,
    previous_year_mm: Option<f64>,
    normal_annual_mm: Option<f64>,
    #[serde(default)]
    monthly: Vec<ServiceMonth>,
    rainy_days: Option<u32>,
    region: Option<String>,
}

/// Normalize a climate service JSON document into a [`RainfallRecord`].
///
/// The peak month is derived from the monthly split rather than trusted
/// from the service. Non-finite or negative annual totals are rejected.
pub fn normalize_response(body: &str) -> Result<RainfallRecord, RainfallError> {
    let payload: ServicePayload =
        serde_json::from_str(body).map_err(|_| RainfallError::MalformedResponse)?;

    let annual = payload.annual_rainfall_mm;
    if !annual.is_finite() || annual < 0.0 {
        return Err(RainfallError::MalformedResponse);
    }

    let peak_month = payload
        .monthly
        .iter()
        .max_by(|a, b| a.rainfall_mm.total_cmp(&b.rainfall_mm))
        .map(|m| m.month.clone());

    Ok(RainfallRecord {
        current_year_mm: annual,
        previous_year_mm: payload.previous_year_mm.unwrap_or(annual),
        average_mm: payload.normal_annual_mm.unwrap_or(annual),
        monthly_distribution: payload
            .monthly
            .into_iter()
            .map(|m| MonthlyRainfall {
                month: m.month,
                mm: m.rainfall_mm,
            })
            .collect(),
        rainy_days: payload.rainy_days.unwrap_or(0),
        peak_month,
        region: payload.region.unwrap_or_else(|| "Unknown".to_string()),
    })
}

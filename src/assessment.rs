//! Input validation and pipeline orchestration.
//!
//! [`run_assessment`] is the engine's single entry point: validate the site
//! profile, resolve rainfall, then run the compute stages in order, each
//! consuming only the outputs of earlier ones. The whole chain is
//! deterministic — identical inputs produce identical results — and holds
//! no state between invocations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cost::CostEstimate;
use crate::error::AssessmentError;
use crate::groundwater::GroundwaterImpact;
use crate::models::{Coordinates, RainfallRecord, SiteProfile};
use crate::rainfall::{resolve_rainfall, RainfallSource};
use crate::soil::SoilRecommendation;
use crate::storage::StorageEstimate;
use crate::system::SystemRecommendation;

/// Complete assessment for one site. Owned by the caller; the engine keeps
/// nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub rainfall: RainfallRecord,
    pub storage: StorageEstimate,
    pub soil: SoilRecommendation,
    pub cost: CostEstimate,
    pub system: SystemRecommendation,
    pub groundwater: GroundwaterImpact,
    /// True when the rainfall source was unavailable (or the site had no
    /// coordinates) and the national-average record stood in. The result
    /// is still fully valid, with reduced confidence.
    pub used_default_rainfall: bool,
}

/// Reject malformed site geometry before any stage runs.
pub fn validate_site(site: &SiteProfile) -> Result<(), AssessmentError> {
    if !site.roof_area_m2.is_finite() || site.roof_area_m2 <= 0.0 {
        return Err(AssessmentError::InvalidRoofArea {
            value: site.roof_area_m2,
        });
    }
    if !site.open_space_m2.is_finite() || site.open_space_m2 < 0.0 {
        return Err(AssessmentError::InvalidOpenSpace {
            value: site.open_space_m2,
        });
    }
    // Coordinates may be constructed directly as a struct literal, so the
    // range check is repeated here.
    if let Some(c) = site.coordinates {
        Coordinates::new(c.lat, c.lon)?;
    }
    Ok(())
}

/// Reject rainfall records with unusable annual figures.
pub fn validate_rainfall(record: &RainfallRecord) -> Result<(), AssessmentError> {
    if !record.current_year_mm.is_finite() {
        return Err(AssessmentError::InvalidRainfall {
            reason: format!("non-finite annual total {}", record.current_year_mm),
        });
    }
    if record.current_year_mm < 0.0 {
        return Err(AssessmentError::InvalidRainfall {
            reason: format!("negative annual total {} mm", record.current_year_mm),
        });
    }
    Ok(())
}

/// Run the full assessment pipeline for a site.
///
/// Rainfall resolution degrades to the national-average record rather
/// than failing; every other stage is a pure function of earlier outputs.
/// The only error path is input validation.
pub fn run_assessment<S: RainfallSource>(
    site: &SiteProfile,
    source: &S,
) -> Result<AssessmentResult, AssessmentError> {
    validate_site(site)?;

    let resolved = resolve_rainfall(source, site.coordinates.as_ref());
    validate_rainfall(&resolved.record)?;

    debug!(
        "assessing '{}': {} mm annual rainfall ({}), soil {}",
        site.location_label,
        resolved.record.current_year_mm,
        resolved.record.region,
        site.soil_type.label(),
    );

    let storage = StorageEstimate::compute(site, &resolved.record);
    let soil = SoilRecommendation::compute(site.soil_type, storage.recommended_storage_l);
    let cost = CostEstimate::compute(site, &storage);
    let system = SystemRecommendation::compute(&storage);
    let groundwater = GroundwaterImpact::compute(site, &storage);

    Ok(AssessmentResult {
        rainfall: resolved.record,
        storage,
        soil,
        cost,
        system,
        groundwater,
        used_default_rainfall: resolved.used_default,
    })
}

//! Harvestable-water and storage-capacity figures.
//!
//! Pure function of site geometry and the annual rainfall total. Volumes
//! are in liters: 1 mm of rain over 1 m² of catchment is 1 L, scaled by
//! the surface's runoff coefficient.

use serde::{Deserialize, Serialize};

use crate::models::{RainfallRecord, SiteProfile, SoilType};

/// Runoff coefficient for a concrete/tile roof.
pub const ROOF_RUNOFF_COEFF: f64 = 0.85;

/// Fraction of the harvestable total worth storing.
const STORAGE_FRACTION: f64 = 0.6;

/// Hard cap on recommended storage capacity (liters).
const MAX_STORAGE_L: f64 = 50_000.0;

/// Fraction of the harvestable total realistically saved.
const SAVING_FRACTION: f64 = 0.7;

/// Household water demand used for the coverage figure: liters per person
/// per day, for a household of four.
const DAILY_CONSUMPTION_L: f64 = 150.0;
const HOUSEHOLD_SIZE: f64 = 4.0;

/// Runoff coefficient of open ground, by soil type.
pub fn open_space_runoff_coeff(soil: SoilType) -> f64 {
    match soil {
        SoilType::Clay => 0.65,
        SoilType::Sandy => 0.35,
        SoilType::Loamy => 0.45,
        SoilType::Rocky => 0.75,
        SoilType::Mixed => 0.50,
    }
}

/// Harvest and storage figures for a site. Volume fields are rounded to
/// the nearest liter; the coefficients are carried unrounded for the
/// efficiency computation downstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageEstimate {
    /// Annual harvest off the roof (liters).
    pub roof_harvest_l: f64,
    /// Annual harvest off open ground (liters).
    pub open_space_harvest_l: f64,
    /// Total annual harvestable volume (liters).
    pub total_harvestable_l: f64,
    /// Recommended storage capacity, capped at 50 000 L.
    pub recommended_storage_l: f64,
    /// Days the recommended storage covers household demand.
    pub days_covered: u32,
    /// Volume realistically saved per year (liters).
    pub water_saving_potential_l: f64,
    pub roof_runoff_coeff: f64,
    pub open_space_runoff_coeff: f64,
}

impl StorageEstimate {
    /// Compute harvest and storage figures from site geometry and the
    /// current-year rainfall total. Intermediate math is full precision;
    /// rounding happens once, on the output fields.
    pub fn compute(site: &SiteProfile, rainfall: &RainfallRecord) -> Self {
        let annual_mm = rainfall.current_year_mm;
        let open_coeff = open_space_runoff_coeff(site.soil_type);

        let roof_harvest = site.roof_area_m2 * annual_mm * ROOF_RUNOFF_COEFF;
        let open_space_harvest = site.open_space_m2 * annual_mm * open_coeff;
        let total = roof_harvest + open_space_harvest;

        let recommended = (total * STORAGE_FRACTION).min(MAX_STORAGE_L);
        let days_covered = recommended / (DAILY_CONSUMPTION_L * HOUSEHOLD_SIZE);

        StorageEstimate {
            roof_harvest_l: roof_harvest.round(),
            open_space_harvest_l: open_space_harvest.round(),
            total_harvestable_l: total.round(),
            recommended_storage_l: recommended.round(),
            days_covered: days_covered.round() as u32,
            water_saving_potential_l: (total * SAVING_FRACTION).round(),
            roof_runoff_coeff: ROOF_RUNOFF_COEFF,
            open_space_runoff_coeff: open_coeff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SoilType;

    fn site(roof_m2: f64, open_m2: f64, soil: SoilType) -> SiteProfile {
        SiteProfile {
            roof_area_m2: roof_m2,
            open_space_m2: open_m2,
            soil_type: soil,
            location_label: "Test site".to_string(),
            coordinates: None,
        }
    }

    fn rainfall(current_year_mm: f64) -> RainfallRecord {
        RainfallRecord {
            current_year_mm,
            previous_year_mm: current_year_mm,
            average_mm: current_year_mm,
            monthly_distribution: Vec::new(),
            rainy_days: 60,
            peak_month: None,
            region: "Test".to_string(),
        }
    }

    #[test]
    fn test_loamy_site_capped_at_max_storage() {
        let estimate = StorageEstimate::compute(&site(100.0, 50.0, SoilType::Loamy), &rainfall(1250.0));

        assert_eq!(estimate.roof_harvest_l, 106_250.0);
        assert_eq!(estimate.open_space_harvest_l, 28_125.0);
        assert_eq!(estimate.total_harvestable_l, 134_375.0);
        // 0.6 × 134375 = 80625, capped
        assert_eq!(estimate.recommended_storage_l, 50_000.0);
        assert_eq!(estimate.days_covered, 83);
        assert_eq!(estimate.water_saving_potential_l, 94_063.0);
        assert_eq!(estimate.roof_runoff_coeff, 0.85);
        assert_eq!(estimate.open_space_runoff_coeff, 0.45);
    }

    #[test]
    fn test_sandy_open_space_coefficient() {
        let estimate = StorageEstimate::compute(&site(100.0, 50.0, SoilType::Sandy), &rainfall(1250.0));

        assert_eq!(estimate.open_space_runoff_coeff, 0.35);
        assert_eq!(estimate.open_space_harvest_l, 21_875.0);
        assert_eq!(estimate.total_harvestable_l, 128_125.0);
    }

    #[test]
    fn test_small_rocky_site_below_cap() {
        let estimate = StorageEstimate::compute(&site(10.0, 0.0, SoilType::Rocky), &rainfall(500.0));

        assert_eq!(estimate.total_harvestable_l, 4_250.0);
        assert_eq!(estimate.recommended_storage_l, 2_550.0);
        assert_eq!(estimate.days_covered, 4);
    }

    #[test]
    fn test_recommended_storage_invariants() {
        for (roof, open, soil, mm) in [
            (100.0, 50.0, SoilType::Loamy, 1250.0),
            (10.0, 0.0, SoilType::Rocky, 500.0),
            (2500.0, 1200.0, SoilType::Sandy, 2200.0),
            (35.5, 12.25, SoilType::Clay, 845.5),
        ] {
            let estimate = StorageEstimate::compute(&site(roof, open, soil), &rainfall(mm));
            assert!(estimate.recommended_storage_l <= 50_000.0);
            // Rounding of the 0.6 fraction stays within half a liter
            assert!(estimate.recommended_storage_l <= 0.6 * estimate.total_harvestable_l + 0.5);
        }
    }

    #[test]
    fn test_saving_tracks_harvest_fraction() {
        use approx::assert_relative_eq;

        // Rounding at the boundary keeps the 0.7 ratio within a liter
        let estimate = StorageEstimate::compute(&site(37.3, 11.8, SoilType::Mixed), &rainfall(912.4));
        assert_relative_eq!(
            estimate.water_saving_potential_l,
            0.7 * estimate.total_harvestable_l,
            epsilon = 1.0
        );
    }

    #[test]
    fn test_zero_rainfall_zeroes_all_volumes() {
        let estimate = StorageEstimate::compute(&site(100.0, 50.0, SoilType::Loamy), &rainfall(0.0));

        assert_eq!(estimate.total_harvestable_l, 0.0);
        assert_eq!(estimate.recommended_storage_l, 0.0);
        assert_eq!(estimate.days_covered, 0);
        assert_eq!(estimate.water_saving_potential_l, 0.0);
    }

    #[test]
    fn test_all_soil_coefficients() {
        assert_eq!(open_space_runoff_coeff(SoilType::Clay), 0.65);
        assert_eq!(open_space_runoff_coeff(SoilType::Sandy), 0.35);
        assert_eq!(open_space_runoff_coeff(SoilType::Loamy), 0.45);
        assert_eq!(open_space_runoff_coeff(SoilType::Rocky), 0.75);
        assert_eq!(open_space_runoff_coeff(SoilType::Mixed), 0.50);
    }
}

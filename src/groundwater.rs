//! Groundwater recharge and aquifer impact figures.
//!
//! The level-rise estimate treats the site footprint as the recharge area
//! and divides the recharged water column by the aquifer material's
//! specific yield.

use serde::{Deserialize, Serialize};

use crate::models::{SiteProfile, SoilType};
use crate::storage::StorageEstimate;

/// Share of the harvestable total that reaches the aquifer.
const RECHARGE_FRACTION: f64 = 0.4;

/// Fixed environmental benefit summary, independent of the site.
pub const ENVIRONMENTAL_BENEFITS: [&str; 5] = [
    "Reduces urban flooding",
    "Improves local groundwater levels",
    "Reduces soil erosion",
    "Supports local vegetation",
    "Maintains natural water cycle",
];

/// Specific yield of the aquifer material, by soil type.
pub fn specific_yield(soil: SoilType) -> f64 {
    match soil {
        SoilType::Clay => 0.03,
        SoilType::Sandy => 0.25,
        SoilType::Loamy => 0.15,
        SoilType::Rocky => 0.05,
        SoilType::Mixed => 0.12,
    }
}

fn aquifer_type(soil: SoilType) -> &'static str {
    match soil {
        SoilType::Clay => "Confined aquifer",
        SoilType::Sandy => "Unconfined aquifer",
        SoilType::Loamy => "Semi-confined aquifer",
        SoilType::Rocky => "Fractured rock aquifer",
        SoilType::Mixed => "Complex aquifer system",
    }
}

fn quality_improvement(soil: SoilType) -> &'static str {
    match soil {
        SoilType::Clay => "Natural filtration, slower recharge",
        SoilType::Sandy => "Rapid infiltration, minimal filtration",
        SoilType::Loamy => "Good balance of infiltration and filtration",
        SoilType::Rocky => "Variable quality depending on rock type",
        SoilType::Mixed => "Varied quality improvement",
    }
}

/// Recharge volume and aquifer response for the installation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundwaterImpact {
    /// Water reaching the aquifer per year (liters).
    pub annual_recharge_l: f64,
    /// Local water-table rise (meters, 2 decimals). Zero when the site has
    /// no recharge area.
    pub estimated_level_rise_m: f64,
    pub aquifer_type: String,
    pub specific_yield: f64,
    /// Recharged share of the harvestable total, percent. Zero when
    /// nothing is harvestable.
    pub recharge_rate_percent: u8,
    /// Radius of the influence zone around the site (meters).
    pub impact_radius_m: f64,
    pub quality_improvement: String,
    pub environmental_benefits: Vec<String>,
}

impl GroundwaterImpact {
    /// Estimate the aquifer response from the harvest total and the site
    /// footprint.
    pub fn compute(site: &SiteProfile, storage: &StorageEstimate) -> Self {
        let total_l = storage.total_harvestable_l;
        let recharge_l = total_l * RECHARGE_FRACTION;
        let recharge_area_m2 = site.roof_area_m2 + site.open_space_m2;
        let yield_fraction = specific_yield(site.soil_type);

        let level_rise_m = if recharge_area_m2 > 0.0 {
            (recharge_l / 1000.0) / (recharge_area_m2 * yield_fraction)
        } else {
            0.0
        };

        let recharge_rate_percent = if total_l > 0.0 {
            (100.0 * recharge_l / total_l).round() as u8
        } else {
            0
        };

        GroundwaterImpact {
            annual_recharge_l: recharge_l.round(),
            estimated_level_rise_m: (level_rise_m * 100.0).round() / 100.0,
            aquifer_type: aquifer_type(site.soil_type).to_string(),
            specific_yield: yield_fraction,
            recharge_rate_percent,
            impact_radius_m: ((recharge_area_m2 / std::f64::consts::PI).sqrt() * 2.0).round(),
            quality_improvement: quality_improvement(site.soil_type).to_string(),
            environmental_benefits: ENVIRONMENTAL_BENEFITS.iter().map(|b| b.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RainfallRecord;

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

    fn impact_for(site: &SiteProfile, mm: f64) -> GroundwaterImpact {
        let storage = StorageEstimate::compute(site, &rainfall(mm));
        GroundwaterImpact::compute(site, &storage)
    }

    #[test]
    fn test_loamy_site_impact() {
        let site = site(100.0, 50.0, SoilType::Loamy);
        let impact = impact_for(&site, 1250.0);

        // 40% of 134 375 L
        assert_eq!(impact.annual_recharge_l, 53_750.0);
        // 53.75 m³ over 150 m² at yield 0.15
        assert_eq!(impact.estimated_level_rise_m, 2.39);
        assert_eq!(impact.aquifer_type, "Semi-confined aquifer");
        assert_eq!(impact.specific_yield, 0.15);
        assert_eq!(impact.recharge_rate_percent, 40);
        assert_eq!(impact.impact_radius_m, 14.0);
        assert_eq!(
            impact.quality_improvement,
            "Good balance of infiltration and filtration"
        );
        assert_eq!(impact.environmental_benefits.len(), 5);
    }

    #[test]
    fn test_specific_yield_table() {
        assert_eq!(specific_yield(SoilType::Clay), 0.03);
        assert_eq!(specific_yield(SoilType::Sandy), 0.25);
        assert_eq!(specific_yield(SoilType::Loamy), 0.15);
        assert_eq!(specific_yield(SoilType::Rocky), 0.05);
        assert_eq!(specific_yield(SoilType::Mixed), 0.12);
    }

    #[test]
    fn test_clay_slows_recharge_but_raises_level() {
        // Same geometry, lower specific yield: the thin aquifer storage
        // means a larger computed rise
        let clay = impact_for(&site(100.0, 50.0, SoilType::Clay), 1250.0);
        let sandy = impact_for(&site(100.0, 50.0, SoilType::Sandy), 1250.0);
        assert!(clay.estimated_level_rise_m > sandy.estimated_level_rise_m);
        assert_eq!(clay.aquifer_type, "Confined aquifer");
        assert_eq!(sandy.aquifer_type, "Unconfined aquifer");
    }

    #[test]
    fn test_zero_harvest_guards_division() {
        let site = site(100.0, 50.0, SoilType::Mixed);
        let impact = impact_for(&site, 0.0);

        assert_eq!(impact.annual_recharge_l, 0.0);
        assert_eq!(impact.estimated_level_rise_m, 0.0);
        assert_eq!(impact.recharge_rate_percent, 0);
        assert!(impact.estimated_level_rise_m.is_finite());
    }

    #[test]
    fn test_level_rise_matches_yield_formula() {
        use approx::assert_relative_eq;

        let site = site(64.0, 36.0, SoilType::Sandy);
        let impact = impact_for(&site, 777.7);
        let storage = StorageEstimate::compute(&site, &rainfall(777.7));

        // Rounded to 2 decimals, so within half a centimeter of the exact value
        let exact = (storage.total_harvestable_l * 0.4 / 1000.0) / (100.0 * 0.25);
        assert_relative_eq!(impact.estimated_level_rise_m, exact, epsilon = 0.005);
    }

    #[test]
    fn test_recharge_rate_is_fixed_fraction() {
        for soil in [SoilType::Clay, SoilType::Sandy, SoilType::Mixed] {
            let site = site(80.0, 20.0, soil);
            let impact = impact_for(&site, 900.0);
            assert_eq!(impact.recharge_rate_percent, 40);
        }
    }
}

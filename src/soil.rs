//! Pit design and suitability guidance by soil type.
//!
//! A static advisory table carries the descriptive guidance for each of the
//! five soil types; the computed pit geometry (cylindrical approximation)
//! is attached to the resolved entry by an explicit constructor.

use nom::{
    character::complete::multispace0, number::complete::recognize_float, sequence::preceded,
    IResult, Parser,
};
use serde::{Deserialize, Serialize};

use crate::models::SoilType;

/// Extra pit volume over storage capacity, for sediment accumulation.
const SEDIMENT_ALLOWANCE: f64 = 1.2;

/// Excavation volume over pit volume, for approach and safety margins.
const EXCAVATION_FACTOR: f64 = 1.5;

/// Liters per cubic meter.
const LITERS_PER_M3: f64 = 1000.0;

/// Nominal pit depth when a depth descriptor carries no parseable figure.
/// Every table entry below does; the fallback keeps the geometry finite.
const DEFAULT_PIT_DEPTH_M: f64 = 3.0;

/// Fixed advisory entry for one soil type.
#[derive(Debug, Clone, Copy)]
pub struct SoilProfile {
    pub suitability: &'static str,
    /// Descriptive infiltration range, e.g. "Low (0.1-0.3 cm/hr)".
    pub infiltration_rate: &'static str,
    pub recommendations: [&'static str; 4],
    pub pit_type: &'static str,
    /// Nominal depth range; the lower bound drives the pit geometry.
    pub depth_range_m: &'static str,
    pub lining_required: bool,
}

const CLAY_PROFILE: SoilProfile = SoilProfile {
    suitability: "Good",
    infiltration_rate: "Low (0.1-0.3 cm/hr)",
    recommendations: [
        "Excellent for surface storage systems",
        "Install percolation wells with sand/gravel filter",
        "Consider lined storage tanks",
        "Add organic matter to improve permeability",
    ],
    pit_type: "Lined storage pit with filtration system",
    depth_range_m: "3-4 meters",
    lining_required: true,
};

const SANDY_PROFILE: SoilProfile = SoilProfile {
    suitability: "Fair",
    infiltration_rate: "High (2.5-12.5 cm/hr)",
    recommendations: [
        "Focus on groundwater recharge",
        "Install recharge wells or bore wells",
        "Use rapid infiltration basins",
        "Minimal surface storage needed",
    ],
    pit_type: "Unlined recharge pit with gravel bed",
    depth_range_m: "4-6 meters",
    lining_required: false,
};

const LOAMY_PROFILE: SoilProfile = SoilProfile {
    suitability: "Excellent",
    infiltration_rate: "Moderate (0.8-2.0 cm/hr)",
    recommendations: [
        "Ideal for both storage and recharge",
        "Balanced approach with storage tanks",
        "Install percolation pits",
        "Best overall soil type for RWH",
    ],
    pit_type: "Partially lined pit with overflow system",
    depth_range_m: "3-5 meters",
    lining_required: false,
};

const ROCKY_PROFILE: SoilProfile = SoilProfile {
    suitability: "Challenging",
    infiltration_rate: "Very Low (0.05-0.2 cm/hr)",
    recommendations: [
        "Focus on surface collection and storage",
        "Use above-ground tanks",
        "Install check dams for surface runoff",
        "Consider blasting for pit construction",
    ],
    pit_type: "Above-ground storage with collection system",
    depth_range_m: "2-3 meters (if excavation possible)",
    lining_required: true,
};

const MIXED_PROFILE: SoilProfile = SoilProfile {
    suitability: "Good",
    infiltration_rate: "Variable (0.5-3.0 cm/hr)",
    recommendations: [
        "Conduct soil percolation test",
        "Hybrid system with storage and recharge",
        "Install multi-level filtration",
        "Adapt design based on dominant soil type",
    ],
    pit_type: "Flexible design based on soil composition",
    depth_range_m: "3-4 meters",
    lining_required: false,
};

/// Advisory table entry for a soil type.
pub fn advisory_profile(soil: SoilType) -> &'static SoilProfile {
    match soil {
        SoilType::Clay => &CLAY_PROFILE,
        SoilType::Sandy => &SANDY_PROFILE,
        SoilType::Loamy => &LOAMY_PROFILE,
        SoilType::Rocky => &ROCKY_PROFILE,
        SoilType::Mixed => &MIXED_PROFILE,
    }
}

fn leading_number(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, recognize_float).parse(input)
}

/// Lower bound of a depth-range descriptor: `"3-4 meters"` → `3.0`,
/// `"2-3 meters (if excavation possible)"` → `2.0`.
pub(crate) fn depth_lower_bound_m(descriptor: &str) -> Option<f64> {
    let (_, figure) = leading_number(descriptor).ok()?;
    let value: f64 = figure.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Soil guidance plus the pit geometry sized for the recommended storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilRecommendation {
    pub suitability: String,
    pub infiltration_rate: String,
    pub recommendations: Vec<String>,
    pub pit_type: String,
    pub depth_range_m: String,
    pub lining_required: bool,
    /// Pit diameter (meters, 1 decimal) for a cylindrical pit at the
    /// entry's nominal depth.
    pub required_pit_diameter_m: f64,
    /// Pit volume: storage capacity plus sediment allowance (liters).
    pub required_pit_volume_l: f64,
    /// Excavation volume including approach and safety margins (liters).
    pub excavation_volume_l: f64,
    pub soil_type: SoilType,
}

impl SoilRecommendation {
    /// Resolve the advisory entry for `soil` and attach pit geometry sized
    /// for `recommended_storage_l`.
    pub fn compute(soil: SoilType, recommended_storage_l: f64) -> Self {
        let profile = advisory_profile(soil);

        let pit_volume_l = recommended_storage_l * SEDIMENT_ALLOWANCE;
        let depth_m = depth_lower_bound_m(profile.depth_range_m).unwrap_or(DEFAULT_PIT_DEPTH_M);
        let diameter_m =
            (pit_volume_l / (std::f64::consts::PI * depth_m * LITERS_PER_M3)).sqrt() * 2.0;

        SoilRecommendation {
            suitability: profile.suitability.to_string(),
            infiltration_rate: profile.infiltration_rate.to_string(),
            recommendations: profile
                .recommendations
                .iter()
                .map(|r| r.to_string())
                .collect(),
            pit_type: profile.pit_type.to_string(),
            depth_range_m: profile.depth_range_m.to_string(),
            lining_required: profile.lining_required,
            required_pit_diameter_m: (diameter_m * 10.0).round() / 10.0,
            required_pit_volume_l: pit_volume_l.round(),
            excavation_volume_l: (pit_volume_l * EXCAVATION_FACTOR).round(),
            soil_type: soil,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_lower_bound_all_table_entries() {
        assert_eq!(depth_lower_bound_m("3-4 meters"), Some(3.0));
        assert_eq!(depth_lower_bound_m("4-6 meters"), Some(4.0));
        assert_eq!(depth_lower_bound_m("3-5 meters"), Some(3.0));
        assert_eq!(
            depth_lower_bound_m("2-3 meters (if excavation possible)"),
            Some(2.0)
        );
    }

    #[test]
    fn test_depth_lower_bound_rejects_nonsense() {
        assert_eq!(depth_lower_bound_m("shallow"), None);
        assert_eq!(depth_lower_bound_m(""), None);
        assert_eq!(depth_lower_bound_m("-2 meters"), None);
    }

    #[test]
    fn test_pit_geometry_loamy() {
        let rec = SoilRecommendation::compute(SoilType::Loamy, 50_000.0);

        // 50000 × 1.2 = 60000 L in a 3 m deep cylinder
        assert_eq!(rec.required_pit_volume_l, 60_000.0);
        assert_eq!(rec.excavation_volume_l, 90_000.0);
        assert_eq!(rec.required_pit_diameter_m, 5.0);
        assert_eq!(rec.suitability, "Excellent");
        assert!(!rec.lining_required);
    }

    #[test]
    fn test_pit_geometry_rocky() {
        let rec = SoilRecommendation::compute(SoilType::Rocky, 2_550.0);

        assert_eq!(rec.required_pit_volume_l, 3_060.0);
        assert_eq!(rec.excavation_volume_l, 4_590.0);
        // 2 m deep cylinder (lower bound of "2-3 meters (...)")
        assert_eq!(rec.required_pit_diameter_m, 1.4);
        assert!(rec.lining_required);
    }

    #[test]
    fn test_volume_ratios_hold() {
        for soil in [
            SoilType::Clay,
            SoilType::Sandy,
            SoilType::Loamy,
            SoilType::Rocky,
            SoilType::Mixed,
        ] {
            let rec = SoilRecommendation::compute(soil, 12_345.0);
            assert_eq!(rec.required_pit_volume_l, (12_345.0_f64 * 1.2).round());
            assert_eq!(rec.excavation_volume_l, (12_345.0_f64 * 1.2 * 1.5).round());
            assert_eq!(rec.soil_type, soil);
            assert_eq!(rec.recommendations.len(), 4);
        }
    }

    #[test]
    fn test_diameter_matches_cylinder_formula() {
        use approx::assert_relative_eq;

        // Sandy pit is 4 m deep; the rounded diameter stays within 0.05 m
        // of the exact cylindrical solution
        let rec = SoilRecommendation::compute(SoilType::Sandy, 20_000.0);
        let exact = (20_000.0 * 1.2 / (std::f64::consts::PI * 4.0 * 1000.0)).sqrt() * 2.0;
        assert_relative_eq!(rec.required_pit_diameter_m, exact, epsilon = 0.05);
    }

    #[test]
    fn test_zero_storage_collapses_geometry() {
        let rec = SoilRecommendation::compute(SoilType::Mixed, 0.0);
        assert_eq!(rec.required_pit_volume_l, 0.0);
        assert_eq!(rec.excavation_volume_l, 0.0);
        assert_eq!(rec.required_pit_diameter_m, 0.0);
    }

    #[test]
    fn test_advisory_strings_survive_resolution() {
        let rec = SoilRecommendation::compute(SoilType::Clay, 10_000.0);
        assert_eq!(rec.pit_type, "Lined storage pit with filtration system");
        assert_eq!(rec.infiltration_rate, "Low (0.1-0.3 cm/hr)");
        assert_eq!(
            rec.recommendations[0],
            "Excellent for surface storage systems"
        );
        assert_eq!(rec.depth_range_m, "3-4 meters");
    }
}

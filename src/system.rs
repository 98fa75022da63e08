//! System tier classification, component lists, benefits, and efficiency.

use serde::{Deserialize, Serialize};

use crate::storage::StorageEstimate;

/// Tier thresholds on the total harvestable volume (liters).
const BASIC_LIMIT_L: f64 = 50_000.0;
const INTERMEDIATE_LIMIT_L: f64 = 150_000.0;

/// Overall system efficiency factor applied on top of collection and
/// storage efficiency.
const SYSTEM_EFFICIENCY: f64 = 0.85;

/// Cap on the storage-to-harvest ratio counted toward efficiency.
const STORAGE_EFFICIENCY_CAP: f64 = 0.8;

/// Water bill rate per liter saved, for the benefit figure.
const WATER_COST_PER_L: f64 = 0.05;

/// Share of the harvest counted as groundwater recharge in the benefit
/// summary (the groundwater stage itself uses its own recharge fraction).
const BENEFIT_RECHARGE_FRACTION: f64 = 0.3;

/// Installation scale classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemTier {
    /// Below 50 000 L harvestable per year.
    Basic,
    /// 50 000 to 150 000 L harvestable per year.
    Intermediate,
    /// Above 150 000 L harvestable per year.
    Advanced,
}

impl SystemTier {
    pub fn from_total_harvestable_l(total_l: f64) -> Self {
        if total_l < BASIC_LIMIT_L {
            SystemTier::Basic
        } else if total_l < INTERMEDIATE_LIMIT_L {
            SystemTier::Intermediate
        } else {
            SystemTier::Advanced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SystemTier::Basic => "Basic Rooftop Harvesting",
            SystemTier::Intermediate => "Intermediate RWH System",
            SystemTier::Advanced => "Advanced RWH System",
        }
    }

    fn components(&self) -> &'static [&'static str] {
        match self {
            SystemTier::Basic => &[
                "Roof gutters and downpipes",
                "First flush diverter",
                "Storage tank (5,000-10,000L)",
                "Basic filtration unit",
                "Overflow management",
            ],
            SystemTier::Intermediate => &[
                "Complete catchment system",
                "Multi-stage filtration",
                "Underground storage tank (15,000-25,000L)",
                "Pump and distribution system",
                "Groundwater recharge pit",
            ],
            SystemTier::Advanced => &[
                "Comprehensive collection network",
                "Automated first flush system",
                "Multiple storage units (50,000L+)",
                "Water treatment plant",
                "Smart monitoring system",
                "Groundwater recharge wells",
            ],
        }
    }
}

/// Fixed upkeep task table, independent of the installation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    pub weekly: Vec<String>,
    pub monthly: Vec<String>,
    pub quarterly: Vec<String>,
    pub annually: Vec<String>,
}

impl MaintenanceSchedule {
    pub fn standard() -> Self {
        let tasks = |items: &[&str]| items.iter().map(|t| t.to_string()).collect();
        MaintenanceSchedule {
            weekly: tasks(&[
                "Check for blockages in gutters",
                "Inspect first flush diverter",
            ]),
            monthly: tasks(&[
                "Clean roof and gutters",
                "Check water quality",
                "Test pump operation",
            ]),
            quarterly: tasks(&[
                "Replace filters",
                "Check storage tank condition",
                "Inspect piping",
            ]),
            annually: tasks(&[
                "Professional system inspection",
                "Deep cleaning",
                "Repair and replacement",
            ]),
        }
    }
}

/// Recommended system tier with its components, benefit summary, and
/// overall efficiency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemRecommendation {
    pub tier: SystemTier,
    pub system_type: String,
    pub components: Vec<String>,
    pub benefits: Vec<String>,
    /// Overall collection-to-use efficiency, 0-100.
    pub efficiency_percent: u8,
    pub maintenance_schedule: MaintenanceSchedule,
    pub expected_lifespan: String,
}

impl SystemRecommendation {
    /// Classify the installation and derive its benefit summary.
    pub fn compute(storage: &StorageEstimate) -> Self {
        let tier = SystemTier::from_total_harvestable_l(storage.total_harvestable_l);

        let saving_l = storage.water_saving_potential_l;
        let benefits = vec![
            format!(
                "Save {} kiloliters annually",
                (saving_l / 1000.0).round() as i64
            ),
            format!(
                "Reduce water bill by ₹{} per year",
                (saving_l * WATER_COST_PER_L).round() as i64
            ),
            format!(
                "Groundwater recharge of {} kiloliters",
                (storage.total_harvestable_l * BENEFIT_RECHARGE_FRACTION / 1000.0).round() as i64
            ),
            "Flood reduction in local area".to_string(),
            format!(
                "Emergency water supply for {} days",
                storage.days_covered
            ),
        ];

        SystemRecommendation {
            tier,
            system_type: tier.label().to_string(),
            components: tier.components().iter().map(|c| c.to_string()).collect(),
            benefits,
            efficiency_percent: efficiency_percent(storage),
            maintenance_schedule: MaintenanceSchedule::standard(),
            expected_lifespan: "15-25 years with proper maintenance".to_string(),
        }
    }
}

/// Overall efficiency: mean of the two collection coefficients, scaled by
/// the capped storage ratio and the fixed system factor.
fn efficiency_percent(storage: &StorageEstimate) -> u8 {
    let collection = (storage.roof_runoff_coeff + storage.open_space_runoff_coeff) / 2.0;
    let storage_ratio = if storage.total_harvestable_l > 0.0 {
        (storage.recommended_storage_l / storage.total_harvestable_l).min(STORAGE_EFFICIENCY_CAP)
    } else {
        0.0
    };
    (collection * storage_ratio * SYSTEM_EFFICIENCY * 100.0).round() as u8
}

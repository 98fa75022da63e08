//! Installation, maintenance, and ROI cost model.
//!
//! Unit cost constants are currency-agnostic; every category is linear in
//! storage capacity or roof area. Amounts are rounded to whole units at
//! the component boundary.

use serde::{Deserialize, Serialize};

use crate::models::{SiteProfile, SoilType};
use crate::storage::StorageEstimate;

// Installation unit costs.
const EXCAVATION_PER_M3: f64 = 500.0;
const LINING_PER_M3: f64 = 800.0;
const FILTRATION_FIXED: f64 = 15_000.0;
const PIPING_PER_M2: f64 = 150.0;
const PUMP_COST: f64 = 25_000.0;
/// Storage capacity above which a pump is part of the installation.
const PUMP_THRESHOLD_L: f64 = 10_000.0;
const FIRST_FLUSH_FIXED: f64 = 5_000.0;
const STORAGE_PER_L: f64 = 8.0;
const LABOR_PER_M3: f64 = 2_000.0;
const MISCELLANEOUS_FIXED: f64 = 10_000.0;

// Annual maintenance sub-costs.
const CLEANING_ANNUAL: f64 = 3_000.0;
const FILTER_REPLACEMENT_ANNUAL: f64 = 2_000.0;
const PUMP_MAINTENANCE_ANNUAL: f64 = 1_500.0;
const INSPECTION_ANNUAL: f64 = 1_000.0;

/// Municipal water cost per liter, for the savings figure.
const WATER_COST_PER_L: f64 = 0.05;

/// Government subsidy fraction of the installation total.
const SUBSIDY_FRACTION: f64 = 0.3;

/// Installation cost split across the nine fixed categories. Each amount
/// is rounded to the nearest whole unit, so the categories sum exactly to
/// [`CostEstimate::total_installation`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub excavation: f64,
    /// Zero unless the soil demands a lined pit (clay, rocky).
    pub lining: f64,
    pub filtration: f64,
    pub piping: f64,
    /// Zero for gravity-fed systems at or below the pump threshold.
    pub pumping: f64,
    pub first_flush: f64,
    pub storage: f64,
    pub labor: f64,
    pub miscellaneous: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.excavation
            + self.lining
            + self.filtration
            + self.piping
            + self.pumping
            + self.first_flush
            + self.storage
            + self.labor
            + self.miscellaneous
    }
}

/// Full cost model for the installation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub breakdown: CostBreakdown,
    pub total_installation: f64,
    pub annual_maintenance: f64,
    pub annual_savings: f64,
    /// Years to recover the installation cost from net savings, 1 decimal.
    /// `None` when annual savings do not exceed maintenance — the cost is
    /// not recoverable.
    pub payback_period_years: Option<f64>,
    /// Installation cost per liter of storage capacity, 2 decimals.
    /// `None` for a zero-capacity system.
    pub cost_per_liter_capacity: Option<f64>,
    pub government_subsidy: f64,
    pub net_cost: f64,
}

impl CostEstimate {
    /// Price the installation for a site and its storage figures.
    pub fn compute(site: &SiteProfile, storage: &StorageEstimate) -> Self {
        let capacity_l = storage.recommended_storage_l;
        let capacity_m3 = capacity_l / 1000.0;

        let needs_lining = matches!(site.soil_type, SoilType::Clay | SoilType::Rocky);
        let needs_pump = capacity_l > PUMP_THRESHOLD_L;

        let breakdown = CostBreakdown {
            excavation: (capacity_m3 * EXCAVATION_PER_M3).round(),
            lining: if needs_lining {
                (capacity_m3 * LINING_PER_M3).round()
            } else {
                0.0
            },
            filtration: FILTRATION_FIXED,
            piping: (site.roof_area_m2 * PIPING_PER_M2).round(),
            pumping: if needs_pump { PUMP_COST } else { 0.0 },
            first_flush: FIRST_FLUSH_FIXED,
            storage: (capacity_l * STORAGE_PER_L).round(),
            labor: (capacity_m3 * LABOR_PER_M3).round(),
            miscellaneous: MISCELLANEOUS_FIXED,
        };
        let total = breakdown.total();

        let annual_maintenance = CLEANING_ANNUAL
            + FILTER_REPLACEMENT_ANNUAL
            + if needs_pump { PUMP_MAINTENANCE_ANNUAL } else { 0.0 }
            + INSPECTION_ANNUAL;

        let annual_savings = storage.water_saving_potential_l * WATER_COST_PER_L;

        // Payback only exists when savings outrun maintenance; a negative
        // or infinite period is reported as not recoverable.
        let net_annual = annual_savings - annual_maintenance;
        let payback_period_years =
            (net_annual > 0.0).then(|| ((total / net_annual) * 10.0).round() / 10.0);

        let cost_per_liter_capacity =
            (capacity_l > 0.0).then(|| ((total / capacity_l) * 100.0).round() / 100.0);

        let government_subsidy = (total * SUBSIDY_FRACTION).round();

        CostEstimate {
            breakdown,
            total_installation: total,
            annual_maintenance,
            annual_savings: annual_savings.round(),
            payback_period_years,
            cost_per_liter_capacity,
            government_subsidy,
            net_cost: total - government_subsidy,
        }
    }
}

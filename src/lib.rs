pub mod assessment;
pub mod cost;
pub mod error;
pub mod groundwater;
pub mod models;
pub mod rainfall;
pub mod rainfall_mock;
pub mod soil;
pub mod storage;
pub mod system;

pub use assessment::{run_assessment, validate_rainfall, validate_site, AssessmentResult};
pub use cost::{CostBreakdown, CostEstimate};
pub use error::AssessmentError;
pub use groundwater::GroundwaterImpact;
pub use models::{Coordinates, MonthlyRainfall, RainfallRecord, SiteProfile, SoilType};
pub use rainfall::{
    default_record, normalize_response, resolve_rainfall, RainfallError, RainfallSource,
    ResolvedRainfall,
};
pub use rainfall_mock::MockRainfallSource;
pub use soil::{advisory_profile, SoilProfile, SoilRecommendation};
pub use storage::StorageEstimate;
pub use system::{MaintenanceSchedule, SystemRecommendation, SystemTier};

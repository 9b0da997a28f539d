//! Re-exports of all entities

pub use super::bm_unit::Entity as BmUnit;
pub use super::bm_unit_type::Entity as BmUnitType;
pub use super::carbon_intensity_national::Entity as CarbonIntensityNational;
pub use super::carbon_intensity_national_forecast::Entity as CarbonIntensityNationalForecast;
pub use super::demand_forecast::Entity as DemandForecast;
pub use super::embedded_generation::Entity as EmbeddedGeneration;
pub use super::embedded_generation_forecast::Entity as EmbeddedGenerationForecast;
pub use super::frequency::Entity as Frequency;
pub use super::fuel_type::Entity as FuelType;
pub use super::generation_by_fuel_type_hh::Entity as GenerationByFuelTypeHh;
pub use super::generation_by_fuel_type_inst::Entity as GenerationByFuelTypeInst;
pub use super::initial_demand_outturn::Entity as InitialDemandOutturn;
pub use super::lolp_dm::Entity as LolpDm;
pub use super::maximum_export_limit::Entity as MaximumExportLimit;
pub use super::maximum_import_limit::Entity as MaximumImportLimit;
pub use super::operator::Entity as Operator;
pub use super::participant::Entity as Participant;
pub use super::physical_notification::Entity as PhysicalNotification;
pub use super::plant_bm_unit::Entity as PlantBmUnit;
pub use super::pv_live::Entity as PvLive;
pub use super::region::Entity as Region;
pub use super::stable_export_limit::Entity as StableExportLimit;
pub use super::system_demand::Entity as SystemDemand;
pub use super::system_warning::Entity as SystemWarning;
pub use super::wikidata_plant::Entity as WikidataPlant;

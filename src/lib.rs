// src/lib.rs

pub mod entities {
    pub mod prelude;

    pub mod bm_unit;
    pub mod bm_unit_type;
    pub mod carbon_intensity_national;
    pub mod carbon_intensity_national_forecast;
    pub mod demand_forecast;
    pub mod embedded_generation;
    pub mod embedded_generation_forecast;
    pub mod frequency;
    pub mod fuel_type;
    pub mod generation_by_fuel_type_hh;
    pub mod generation_by_fuel_type_inst;
    pub mod initial_demand_outturn;
    pub mod lolp_dm;
    pub mod maximum_export_limit;
    pub mod maximum_import_limit;
    pub mod operator;
    pub mod participant;
    pub mod physical_notification;
    pub mod plant_bm_unit;
    pub mod pv_live;
    pub mod region;
    pub mod stable_export_limit;
    pub mod system_demand;
    pub mod system_warning;
    pub mod wikidata_plant;
}

pub mod services {
    pub mod access;
    pub mod blending;
    pub mod registry;
    pub mod settlement;
    pub mod timeseries;
}

pub mod error;

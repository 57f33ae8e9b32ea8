mod json_contract;

pub use json_contract::{PLOT_REQUEST_JSON_SCHEMA_V1, PlotRequestJsonContractV1};

use serde::{Deserialize, Serialize};

use crate::core::types::PlotDescriptor;
use crate::error::{PlotError, PlotResult};

pub const PLOT_REQUEST_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for the server-supplied plot payload.
///
/// The `plots` entries use exactly the wire field names of the analysis
/// result documents (`xlabel`, `ylabel`, `xunit`, `yunit`, `xscale`,
/// `yscale`, per-series `name`/`style`/`x`/`y`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRequestJsonContractV1 {
    pub schema_version: u32,
    pub plots: Vec<PlotDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_unit: Option<String>,
}

impl PlotRequestJsonContractV1 {
    #[must_use]
    pub fn new(plots: Vec<PlotDescriptor>) -> Self {
        Self {
            schema_version: PLOT_REQUEST_JSON_SCHEMA_V1,
            plots,
            target_unit: None,
        }
    }

    #[must_use]
    pub fn with_target_unit(mut self, target_unit: impl Into<String>) -> Self {
        self.target_unit = Some(target_unit.into());
        self
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize plot request v1: {e}"))
        })
    }

    /// Accepts either a bare descriptor array or the versioned envelope.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        if let Ok(plots) = serde_json::from_str::<Vec<PlotDescriptor>>(input) {
            return Ok(Self::new(plots));
        }
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse plot request payload: {e}"))
        })?;
        if payload.schema_version != PLOT_REQUEST_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported plot request schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}

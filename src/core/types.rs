use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// A single sample in data (unit) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis scale type, carried through to the drawing layer untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

/// One named data series, owned by the caller and read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default)]
    pub style: String,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            style: String::new(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub(crate) fn validate(&self) -> PlotResult<()> {
        if self.x.len() != self.y.len() {
            return Err(PlotError::InvalidData(format!(
                "series `{}` has {} x values but {} y values",
                self.name,
                self.x.len(),
                self.y.len()
            )));
        }
        Ok(())
    }
}

/// Groups series sharing one pair of axes and units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotDescriptor {
    #[serde(default)]
    pub xlabel: String,
    #[serde(default)]
    pub ylabel: String,
    #[serde(default)]
    pub xunit: String,
    #[serde(default)]
    pub yunit: String,
    #[serde(default)]
    pub xscale: AxisScale,
    #[serde(default)]
    pub yscale: AxisScale,
    pub series: Vec<SeriesDescriptor>,
}

impl PlotDescriptor {
    #[must_use]
    pub fn new(xlabel: impl Into<String>, ylabel: impl Into<String>) -> Self {
        Self {
            xlabel: xlabel.into(),
            ylabel: ylabel.into(),
            xunit: String::new(),
            yunit: String::new(),
            xscale: AxisScale::Linear,
            yscale: AxisScale::Linear,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_units(mut self, xunit: impl Into<String>, yunit: impl Into<String>) -> Self {
        self.xunit = xunit.into();
        self.yunit = yunit.into();
        self
    }

    #[must_use]
    pub fn with_scales(mut self, xscale: AxisScale, yscale: AxisScale) -> Self {
        self.xscale = xscale;
        self.yscale = yscale;
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesDescriptor) -> Self {
        self.series.push(series);
        self
    }
}

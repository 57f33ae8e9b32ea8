use serde::{Deserialize, Serialize};

use crate::core::style::SymbolShape;
use crate::core::types::DataPoint;
use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0)
    }

    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb8(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Polyline draw command for one series, coordinates in display-unit space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub points: Vec<DataPoint>,
    pub color: Color,
    pub name: String,
}

/// Marker draw command for one series, coordinates in display-unit space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolPrimitive {
    pub points: Vec<DataPoint>,
    pub shape: SymbolShape,
    pub color: Color,
    pub name: String,
}

/// One draw command of a rendered plot, ownership transferred to the
/// drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlotPrimitive {
    Line(LinePrimitive),
    Symbol(SymbolPrimitive),
}

impl PlotPrimitive {
    /// Name of the series this primitive was built from.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Line(line) => &line.name,
            Self::Symbol(symbol) => &symbol.name,
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Line(line) => line.color,
            Self::Symbol(symbol) => symbol.color,
        }
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        match self {
            Self::Line(line) => &line.points,
            Self::Symbol(symbol) => &symbol.points,
        }
    }
}

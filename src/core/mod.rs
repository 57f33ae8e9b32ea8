pub mod style;
pub mod types;

pub use style::{StyleTokens, SymbolShape, parse_style};
pub use types::{AxisScale, DataPoint, PlotDescriptor, SeriesDescriptor};

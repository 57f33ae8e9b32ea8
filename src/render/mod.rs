pub mod palette;
pub mod primitives;
pub mod renderer;

pub use palette::{CATEGORY10, ColorScale};
pub use primitives::{Color, LinePrimitive, PlotPrimitive, SymbolPrimitive};
pub use renderer::{AxisInfo, RenderedPlot, render_plot};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::style::parse_style;
use crate::core::types::{AxisScale, DataPoint, PlotDescriptor};
use crate::error::{PlotError, PlotResult};
use crate::units::convert::UnitLookup;
use crate::units::parse::{ParsedUnit, format_unit, parse_unit};

use super::palette::ColorScale;
use super::primitives::{LinePrimitive, PlotPrimitive, SymbolPrimitive};

/// Axis metadata resolved for one rendered plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisInfo {
    pub label: String,
    pub scale: AxisScale,
}

/// Output of one render call: ordered draw commands plus resolved axis
/// metadata. Produced fresh per call; the renderer holds no state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPlot {
    pub primitives: Vec<PlotPrimitive>,
    pub resolved_unit: Option<String>,
    pub x_axis: AxisInfo,
    pub y_axis: AxisInfo,
}

struct AxisUnits {
    x: ParsedUnit,
    y: ParsedUnit,
}

struct ScalePair {
    x: f64,
    y: f64,
}

/// Rescales every descriptor into one display unit and emits ordered plot
/// primitives.
///
/// The display unit is `target_unit` when given, otherwise the first base
/// unit found on a descriptor's x axis; it is sticky for the whole call.
/// Primitive order is deterministic: descriptors in input order, series
/// within a descriptor in input order, line before symbol per series.
pub fn render_plot(
    descriptors: &[PlotDescriptor],
    target_unit: Option<&str>,
    units: &impl UnitLookup,
) -> PlotResult<RenderedPlot> {
    let parsed = parse_axis_units(descriptors)?;
    let display_unit = resolve_display_unit(target_unit, &parsed);
    debug!(
        descriptors = descriptors.len(),
        display_unit = display_unit.as_deref(),
        "render plot"
    );

    let scales = compute_scales(descriptors, &parsed, display_unit.as_deref(), units)?;
    let (x_axis, y_axis) = build_axes(descriptors, &parsed, display_unit.as_deref());

    let mut palette = ColorScale::new();
    let mut primitives = Vec::new();
    for (descriptor, scale) in descriptors.iter().zip(&scales) {
        for series in &descriptor.series {
            series.validate()?;
            let tokens = parse_style(&series.style)?;
            if !tokens.is_visible() {
                trace!(series = %series.name, "series draws nothing, skipped");
                continue;
            }

            let color = tokens
                .color
                .unwrap_or_else(|| palette.color_for(&series.name));
            let points = rescale_points(&series.x, &series.y, scale.x, scale.y);
            trace!(
                series = %series.name,
                points = points.len(),
                line = tokens.line,
                symbol = tokens.symbol.is_some(),
                "series rescaled"
            );

            let mut emitted: SmallVec<[PlotPrimitive; 2]> = SmallVec::new();
            match (tokens.line, tokens.symbol) {
                (true, Some(shape)) => {
                    emitted.push(PlotPrimitive::Line(LinePrimitive {
                        points: points.clone(),
                        color,
                        name: series.name.clone(),
                    }));
                    emitted.push(PlotPrimitive::Symbol(SymbolPrimitive {
                        points,
                        shape,
                        color,
                        name: series.name.clone(),
                    }));
                }
                (true, None) => emitted.push(PlotPrimitive::Line(LinePrimitive {
                    points,
                    color,
                    name: series.name.clone(),
                })),
                (false, Some(shape)) => emitted.push(PlotPrimitive::Symbol(SymbolPrimitive {
                    points,
                    shape,
                    color,
                    name: series.name.clone(),
                })),
                (false, None) => {}
            }
            primitives.extend(emitted);
        }
    }

    Ok(RenderedPlot {
        primitives,
        resolved_unit: display_unit,
        x_axis,
        y_axis,
    })
}

/// Parses both axis units of every descriptor and enforces that the two
/// axes of one descriptor carry the same base unit.
fn parse_axis_units(descriptors: &[PlotDescriptor]) -> PlotResult<Vec<AxisUnits>> {
    descriptors
        .iter()
        .map(|descriptor| {
            let x = parse_unit(&descriptor.xunit);
            let y = parse_unit(&descriptor.yunit);
            if x.unit != y.unit {
                return Err(PlotError::UnitMismatch {
                    xunit: descriptor.xunit.clone(),
                    yunit: descriptor.yunit.clone(),
                });
            }
            Ok(AxisUnits { x, y })
        })
        .collect()
}

fn resolve_display_unit(target_unit: Option<&str>, parsed: &[AxisUnits]) -> Option<String> {
    if let Some(target) = target_unit {
        if !target.is_empty() {
            // A target spelled with a superscript exponent reduces to its base.
            return parse_unit(target).unit.filter(|unit| !unit.is_empty());
        }
    }
    parsed
        .iter()
        .find_map(|axes| axes.x.unit.clone().filter(|unit| !unit.is_empty()))
}

/// One conversion ratio per descriptor, raised independently to the x and y
/// exponents: an area unit scales as the square of the length ratio.
fn compute_scales(
    descriptors: &[PlotDescriptor],
    parsed: &[AxisUnits],
    display_unit: Option<&str>,
    units: &impl UnitLookup,
) -> PlotResult<Vec<ScalePair>> {
    descriptors
        .iter()
        .zip(parsed)
        .map(|(descriptor, axes)| {
            let base = axes.x.unit.as_deref().filter(|unit| !unit.is_empty());
            let ratio = match (base, display_unit) {
                (Some(base), Some(display)) if base != display => units.factor(base, display)?,
                (None, Some(target)) => {
                    warn!(
                        xlabel = %descriptor.xlabel,
                        display = target,
                        "descriptor declares no unit, rendered unscaled"
                    );
                    1.0
                }
                _ => 1.0,
            };
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "conversion ratio from `{}` must be finite and > 0, got {ratio}",
                    descriptor.xunit
                )));
            }
            Ok(ScalePair {
                x: ratio.powi(axes.x.exponent),
                y: ratio.powi(axes.y.exponent),
            })
        })
        .collect()
}

/// Axis labels come from the first descriptor that defines each, with the
/// formatted display unit appended in parentheses when one is present.
/// Scale types come from the first descriptor.
fn build_axes(
    descriptors: &[PlotDescriptor],
    parsed: &[AxisUnits],
    display_unit: Option<&str>,
) -> (AxisInfo, AxisInfo) {
    let x_label = descriptors
        .iter()
        .zip(parsed)
        .find(|(descriptor, _)| !descriptor.xlabel.is_empty())
        .map(|(descriptor, axes)| axis_label(&descriptor.xlabel, display_unit, axes.x.exponent))
        .unwrap_or_default();
    let y_label = descriptors
        .iter()
        .zip(parsed)
        .find(|(descriptor, _)| !descriptor.ylabel.is_empty())
        .map(|(descriptor, axes)| axis_label(&descriptor.ylabel, display_unit, axes.y.exponent))
        .unwrap_or_default();

    let x_scale = descriptors.first().map(|d| d.xscale).unwrap_or_default();
    let y_scale = descriptors.first().map(|d| d.yscale).unwrap_or_default();

    (
        AxisInfo {
            label: x_label,
            scale: x_scale,
        },
        AxisInfo {
            label: y_label,
            scale: y_scale,
        },
    )
}

fn axis_label(label: &str, display_unit: Option<&str>, exponent: i32) -> String {
    match display_unit {
        Some(unit) => format!("{label} ({})", format_unit(unit, exponent)),
        None => label.to_owned(),
    }
}

#[cfg(feature = "parallel-rescale")]
const PARALLEL_RESCALE_MIN_POINTS: usize = 4096;

fn rescale_points(x: &[f64], y: &[f64], x_factor: f64, y_factor: f64) -> Vec<DataPoint> {
    #[cfg(feature = "parallel-rescale")]
    {
        use rayon::prelude::*;
        if x.len() >= PARALLEL_RESCALE_MIN_POINTS {
            return x
                .par_iter()
                .zip(y.par_iter())
                .map(|(&px, &py)| DataPoint::new(px * x_factor, py * y_factor))
                .collect();
        }
    }

    x.iter()
        .zip(y.iter())
        .map(|(&px, &py)| DataPoint::new(px * x_factor, py * y_factor))
        .collect()
}

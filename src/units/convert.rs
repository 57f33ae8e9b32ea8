use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Physical dimension a unit symbol belongs to.
///
/// Conversion is only defined within one dimension; crossing dimensions is
/// an explicit error, never a silent factor of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Length,
    Time,
}

/// Looks up the multiplicative factor that expresses a quantity given in
/// `from` in units of `to`.
///
/// Implementations must fail with [`PlotError::UnconvertibleUnit`] when no
/// conversion path exists.
pub trait UnitLookup {
    fn factor(&self, from: &str, to: &str) -> PlotResult<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitEntry {
    pub dimension: Dimension,
    /// Ratio of this unit to its dimension's base unit.
    pub to_base: f64,
}

/// Registry of named physical units, keyed by symbol.
///
/// Iteration order is insertion order, which makes `suggest_unit` ties
/// deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitTable {
    entries: IndexMap<String, UnitEntry>,
}

impl UnitTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The SI-derived units surface-measurement data arrives in: lengths
    /// from kilometers down to picometers and the time units of
    /// measurement metadata.
    #[must_use]
    pub fn si() -> Self {
        Self::new()
            .with_unit("km", Dimension::Length, 1e3)
            .with_unit("m", Dimension::Length, 1.0)
            .with_unit("cm", Dimension::Length, 1e-2)
            .with_unit("mm", Dimension::Length, 1e-3)
            .with_unit("µm", Dimension::Length, 1e-6)
            .with_unit("nm", Dimension::Length, 1e-9)
            .with_unit("Å", Dimension::Length, 1e-10)
            .with_unit("pm", Dimension::Length, 1e-12)
            .with_unit("h", Dimension::Time, 3600.0)
            .with_unit("min", Dimension::Time, 60.0)
            .with_unit("s", Dimension::Time, 1.0)
            .with_unit("ms", Dimension::Time, 1e-3)
            .with_unit("µs", Dimension::Time, 1e-6)
            .with_unit("ns", Dimension::Time, 1e-9)
    }

    #[must_use]
    pub fn with_unit(mut self, symbol: impl Into<String>, dimension: Dimension, to_base: f64) -> Self {
        self.entries
            .insert(symbol.into(), UnitEntry { dimension, to_base });
        self
    }

    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Picks the same-dimension unit that keeps `magnitude` (given in
    /// `reference` units) closest to order of magnitude 1.
    pub fn suggest_unit(&self, reference: &str, magnitude: f64) -> PlotResult<&str> {
        if !magnitude.is_finite() || magnitude <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "unit suggestion needs a finite positive magnitude, got {magnitude}"
            )));
        }
        let reference_entry = self.lookup(reference, reference)?;
        let in_base = magnitude * reference_entry.to_base;

        self.entries
            .iter()
            .filter(|(_, entry)| entry.dimension == reference_entry.dimension)
            .min_by_key(|(_, entry)| OrderedFloat((in_base / entry.to_base).log10().abs()))
            .map(|(symbol, _)| symbol.as_str())
            .ok_or_else(|| PlotError::UnconvertibleUnit {
                from: reference.to_owned(),
                to: reference.to_owned(),
            })
    }

    fn lookup(&self, symbol: &str, requested_target: &str) -> PlotResult<UnitEntry> {
        self.entries
            .get(symbol)
            .copied()
            .ok_or_else(|| PlotError::UnconvertibleUnit {
                from: symbol.to_owned(),
                to: requested_target.to_owned(),
            })
    }
}

impl UnitLookup for UnitTable {
    fn factor(&self, from: &str, to: &str) -> PlotResult<f64> {
        let source = self.lookup(from, to)?;
        let target = self.lookup(to, to)?;
        if source.dimension != target.dimension {
            return Err(PlotError::UnconvertibleUnit {
                from: from.to_owned(),
                to: to.to_owned(),
            });
        }
        Ok(source.to_base / target.to_base)
    }
}

pub mod convert;
pub mod parse;
pub mod superscript;
pub mod value_format;

pub use convert::{Dimension, UnitEntry, UnitLookup, UnitTable};
pub use parse::{ParsedUnit, format_unit, parse_unit};
pub use superscript::to_superscript;
pub use value_format::{format_value, round_to_significant};

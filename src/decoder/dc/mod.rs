//! # Design content (DC) segment
//!
//! Decoders for the segment holding the model: sketches, features,
//! parameters, units, work geometry and the document node itself.
//!
//! | Family | Leading shape |
//! |--------|---------------|
//! | `content` | ContentHeader |
//! | `sketch` | Sketch entity and constraint headers |
//! | `feature` | Feature records |
//! | `child` | ChildHeader1, List2U32 header |
//! | `raw` | Header0 only |
//! | `parameter` | Units, parameters, expression nodes (partly table driven) |
//! | `variable` | Layout chosen by values read earlier |
//! | `document` | Document, kind-dependent records, labels, workbook |

mod child;
mod content;
mod document;
mod feature;
mod parameter;
mod raw;
mod sketch;
mod variable;

pub use parameter::{translate, unit_def, UnitDef, FUNCTIONS, OPERATIONS, TOLERANCES, UNITS};

use super::Registry;

/// Records whose declared size is unreliable and must be re-derived from
/// the trailing size marker.
pub const SELF_CORRECTING: &[u32] = &[0x2B48_A42B, 0x9087_4D63];

pub fn registry() -> Registry {
    Registry::new("DC")
        .with(content::DECODERS)
        .with(sketch::DECODERS)
        .with(feature::DECODERS)
        .with(child::DECODERS)
        .with(raw::DECODERS)
        .with(parameter::DECODERS)
        .with(&parameter::table_decoders())
        .with(variable::DECODERS)
        .with(document::DECODERS)
        .with_self_correcting(SELF_CORRECTING)
}

//! Form domain layer
//!
//! The element tree is the single source of truth for both rendering and
//! code generation.

mod element;
mod form;

pub use element::{flatten, ElementOrRow, FieldKind, FormElement};
pub use form::FormBuilder;

#[cfg(test)]
pub use element::{
    ChoiceField, FieldProps, FormArray, FormArrayEntry, PlainField, SliderField, StaticBlock,
    TextField, ToggleField, ToggleGroupField,
};

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or checking a saved form
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid form record: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate element id `{0}`")]
    DuplicateId(String),

    #[error("asyncValidation of {value} ms exceeds the {max} ms limit")]
    AsyncValidationOutOfRange { value: u32, max: u32 },
}

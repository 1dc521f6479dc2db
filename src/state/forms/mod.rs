//! Form domain layer
//!
//! The field table drives both rendering and payload building, so every
//! input is handled through the same key/value path.

mod field;
mod form_state;

pub use field::{FieldKind, FieldSpec, FieldValue, FIELD_SPECS, IS_XDRIVE};
pub use form_state::{
    FormValues, PredictorForm, RawInput, ACTION_ROW, CLOSE_BUTTON, PREDICT_BUTTON,
};

//! Form rendering module
//!
//! - `field_renderer`: one boxed input per field spec
//! - `predictor_form`: the predictor modal with its action panel
//! - `result_panel`: the outcome of the last submission

mod field_renderer;
mod predictor_form;
mod result_panel;

pub use predictor_form::draw_predictor;

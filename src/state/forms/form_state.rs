//! Form values and the predictor form editor state

use super::field::{
    FieldKind, FieldSpec, FieldValue, ENGINE_BADGE, ENGINE_SIZE, FIELD_SPECS,
    FUEL_TYPE, HORSE_POWER, IS_XDRIVE, KILOMETERS, REGION, YEAR,
};
use std::collections::BTreeMap;

/// UI-level signal delivered by an edit
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Checkbox checked/unchecked
    Checked(bool),
    /// Text typed or option selected
    Text(String),
}

/// Current value of every field for one form session.
///
/// Every key of `FIELD_SPECS` is present at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FormValues {
    /// Values a freshly opened form starts with
    pub fn initialize() -> Self {
        let values = BTreeMap::from([
            (ENGINE_SIZE, FieldValue::Number(2000.0)),
            (HORSE_POWER, FieldValue::Number(184.0)),
            (KILOMETERS, FieldValue::Number(143000.0)),
            (YEAR, FieldValue::Number(2012.0)),
            (IS_XDRIVE, FieldValue::Flag(1)),
            (FUEL_TYPE, FieldValue::Choice("Diesel".to_string())),
            (REGION, FieldValue::Choice("Bucuresti".to_string())),
            (ENGINE_BADGE, FieldValue::Choice("320d".to_string())),
        ]);
        debug_assert_eq!(values.iter().count(), FIELD_SPECS.len());
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Return a copy of these values with only `key` changed.
    ///
    /// Flags store 1/0, numbers are parsed without clamping, choices are
    /// stored verbatim. Panics if `key` is not a known field or the input
    /// does not match `kind`: both mean the UI and the field table disagree.
    pub fn apply_edit(&self, key: &str, raw: RawInput, kind: FieldKind) -> Self {
        let Some((&key, _)) = self.values.get_key_value(key) else {
            panic!("unknown form field {key:?}");
        };

        let value = match (kind, raw) {
            (FieldKind::Flag, RawInput::Checked(checked)) => FieldValue::Flag(u8::from(checked)),
            (FieldKind::Number, RawInput::Text(text)) => {
                FieldValue::Number(text.trim().parse::<f64>().unwrap_or(f64::NAN))
            }
            (FieldKind::Choice, RawInput::Text(text)) => FieldValue::Choice(text),
            (kind, raw) => panic!("input {raw:?} does not match {kind:?} field {key:?}"),
        };

        let mut next = self.clone();
        next.values.insert(key, value);
        next
    }
}

impl Default for FormValues {
    fn default() -> Self {
        Self::initialize()
    }
}

/// Index of the action row (Predict / Close) after the last field
pub const ACTION_ROW: usize = FIELD_SPECS.len();

/// Buttons on the action row
pub const PREDICT_BUTTON: usize = 0;
pub const CLOSE_BUTTON: usize = 1;
const BUTTON_COUNT: usize = 2;

/// Editor state of the predictor form: values plus cursor and text buffers
#[derive(Debug, Clone)]
pub struct PredictorForm {
    pub values: FormValues,
    /// Raw text for numeric fields, so partial input like "2." survives
    buffers: BTreeMap<&'static str, String>,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl PredictorForm {
    pub fn new() -> Self {
        let values = FormValues::initialize();
        let buffers = FIELD_SPECS
            .iter()
            .filter(|spec| spec.kind == FieldKind::Number)
            .map(|spec| {
                let text = values
                    .get(spec.key)
                    .map(FieldValue::display_value)
                    .unwrap_or_default();
                (spec.key, text)
            })
            .collect();

        Self {
            values,
            buffers,
            active_field_index: 0,
            selected_button: PREDICT_BUTTON,
        }
    }

    pub fn field_count(&self) -> usize {
        ACTION_ROW + 1
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == ACTION_ROW
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// The field under the cursor, `None` on the action row
    pub fn active_spec(&self) -> Option<&'static FieldSpec> {
        FIELD_SPECS.get(self.active_field_index)
    }

    /// Text shown for a field: the edit buffer for numbers, the value otherwise
    pub fn display_value(&self, key: &str) -> String {
        if let Some(text) = self.buffers.get(key) {
            return text.clone();
        }
        self.values
            .get(key)
            .map(FieldValue::display_value)
            .unwrap_or_default()
    }

    /// Type a character into the active numeric field
    pub fn input_char(&mut self, c: char) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        if spec.kind != FieldKind::Number || !(c.is_ascii_digit() || c == '.' || c == '-') {
            return;
        }
        if let Some(buffer) = self.buffers.get_mut(spec.key) {
            buffer.push(c);
        }
        self.sync_buffer(spec);
    }

    /// Remove the last character of the active numeric field
    pub fn backspace(&mut self) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        if spec.kind != FieldKind::Number {
            return;
        }
        if let Some(buffer) = self.buffers.get_mut(spec.key) {
            buffer.pop();
        }
        self.sync_buffer(spec);
    }

    /// Toggle the active flag field
    pub fn toggle_flag(&mut self) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        if spec.kind != FieldKind::Flag {
            return;
        }
        let checked = self
            .values
            .get(spec.key)
            .is_some_and(FieldValue::is_checked);
        self.values = self
            .values
            .apply_edit(spec.key, RawInput::Checked(!checked), spec.kind);
    }

    /// Move the active choice field to the next (or previous) option
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        if spec.kind != FieldKind::Choice || spec.options.is_empty() {
            return;
        }
        let current = self
            .values
            .get(spec.key)
            .and_then(FieldValue::as_choice)
            .and_then(|value| spec.options.iter().position(|o| *o == value))
            .unwrap_or(0);
        let count = spec.options.len();
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.values = self.values.apply_edit(
            spec.key,
            RawInput::Text(spec.options[next].to_string()),
            spec.kind,
        );
    }

    fn sync_buffer(&mut self, spec: &FieldSpec) {
        let text = self.buffers.get(spec.key).cloned().unwrap_or_default();
        self.values = self
            .values
            .apply_edit(spec.key, RawInput::Text(text), spec.kind);
    }
}

impl Default for PredictorForm {
    fn default() -> Self {
        Self::new()
    }
}

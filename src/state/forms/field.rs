//! Field descriptor table and value objects

use serde::{Serialize, Serializer};

/// How a field's value is edited and encoded on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free numeric input, parsed as a floating-point number
    Number,
    /// One of a fixed list of options, stored verbatim
    Choice,
    /// Checkbox, stored as integer 0 or 1
    Flag,
}

/// Advisory min/max hint shown next to numeric fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeHint {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeHint {
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Whether a value falls inside the hint (never enforced)
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    pub fn label(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{min}-{max}"),
            (None, Some(max)) => format!("max {max}"),
            (Some(min), None) => format!("min {min}"),
            (None, None) => String::new(),
        }
    }
}

/// Static description of one form input
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire key, spelled exactly as the prediction service expects it
    pub key: &'static str,
    /// Label shown in the form
    pub label: &'static str,
    pub kind: FieldKind,
    /// Allowed values for `FieldKind::Choice`, empty otherwise
    pub options: &'static [&'static str],
    pub range: Option<RangeHint>,
}

pub const ENGINE_SIZE: &str = "Engine Size (cm3)";
pub const HORSE_POWER: &str = "Horse Power (HP)";
pub const KILOMETERS: &str = "Kilometers";
pub const YEAR: &str = "Year";
pub const IS_XDRIVE: &str = "Is_xDrive";
pub const FUEL_TYPE: &str = "Fuel Type";
pub const REGION: &str = "Region";
pub const ENGINE_BADGE: &str = "Engine_Badge";

pub const FUEL_TYPES: &[&str] = &["Diesel", "Benzina", "Hibrid", "Electric"];

pub const REGIONS: &[&str] = &[
    "Bucuresti",
    "Ilfov",
    "Center",
    "North",
    "South",
    "East",
    "West",
    "Other_Region",
];

pub const ENGINE_BADGES: &[&str] = &[
    "320d",
    "Unknown",
    "318d",
    "320i",
    "330e",
    "Rarer Models",
    "318i",
    "316d",
    "330i",
];

/// Every input of the predictor form, in display order
pub const FIELD_SPECS: &[FieldSpec] = &[
    FieldSpec {
        key: ENGINE_SIZE,
        label: "Engine Size (cm3)",
        kind: FieldKind::Number,
        options: &[],
        range: Some(RangeHint::between(1500.0, 3500.0)),
    },
    FieldSpec {
        key: HORSE_POWER,
        label: "Horse Power (HP)",
        kind: FieldKind::Number,
        options: &[],
        range: Some(RangeHint::between(120.0, 600.0)),
    },
    FieldSpec {
        key: KILOMETERS,
        label: "Kilometers",
        kind: FieldKind::Number,
        options: &[],
        range: Some(RangeHint::at_most(500_000.0)),
    },
    FieldSpec {
        key: YEAR,
        label: "Year",
        kind: FieldKind::Number,
        options: &[],
        range: Some(RangeHint::between(1950.0, 2025.0)),
    },
    FieldSpec {
        key: IS_XDRIVE,
        label: "Is xDrive",
        kind: FieldKind::Flag,
        options: &[],
        range: None,
    },
    FieldSpec {
        key: FUEL_TYPE,
        label: "Fuel Type",
        kind: FieldKind::Choice,
        options: FUEL_TYPES,
        range: None,
    },
    FieldSpec {
        key: REGION,
        label: "Region",
        kind: FieldKind::Choice,
        options: REGIONS,
        range: None,
    },
    FieldSpec {
        key: ENGINE_BADGE,
        label: "Engine Badge",
        kind: FieldKind::Choice,
        options: ENGINE_BADGES,
        range: None,
    },
];

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Flag(u8),
    Choice(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Flag(1))
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            FieldValue::Choice(s) => Some(s),
            _ => None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Number(n) if n.is_finite() => format_number(*n),
            FieldValue::Number(_) => String::new(),
            FieldValue::Flag(1) => "[x]".to_string(),
            FieldValue::Flag(_) => "[ ]".to_string(),
            FieldValue::Choice(s) => s.clone(),
        }
    }
}

/// Whole numbers are written without a fractional part
fn format_number(n: f64) -> String {
    if is_whole(n) {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn is_whole(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64
}

// The service reads the request like a JavaScript client would send it:
// whole numbers as integers, NaN as null.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Number(n) if is_whole(*n) => serializer.serialize_i64(*n as i64),
            FieldValue::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            FieldValue::Number(_) => serializer.serialize_none(),
            FieldValue::Flag(flag) => serializer.serialize_u8(*flag),
            FieldValue::Choice(s) => serializer.serialize_str(s),
        }
    }
}

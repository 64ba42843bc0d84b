//! Runtime value model and type-directed decoding.
//!
//! The evaluator works over a small tagged union instead of handing
//! expression text to a generic runtime: booleans, numbers (all arithmetic
//! is `f64`, so division by zero produces signed infinity rather than a
//! fault), and text.

#![allow(missing_docs)]

use std::fmt;

use serde::{Serialize, Serializer};
use smol_str::SmolStr;

/// Declared PLC data type of a snapshot tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    Bool,
    SInt,
    Int,
    DInt,
    LInt,
    USInt,
    UInt,
    UDInt,
    ULInt,
    Byte,
    Word,
    DWord,
    LWord,
    Real,
    LReal,
    String,
    /// Any declared type the analyzer has no decoding rule for.
    Other(SmolStr),
}

impl DataType {
    /// Parses a declared type name, case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "BOOL" => Self::Bool,
            "SINT" => Self::SInt,
            "INT" => Self::Int,
            "DINT" => Self::DInt,
            "LINT" => Self::LInt,
            "USINT" => Self::USInt,
            "UINT" => Self::UInt,
            "UDINT" => Self::UDInt,
            "ULINT" => Self::ULInt,
            "BYTE" => Self::Byte,
            "WORD" => Self::Word,
            "DWORD" => Self::DWord,
            "LWORD" => Self::LWord,
            "REAL" => Self::Real,
            "LREAL" => Self::LReal,
            "STRING" => Self::String,
            _ => Self::Other(SmolStr::new(name.trim())),
        }
    }

    /// The IEC type name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "BOOL",
            Self::SInt => "SINT",
            Self::Int => "INT",
            Self::DInt => "DINT",
            Self::LInt => "LINT",
            Self::USInt => "USINT",
            Self::UInt => "UINT",
            Self::UDInt => "UDINT",
            Self::ULInt => "ULINT",
            Self::Byte => "BYTE",
            Self::Word => "WORD",
            Self::DWord => "DWORD",
            Self::LWord => "LWORD",
            Self::Real => "REAL",
            Self::LReal => "LREAL",
            Self::String => "STRING",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Integer family, including the bit-string types.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::SInt
                | Self::Int
                | Self::DInt
                | Self::LInt
                | Self::USInt
                | Self::UInt
                | Self::UDInt
                | Self::ULInt
                | Self::Byte
                | Self::Word
                | Self::DWord
                | Self::LWord
        )
    }

    /// REAL or LREAL.
    #[must_use]
    pub fn is_real(&self) -> bool {
        matches!(self, Self::Real | Self::LReal)
    }
}

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A dynamically-typed runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean.
    Bool(bool),
    /// Number; all arithmetic happens in `f64`.
    Number(f64),
    /// Text.
    Text(SmolStr),
}

impl Value {
    /// Truthiness used for conditions: `FALSE`, `0`, `NaN`, and empty text
    /// are false.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(t) => !t.is_empty(),
        }
    }

    /// Numeric coercion: booleans become 0/1, text is parsed (NaN when it
    /// does not parse).
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::Text(t) => t.trim().parse().unwrap_or(f64::NAN),
        }
    }

    /// True when the value is a non-finite number (±Infinity or NaN).
    #[must_use]
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Value::Number(n) if !n.is_finite())
    }
}

impl fmt::Display for Value {
    /// Narrative display form: `TRUE`/`FALSE`, integers without a decimal
    /// point, `Infinity`/`-Infinity`/`NaN` markers for non-finite numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("TRUE"),
            Value::Bool(false) => f.write_str("FALSE"),
            Value::Number(n) => {
                if n.is_nan() {
                    f.write_str("NaN")
                } else if n.is_infinite() {
                    f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Text(t) => f.write_str(t),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            // Non-finite numbers have no JSON form; serialize their marker.
            Value::Number(n) if !n.is_finite() => serializer.serialize_str(&self.to_string()),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Text(t) => serializer.serialize_str(t),
        }
    }
}

/// Result type inferred from a computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InferredType {
    /// Boolean result.
    #[serde(rename = "BOOL")]
    Bool,
    /// Integral numeric result.
    #[serde(rename = "INT")]
    Int,
    /// Non-integral numeric result.
    #[serde(rename = "REAL")]
    Real,
    /// Anything else (text, non-finite numbers).
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl InferredType {
    /// Infers the result type of a computed value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 => Self::Int,
            Value::Number(n) if n.is_finite() => Self::Real,
            _ => Self::Unknown,
        }
    }

    /// The type label used in the results block.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bool => "BOOL",
            Self::Int => "INT",
            Self::Real => "REAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Decodes a snapshot raw value by its declared type.
///
/// BOOL is strict (`"TRUE"` or `"1"`); the numeric families default to 0
/// when the raw text does not parse; unknown declared types fall back to
/// best-effort decoding.
#[must_use]
pub fn decode_raw(raw: &str, declared: &DataType) -> Value {
    match declared {
        DataType::Bool => Value::Bool(raw == "TRUE" || raw == "1"),
        ty if ty.is_integer() => {
            let parsed = raw.trim().parse::<i64>().unwrap_or(0);
            Value::Number(parsed as f64)
        }
        ty if ty.is_real() => Value::Number(raw.trim().parse::<f64>().unwrap_or(0.0)),
        _ => best_effort(raw),
    }
}

fn best_effort(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        return Value::Number(n);
    }
    Value::Text(SmolStr::new(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_decoding_is_strict() {
        assert_eq!(decode_raw("TRUE", &DataType::Bool), Value::Bool(true));
        assert_eq!(decode_raw("1", &DataType::Bool), Value::Bool(true));
        assert_eq!(decode_raw("true", &DataType::Bool), Value::Bool(false));
        assert_eq!(decode_raw("0", &DataType::Bool), Value::Bool(false));
    }

    #[test]
    fn integer_defaults_to_zero() {
        assert_eq!(decode_raw("42", &DataType::Int), Value::Number(42.0));
        assert_eq!(decode_raw("4.2", &DataType::Int), Value::Number(0.0));
        assert_eq!(decode_raw("abc", &DataType::DWord), Value::Number(0.0));
    }

    #[test]
    fn real_parsing() {
        assert_eq!(decode_raw("3.25", &DataType::Real), Value::Number(3.25));
        assert_eq!(decode_raw("x", &DataType::LReal), Value::Number(0.0));
    }

    #[test]
    fn best_effort_for_unknown_types() {
        let ty = DataType::parse("MY_UDT");
        assert_eq!(decode_raw("true", &ty), Value::Bool(true));
        assert_eq!(decode_raw("7", &ty), Value::Number(7.0));
        assert_eq!(decode_raw("texto", &ty), Value::Text("texto".into()));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Bool(true).to_string(), "TRUE");
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn inferred_types() {
        assert_eq!(InferredType::of(&Value::Bool(false)), InferredType::Bool);
        assert_eq!(InferredType::of(&Value::Number(3.0)), InferredType::Int);
        assert_eq!(InferredType::of(&Value::Number(3.5)), InferredType::Real);
        assert_eq!(
            InferredType::of(&Value::Number(f64::INFINITY)),
            InferredType::Unknown
        );
        assert_eq!(
            InferredType::of(&Value::Text("x".into())),
            InferredType::Unknown
        );
    }
}

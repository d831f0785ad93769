//! Widening conversions between [`Value`] variants.
//!
//! Conversion is defined only when the target tag is greater than or equal
//! to the source tag — there is no narrowing path from `Double` back to
//! `Char`. This mirrors the promotion lattice: arithmetic always computes
//! in the wider of its two operand types.

use super::{Value, ValueType};

/// A requested conversion would narrow the value's type.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionError {
    /// The type conversion was requested into.
    pub wanted: ValueType,
    /// The value's actual type.
    pub got: ValueType,
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cannot convert {} to narrower type {}",
            self.got, self.wanted
        )
    }
}

impl Value {
    /// Widens to a [`Value::Char`]. Only valid when the value is already a
    /// `Char`.
    pub fn to_char(self) -> Result<i8, ConversionError> {
        match self {
            Value::Char(v) => Ok(v),
            other => Err(ConversionError {
                wanted: ValueType::Char,
                got: other.value_type(),
            }),
        }
    }

    /// Widens to an `int16`. Valid from `Char` or `Short`.
    pub fn to_short(self) -> Result<i16, ConversionError> {
        match self {
            Value::Char(v) => Ok(v as i16),
            Value::Short(v) => Ok(v),
            other => Err(ConversionError {
                wanted: ValueType::Short,
                got: other.value_type(),
            }),
        }
    }

    /// Widens to an `int32`. Valid from `Char`, `Short`, or `Integer`.
    pub fn to_integer(self) -> Result<i32, ConversionError> {
        match self {
            Value::Char(v) => Ok(v as i32),
            Value::Short(v) => Ok(v as i32),
            Value::Integer(v) => Ok(v),
            other => Err(ConversionError {
                wanted: ValueType::Integer,
                got: other.value_type(),
            }),
        }
    }

    /// Widens to a `float`. Valid from any integer variant or `Float` itself.
    pub fn to_float(self) -> Result<f32, ConversionError> {
        match self {
            Value::Char(v) => Ok(v as f32),
            Value::Short(v) => Ok(v as f32),
            Value::Integer(v) => Ok(v as f32),
            Value::Float(v) => Ok(v),
            other => Err(ConversionError {
                wanted: ValueType::Float,
                got: other.value_type(),
            }),
        }
    }

    /// Widens to a `double`. Valid from any variant.
    pub fn to_double(self) -> Result<f64, ConversionError> {
        match self {
            Value::Char(v) => Ok(v as f64),
            Value::Short(v) => Ok(v as f64),
            Value::Integer(v) => Ok(v as f64),
            Value::Float(v) => Ok(v as f64),
            Value::Double(v) => Ok(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_conversions_succeed() {
        assert_eq!(Value::Char(5).to_short(), Ok(5i16));
        assert_eq!(Value::Short(5).to_integer(), Ok(5i32));
        assert_eq!(Value::Integer(5).to_float(), Ok(5.0f32));
        assert_eq!(Value::Float(5.0).to_double(), Ok(5.0f64));
    }

    #[test]
    fn narrowing_conversions_fail() {
        assert!(Value::Double(5.0).to_char().is_err());
        assert!(Value::Float(5.0).to_integer().is_err());
        assert!(Value::Integer(5).to_short().is_err());
    }

    #[test]
    fn same_type_conversion_is_identity() {
        assert_eq!(Value::Integer(7).to_integer(), Ok(7));
    }
}

//! The tagged runtime value model and its promotion lattice.
//!
//! Every value on the AVM operand stack is one of five numeric widths. The
//! lattice is a straight line, `Char < Short < Integer < Float < Double`, and
//! conversions only ever widen: there is no `to_char` from a `Double`.

mod convert;

pub use convert::ConversionError;

/// A tag identifying which variant of [`Value`] is in play, without the
/// payload. Used for promotion comparisons and in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ValueType {
    /// `int8`
    Char = 1,
    /// `int16`
    Short = 2,
    /// `int32`
    Integer = 3,
    /// `float`
    Float = 4,
    /// `double`
    Double = 5,
}

impl ValueType {
    /// The name used in parse/eval error messages (`"int8"`, `"double"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Char => "int8",
            ValueType::Short => "int16",
            ValueType::Integer => "int32",
            ValueType::Float => "float",
            ValueType::Double => "double",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A runtime value on the operand stack, tagged by width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// 8-bit signed integer (`int8`).
    Char(i8),
    /// 16-bit signed integer (`int16`).
    Short(i16),
    /// 32-bit signed integer (`int32`).
    Integer(i32),
    /// 32-bit floating point (`float`).
    Float(f32),
    /// 64-bit floating point (`double`).
    Double(f64),
}

impl Value {
    /// Projects this value's [`ValueType`] tag.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Char(_) => ValueType::Char,
            Value::Short(_) => ValueType::Short,
            Value::Integer(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Float,
            Value::Double(_) => ValueType::Double,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Char(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
        }
    }
}

/// Returns whichever of `a` and `b` has the higher [`ValueType`] tag,
/// i.e. the type arithmetic on the pair should promote to.
pub fn bigger(a: ValueType, b: ValueType) -> ValueType {
    if a >= b { a } else { b }
}

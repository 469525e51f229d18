//! Dynamic property values and string coercion.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A property value read off a record instance
///
/// Accessors erase the concrete field type into this enum so that the
/// comparison engine can handle all properties uniformly. The declared field
/// type is tracked separately (see `TypeKey`); two `Int` values may therefore
/// still originate from different declared types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// An absent value (`Option::None`)
    Null,
    Bool(bool),
    /// Signed integers (`i8` through `i64`, `isize`)
    Int(i64),
    /// Unsigned integers (`u8` through `u64`, `usize`)
    Uint(u64),
    /// Floating point (`f32`, `f64`)
    Float(f64),
    Str(String),
    Char(char),
}

impl Value {
    /// Check whether this value is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Coerce this value to its string form for string-mode comparison
    ///
    /// `format` is a `{}`-placeholder pattern: the placeholder is replaced by
    /// the value's default rendering (e.g. `"{} yrs"` renders `30` as
    /// `"30 yrs"`). A format without a placeholder is ignored in favour of
    /// the default rendering. A null value coerces to the null value, never
    /// to an error.
    pub fn coerce_to_string(&self, format: Option<&str>) -> Value {
        if self.is_null() {
            return Value::Null;
        }
        let rendered = self.render();
        match format {
            Some(pattern) if pattern.contains("{}") => {
                Value::Str(pattern.replace("{}", &rendered))
            }
            _ => Value::Str(rendered),
        }
    }

    /// Default string rendering of a non-null value
    fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Uint(u) => u.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => s.clone(),
            Value::Char(c) => c.to_string(),
        }
    }

    /// Three-way ordering between two values of the same kind
    ///
    /// Null orders equal to null and before every non-null value. Signed and
    /// unsigned integers compare numerically across the two kinds. Returns
    /// `None` for any other kind mismatch and for incomparable floats (NaN).
    pub fn partial_cmp_same_kind(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Null, _) => Some(Ordering::Less),
            (_, Value::Null) => Some(Ordering::Greater),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Uint(b)) => Some(cmp_int_uint(*a, *b)),
            (Value::Uint(a), Value::Int(b)) => Some(cmp_int_uint(*b, *a).reverse()),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Char(a), Value::Char(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Numeric comparison of a signed against an unsigned integer
fn cmp_int_uint(a: i64, b: u64) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u64).cmp(&b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            other => write!(f, "{}", other.render()),
        }
    }
}

/// Conversion of concrete field values into [`Value`]
///
/// Implemented for the primitive scalar types, `String`, `&str`, `char`, and
/// `Option<T>` of any of those. Implement it for domain value types whose
/// fields should participate in comparison (pair it with a registered
/// comparer, or rely on string coercion when the two sides' types differ).
pub trait IntoValue {
    /// Convert self into a dynamic value
    fn into_value(self) -> Value;
}

macro_rules! into_value_int {
    ($($t:ty),*) => {
        $(impl IntoValue for $t {
            fn into_value(self) -> Value {
                Value::Int(self as i64)
            }
        })*
    };
}

macro_rules! into_value_uint {
    ($($t:ty),*) => {
        $(impl IntoValue for $t {
            fn into_value(self) -> Value {
                Value::Uint(self as u64)
            }
        })*
    };
}

into_value_int!(i8, i16, i32, i64, isize);
into_value_uint!(u8, u16, u32, u64, usize);

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Float(self as f64)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::Char(self)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Str(self.to_string())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(inner) => inner.into_value(),
            None => Value::Null,
        }
    }
}

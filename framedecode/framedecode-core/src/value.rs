//! Values produced by the frame decoder.

use std::{fmt, sync::Arc};

use serde::Serialize;

/// One decoded field value.
///
/// Raw reads keep their storage type; a conversion polynomial always yields
/// [`Value::F64`]. Text and hex fields decode to [`Value::String`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    U8(u8),
    U16(u16),
    U32(u32),
    F32(f32),
    F64(f64),
    String(Arc<str>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    /// Numeric view of the value, widened to `f64`. `None` for strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::I8(v) => Some(f64::from(*v)),
            Value::I16(v) => Some(f64::from(*v)),
            Value::I32(v) => Some(f64::from(*v)),
            Value::U8(v) => Some(f64::from(*v)),
            Value::U16(v) => Some(f64::from(*v)),
            Value::U32(v) => Some(f64::from(*v)),
            Value::F32(v) => Some(f64::from(*v)),
            Value::F64(v) => Some(*v),
            Value::String(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Value::String(_))
    }

    /// Zero, NaN and the empty string count as "no reading".
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::String(s) => s.is_empty(),
            other => other.as_f64().is_none_or(|v| v == 0.0 || v.is_nan()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

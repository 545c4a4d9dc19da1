//! Sensor field definitions and the schema that maps names to them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ctype::CType, error::ConfigError};

/// Byte order of a multi-byte numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    pub fn is_little(&self) -> bool {
        *self == ByteOrder::Little
    }
}

/// Conversion from the raw encoded number to the human-scaled value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Conversion {
    /// Polynomial coefficients, lowest order first: `y = c0 + c1*x + c2*x^2 + ...`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coeffs: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoded_units: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoded_units: Option<String>,
    /// Decimal places used when displaying the converted value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl Conversion {
    pub fn polynomial(coeffs: impl Into<Vec<f64>>) -> Self {
        Self {
            coeffs: Some(coeffs.into()),
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Evaluate the polynomial at `x`, or `None` when no coefficients are set.
    ///
    /// An empty coefficient list evaluates to `0.0`.
    pub fn apply(&self, x: f64) -> Option<f64> {
        let coeffs = self.coeffs.as_ref()?;
        Some(coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c))
    }
}

/// Definition of one sensor value inside a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FieldDefRepr")]
pub struct FieldDef {
    /// Display name.
    pub name: String,
    #[serde(rename = "type")]
    pub ty: CType,
    #[serde(default, skip_serializing_if = "ByteOrder::is_little")]
    pub byte_order: ByteOrder,
    /// Number of bytes spanned by a `char` or `hex` field; 1 when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion: Option<Conversion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// On-disk form of [`FieldDef`]. Byte order is accepted as `byte_order`,
/// `byteOrder`, or the boolean `bigEndian`; an explicit order wins.
#[derive(Deserialize)]
struct FieldDefRepr {
    name: String,
    #[serde(rename = "type")]
    ty: CType,
    #[serde(default, alias = "byteOrder")]
    byte_order: Option<ByteOrder>,
    #[serde(default, rename = "bigEndian")]
    big_endian: Option<bool>,
    #[serde(default)]
    length: Option<usize>,
    #[serde(default)]
    conversion: Option<Conversion>,
    #[serde(default)]
    comment: Option<String>,
}

impl From<FieldDefRepr> for FieldDef {
    fn from(repr: FieldDefRepr) -> Self {
        let byte_order = repr.byte_order.unwrap_or(match repr.big_endian {
            Some(true) => ByteOrder::Big,
            _ => ByteOrder::Little,
        });
        Self {
            name: repr.name,
            ty: repr.ty,
            byte_order,
            length: repr.length,
            conversion: repr.conversion,
            comment: repr.comment,
        }
    }
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: CType) -> Self {
        Self {
            name: name.into(),
            ty,
            byte_order: ByteOrder::Little,
            length: None,
            conversion: None,
            comment: None,
        }
    }

    pub fn big_endian(mut self) -> Self {
        self.byte_order = ByteOrder::Big;
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_conversion(mut self, conversion: Conversion) -> Self {
        self.conversion = Some(conversion);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Number of bytes this field occupies in a frame.
    ///
    /// `length` only scales text and hex fields; numeric fields always use
    /// the registry width.
    pub fn width(&self) -> usize {
        match self.length {
            Some(n) if !self.ty.is_numeric() => self.ty.width() * n,
            _ => self.ty.width(),
        }
    }

    /// Decimal places to display, if the conversion declares them.
    pub fn precision(&self) -> Option<usize> {
        self.conversion.as_ref().and_then(|c| c.precision)
    }

    /// Units of the decoded value, if the conversion declares them.
    pub fn decoded_units(&self) -> Option<&str> {
        self.conversion
            .as_ref()
            .and_then(|c| c.decoded_units.as_deref())
    }

    fn validate(&self, key: &str) -> Result<(), ConfigError> {
        match self.length {
            Some(length) if length == 0 || self.ty.is_numeric() => {
                Err(ConfigError::InvalidLength {
                    field: key.to_string(),
                    ty: self.ty.to_string(),
                    length,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Mapping from field name to [`FieldDef`], iterated in name order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(BTreeMap<String, FieldDef>);

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition keyed by its own name.
    pub fn insert(&mut self, field: FieldDef) -> Option<FieldDef> {
        self.0.insert(field.name.clone(), field)
    }

    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDef)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check per-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.0
            .iter()
            .try_for_each(|(key, field)| field.validate(key))
    }
}

impl FromIterator<FieldDef> for Schema {
    fn from_iter<T: IntoIterator<Item = FieldDef>>(iter: T) -> Self {
        let mut schema = Schema::new();
        for field in iter {
            schema.insert(field);
        }
        schema
    }
}

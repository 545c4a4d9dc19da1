use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownTypeError;

/// Storage types a frame field can be encoded with.
///
/// The set is closed: every variant has a fixed storage width and a decode
/// routine in the frame decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CType {
    #[serde(rename = "uint8_t")]
    U8,
    #[serde(rename = "uint16_t")]
    U16,
    #[serde(rename = "uint32_t")]
    U32,
    #[serde(rename = "int8_t")]
    I8,
    #[serde(rename = "int16_t")]
    I16,
    #[serde(rename = "int32_t")]
    I32,
    /// IEEE 754 single precision (`float`)
    #[serde(rename = "float")]
    F32,
    /// IEEE 754 double precision (`double`)
    #[serde(rename = "double")]
    F64,
    /// One character per byte (`char`)
    #[serde(rename = "char")]
    Char,
    /// Raw bytes re-encoded as lowercase hex (`hex`)
    #[serde(rename = "hex")]
    Hex,
}

impl CType {
    pub const ALL: [CType; 10] = [
        CType::U8,
        CType::U16,
        CType::U32,
        CType::I8,
        CType::I16,
        CType::I32,
        CType::F32,
        CType::F64,
        CType::Char,
        CType::Hex,
    ];

    /// Storage width of one element in bytes.
    pub const fn width(self) -> usize {
        match self {
            CType::U8 | CType::I8 | CType::Char | CType::Hex => 1,
            CType::U16 | CType::I16 => 2,
            CType::U32 | CType::I32 | CType::F32 => 4,
            CType::F64 => 8,
        }
    }

    pub const fn is_numeric(self) -> bool {
        !matches!(self, CType::Char | CType::Hex)
    }

    pub const fn identifier(self) -> &'static str {
        match self {
            CType::U8 => "uint8_t",
            CType::U16 => "uint16_t",
            CType::U32 => "uint32_t",
            CType::I8 => "int8_t",
            CType::I16 => "int16_t",
            CType::I32 => "int32_t",
            CType::F32 => "float",
            CType::F64 => "double",
            CType::Char => "char",
            CType::Hex => "hex",
        }
    }
}

impl FromStr for CType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CType::ALL
            .into_iter()
            .find(|ty| ty.identifier() == s)
            .ok_or_else(|| UnknownTypeError::new(s))
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Look up the storage width of a type identifier such as `"uint16_t"`.
pub fn width_of(identifier: &str) -> Result<usize, UnknownTypeError> {
    identifier.parse::<CType>().map(CType::width)
}

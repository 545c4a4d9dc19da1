//! Schema-side types for decoding fixed-layout telemetry frames.
//!
//! This crate provides the closed type registry ([`CType`]), sensor field
//! definitions ([`FieldDef`] / [`Schema`]), the JSON frame configuration
//! ([`FrameConfig`]) and the decoded [`Value`] representation.

mod config;
mod ctype;
mod error;
mod schema;
mod value;

pub use config::FrameConfig;
pub use ctype::{CType, width_of};
pub use error::{ConfigError, UnknownTypeError};
pub use schema::{ByteOrder, Conversion, FieldDef, Schema};
pub use value::Value;

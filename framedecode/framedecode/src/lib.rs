//! Decode fixed-layout telemetry frames into named, unit-converted values.
//!
//! A [`FrameDecoder`] borrows a [`Schema`](framedecode_core::Schema), is given
//! a layout order with [`FrameDecoder::set_order`], and turns hex strings (or
//! raw bytes) into a [`DecodedFrame`].

mod decoder;
mod error;
mod frame;
mod input;
mod options;

pub use decoder::FrameDecoder;
pub use error::FrameError;
pub use frame::DecodedFrame;
pub use framedecode_core as core;
pub use input::parse_hex;
pub use options::{DecodeOptions, MissingFieldPolicy};

//! Schema-driven decoding of a packed frame.

use bytes::{Buf, Bytes};
use framedecode_core::{CType, FieldDef, Schema, Value};

use crate::{
    error::FrameError,
    frame::DecodedFrame,
    input::parse_hex,
    options::{DecodeOptions, MissingFieldPolicy},
};

/// Decodes frames laid out by a configurable field order.
///
/// The schema is borrowed for the decoder's lifetime and never copied. The
/// layout order can be replaced between decode calls with
/// [`set_order`](Self::set_order).
#[derive(Debug, Clone)]
pub struct FrameDecoder<'a> {
    schema: &'a Schema,
    order: Vec<String>,
    options: DecodeOptions,
}

impl<'a> FrameDecoder<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self::with_options(schema, DecodeOptions::default())
    }

    pub fn with_options(schema: &'a Schema, options: DecodeOptions) -> Self {
        Self {
            schema,
            order: Vec::new(),
            options,
        }
    }

    /// Replace the layout order used by subsequent decode calls.
    ///
    /// Names are not checked against the schema here.
    pub fn set_order<I, S>(&mut self, order: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = order.into_iter().map(Into::into).collect();
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Total bytes the configured layout occupies, or `None` if a layout name
    /// is missing from the schema.
    pub fn frame_width(&self) -> Option<usize> {
        self.order
            .iter()
            .map(|name| self.schema.get(name).map(FieldDef::width))
            .sum()
    }

    /// Decode a frame given as pairs of hex digits.
    ///
    /// Returns `Ok(None)` when the input is empty or no order is configured.
    pub fn decode(&self, input: &str) -> Result<Option<DecodedFrame>, FrameError> {
        if input.is_empty() || self.order.is_empty() {
            return Ok(None);
        }
        let data = parse_hex(input)?;
        self.decode_buf(Bytes::from(data)).map(Some)
    }

    /// Decode a frame that is already binary.
    pub fn decode_bytes(&self, data: &[u8]) -> Result<Option<DecodedFrame>, FrameError> {
        if data.is_empty() || self.order.is_empty() {
            return Ok(None);
        }
        self.decode_buf(Bytes::copy_from_slice(data)).map(Some)
    }

    fn decode_buf(&self, buf: Bytes) -> Result<DecodedFrame, FrameError> {
        let mut reader = FieldReader::new(buf, self.options);
        let mut frame = DecodedFrame::new();

        for name in &self.order {
            let Some(field) = self.schema.get(name) else {
                match self.options.missing_field {
                    MissingFieldPolicy::Fail => {
                        return Err(FrameError::UnknownField {
                            field: name.clone(),
                        });
                    }
                    MissingFieldPolicy::Skip => {
                        tracing::warn!(
                            field = %name,
                            offset = reader.offset(),
                            "field not found in schema, skipping without advancing"
                        );
                        continue;
                    }
                }
            };

            let value = apply_conversion(field, reader.read_field(name, field)?);
            if self.options.omit_zero_values && value.is_falsy() {
                tracing::warn!(field = %name, "decoded value is zero or empty, omitting field");
                continue;
            }
            frame.push(name.as_str(), value);
        }

        if reader.remaining() > 0 {
            tracing::debug!(remaining = reader.remaining(), "trailing bytes after last field");
        }
        Ok(frame)
    }
}

fn apply_conversion(field: &FieldDef, raw: Value) -> Value {
    match (field.conversion.as_ref(), raw.as_f64()) {
        (Some(conversion), Some(x)) => conversion.apply(x).map_or(raw, Value::F64),
        _ => raw,
    }
}

struct FieldReader {
    buf: Bytes,
    initial_len: usize,
    options: DecodeOptions,
}

impl FieldReader {
    fn new(buf: Bytes, options: DecodeOptions) -> Self {
        let initial_len = buf.len();
        Self {
            buf,
            initial_len,
            options,
        }
    }

    fn offset(&self) -> usize {
        self.initial_len - self.buf.remaining()
    }

    fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn read_field(&mut self, name: &str, field: &FieldDef) -> Result<Value, FrameError> {
        let offset = self.offset();
        let width = field.width();
        if self.buf.remaining() < width {
            return Err(FrameError::OutOfRange {
                field: name.to_string(),
                offset,
                width,
                len: self.initial_len,
            });
        }

        let le = field.byte_order.is_little();
        let float_le = le && !self.options.floats_always_big_endian;
        let buf = &mut self.buf;

        let value = match field.ty {
            CType::U8 => Value::U8(buf.get_u8()),
            CType::I8 => Value::I8(buf.get_i8()),
            CType::U16 => Value::U16(if le { buf.get_u16_le() } else { buf.get_u16() }),
            CType::I16 if self.options.int16_as_unsigned => {
                Value::U16(if le { buf.get_u16_le() } else { buf.get_u16() })
            }
            CType::I16 => Value::I16(if le { buf.get_i16_le() } else { buf.get_i16() }),
            CType::U32 => Value::U32(if le { buf.get_u32_le() } else { buf.get_u32() }),
            CType::I32 => Value::I32(if le { buf.get_i32_le() } else { buf.get_i32() }),
            CType::F32 => Value::F32(if float_le { buf.get_f32_le() } else { buf.get_f32() }),
            CType::F64 => Value::F64(if float_le { buf.get_f64_le() } else { buf.get_f64() }),
            CType::Char => {
                let text: String = buf.copy_to_bytes(width).iter().map(|&b| char::from(b)).collect();
                Value::string(text)
            }
            CType::Hex => Value::string(hex::encode(buf.copy_to_bytes(width))),
        };

        tracing::trace!(field = name, offset, width, value = %value, "decoded field");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use framedecode_core::{Conversion, FieldDef};
    use tracing_test::traced_test;

    use super::*;

    fn sensors() -> Schema {
        [
            FieldDef::new("count", CType::U8),
            FieldDef::new("level", CType::U16).with_conversion(Conversion::polynomial([0.0, 0.5])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    #[traced_test]
    fn skipped_missing_field_is_logged() {
        let schema = sensors();
        let options = DecodeOptions::default().with_missing_field(MissingFieldPolicy::Skip);
        let mut decoder = FrameDecoder::with_options(&schema, options);
        decoder.set_order(["count", "humidity", "level"]);

        let frame = decoder.decode("030400").expect("decode").expect("frame");
        assert_eq!(frame.len(), 2);
        assert!(logs_contain("field not found in schema"));
        assert!(logs_contain("humidity"));
    }

    #[test]
    #[traced_test]
    fn omitted_zero_is_logged() {
        let schema = sensors();
        let mut decoder = FrameDecoder::new(&schema);
        decoder.set_order(["count", "level"]);

        let frame = decoder.decode("000400").expect("decode").expect("frame");
        assert!(!frame.contains("count"));
        assert_eq!(frame.get("level"), Some(&Value::F64(2.0)));
        assert!(logs_contain("omitting field"));
    }

    #[test]
    fn conversion_leaves_strings_untouched() {
        let field = FieldDef::new("tag", CType::Hex).with_conversion(Conversion::polynomial([1.0]));
        assert_eq!(
            apply_conversion(&field, Value::string("ff")),
            Value::string("ff")
        );
    }
}

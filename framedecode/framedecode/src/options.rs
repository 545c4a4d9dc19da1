/// What to do when a layout name has no definition in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFieldPolicy {
    /// Abort the decode with [`FrameError::UnknownField`](crate::FrameError::UnknownField).
    #[default]
    Fail,
    /// Log a warning and leave the field out without advancing the read
    /// offset. Every later field is then read from the wrong position.
    Skip,
}

/// Decoder behavior switches.
///
/// [`Default`] gives corrected semantics except for zero omission;
/// [`DecodeOptions::legacy`] reproduces the original decoder bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Leave zero (and NaN) readings out of the decoded frame.
    pub omit_zero_values: bool,
    /// Read `int16_t` fields with the unsigned 16-bit routine.
    pub int16_as_unsigned: bool,
    /// Read `float`/`double` fields big-endian regardless of their byte order.
    pub floats_always_big_endian: bool,
    pub missing_field: MissingFieldPolicy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            omit_zero_values: true,
            int16_as_unsigned: false,
            floats_always_big_endian: false,
            missing_field: MissingFieldPolicy::Fail,
        }
    }
}

impl DecodeOptions {
    pub fn legacy() -> Self {
        Self {
            omit_zero_values: true,
            int16_as_unsigned: true,
            floats_always_big_endian: true,
            missing_field: MissingFieldPolicy::Skip,
        }
    }

    pub fn with_omit_zero_values(mut self, omit: bool) -> Self {
        self.omit_zero_values = omit;
        self
    }

    pub fn with_missing_field(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_field = policy;
        self
    }
}

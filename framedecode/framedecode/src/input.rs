use crate::error::FrameError;

/// Parse pairs of hex digits into bytes.
///
/// Digits are case-insensitive. A trailing unpaired digit is dropped.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, FrameError> {
    let digits = input.as_bytes();
    let paired = digits.len() & !1;
    if paired != digits.len() {
        tracing::debug!(len = digits.len(), "dropping trailing unpaired hex digit");
    }
    hex::decode(&digits[..paired]).map_err(|source| FrameError::InvalidHex { source })
}

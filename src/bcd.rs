//! Packed-BCD codec for the date/time registers.
//!
//! The chip stores every date/time field as packed binary-coded decimal: the
//! high nibble holds the tens digit, the low nibble the units digit.

/// Decode a packed-BCD register value to its plain decimal value.
///
/// Valid for register values whose nibbles are both in `0..=9`.
pub fn decode_bcd(bcd: u8) -> u8 {
    ((bcd & 0xf0) >> 4) * 10 + (bcd & 0x0f)
}

/// Encode a decimal value in `0..=99` as packed BCD.
///
/// Values above 99 overflow the high nibble; the field setters validate
/// their input range before calling this.
pub fn encode_bcd(dec: u8) -> u8 {
    ((dec / 10) << 4) | (dec % 10)
}

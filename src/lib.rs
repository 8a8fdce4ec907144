//! Platform-agnostic Rust driver for the DS3231 extremely accurate real-time
//! clock, based on the [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal
//!
//! The driver owns the I2C bus handle for the lifetime of the [`Ds3231`]
//! instance and exposes:
//!
//! - Raw single-byte register access by datasheet address.
//! - Getters and setters for every date/time field (second, minute, hour,
//!   day of week, day of month, month, year), translating between the chip's
//!   packed-BCD register encoding and plain integers. All setters validate
//!   their input range.
//! - Clock-halt control co-located with the seconds register.
//! - A battery-backed UTC offset stored in otherwise unused register space.
//! - The [`Rtcc`] and [`DateTimeAccess`] traits from the [`rtcc`] crate for
//!   interoperability with code written against the generic RTC interface.
//!
//! The hour field always operates in 24-hour mode: reads mask the 12/24-hour
//! mode bit away and writes clear it, so the chip never ends up in 12-hour
//! mode through this driver.
//!
//! All operations are blocking; every accessor performs one or two bus
//! transactions and returns once they complete or the transport reports an
//! error. Nothing is cached, the chip's registers are the sole source of
//! truth. If the bus is shared, access must be serialized externally.

#![deny(unsafe_code)]
#![no_std]

pub use rtcc::{
    DateTimeAccess, Datelike, Hours, NaiveDate, NaiveDateTime, NaiveTime, Rtcc, Timelike,
};

/// All possible errors in this crate
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// I²C bus error
    Comm(E),
    /// Invalid input data provided
    InvalidInputData,
    /// Internal device state is invalid.
    ///
    /// It was not possible to read a valid date and/or time.
    /// The device is probably missing initialization.
    InvalidDeviceState,
}

/// Register addresses.
///
/// `SECONDS` through `YEAR` and `CONTROL` are fixed by the DS3231 datasheet.
/// `CENTURY`, `UTC_HOUR` and `UTC_MINUTE` are driver-assigned: they live in
/// the battery-backed alarm-1 register block, which this driver repurposes as
/// scratch storage since alarm handling is out of scope.
pub struct Register;

impl Register {
    pub const SECONDS: u8 = 0x00;
    pub const MINUTES: u8 = 0x01;
    pub const HOURS: u8 = 0x02;
    pub const DOW: u8 = 0x03;
    pub const DOM: u8 = 0x04;
    pub const MONTH: u8 = 0x05;
    pub const YEAR: u8 = 0x06;
    pub const CENTURY: u8 = 0x07;
    pub const UTC_HOUR: u8 = 0x08;
    pub const UTC_MINUTE: u8 = 0x09;
    pub const CONTROL: u8 = 0x0E;
}

struct BitFlags;

impl BitFlags {
    const CLOCK_HALT: u8 = 0b1000_0000;
    const SECONDS_MASK: u8 = 0b0111_1111;
    const H24_H12: u8 = 0b0100_0000;
    const HOURS_MASK: u8 = 0b0011_1111;
}

const DEVICE_ADDRESS: u8 = 0b110_1000;

/// DS3231 RTC driver
#[derive(Debug, Default)]
pub struct Ds3231<I2C> {
    i2c: I2C,
}

mod bcd;
mod configuration;
mod datetime;
mod interface;

pub use crate::bcd::{decode_bcd, encode_bcd};

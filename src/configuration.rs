//! Clock-halt control and battery-backed auxiliary storage.

use embedded_hal::i2c::I2c;

use crate::{BitFlags, Ds3231, Error, Register};

impl<I2C> Ds3231<I2C>
where
    I2C: I2c,
{
    /// Get the clock-halt bit.
    ///
    /// `true` means the oscillator is stopped and the time registers do not
    /// advance.
    pub fn clock_halted(&mut self) -> Result<bool, Error<I2C::Error>> {
        let data = self.read_register(Register::SECONDS)?;
        Ok((data & BitFlags::CLOCK_HALT) != 0)
    }

    /// Set or clear the clock-halt bit, preserving the stored second.
    pub fn set_clock_halt(&mut self, halt: bool) -> Result<(), Error<I2C::Error>> {
        let data = self.read_register(Register::SECONDS)?;
        let new_data = if halt {
            data | BitFlags::CLOCK_HALT
        } else {
            data & !BitFlags::CLOCK_HALT
        };
        // skip the write if the bit already has the requested state
        if new_data != data {
            self.write_register(Register::SECONDS, new_data)?;
        }
        Ok(())
    }

    /// Store a UTC offset in the battery-backed auxiliary registers.
    ///
    /// The hour offset may be negative (−12 to +14) and is stored as
    /// two's-complement binary; the minute offset (0 to 59) as plain binary.
    /// The chip does not interpret these values, they merely survive main
    /// power loss alongside the time registers.
    pub fn set_utc_offset(&mut self, hours: i8, minutes: u8) -> Result<(), Error<I2C::Error>> {
        if !(-12..=14).contains(&hours) || minutes > 59 {
            return Err(Error::InvalidInputData);
        }
        self.write_register(Register::UTC_HOUR, hours as u8)?;
        self.write_register(Register::UTC_MINUTE, minutes)
    }

    /// Get the stored UTC hour offset, −12 to +14.
    pub fn utc_offset_hours(&mut self) -> Result<i8, Error<I2C::Error>> {
        Ok(self.read_register(Register::UTC_HOUR)? as i8)
    }

    /// Get the stored UTC minute offset, 0 to 59.
    pub fn utc_offset_minutes(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_register(Register::UTC_MINUTE)
    }
}

//! Raw register access.

use embedded_hal::i2c::I2c;

use crate::{Ds3231, Error, DEVICE_ADDRESS};

impl<I2C> Ds3231<I2C>
where
    I2C: I2c,
{
    /// Create a new instance of the DS3231 device.
    pub fn new(i2c: I2C) -> Self {
        Ds3231 { i2c }
    }

    /// Destroy driver instance, return I2C bus instance.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Write a byte to the designated register.
    ///
    /// Issues a single two-byte write transaction (register address followed
    /// by the value) and blocks until the transport completes or fails.
    pub fn write_register(&mut self, register: u8, data: u8) -> Result<(), Error<I2C::Error>> {
        let payload: [u8; 2] = [register, data];
        self.i2c.write(DEVICE_ADDRESS, &payload).map_err(Error::Comm)
    }

    /// Read the byte stored in the designated register.
    ///
    /// Writes the register address, then reads one byte back. The two
    /// transfers are not atomic with respect to other users of the bus.
    pub fn read_register(&mut self, register: u8) -> Result<u8, Error<I2C::Error>> {
        let mut data = [0];
        self.i2c
            .write_read(DEVICE_ADDRESS, &[register], &mut data)
            .map_err(Error::Comm)?;
        Ok(data[0])
    }
}

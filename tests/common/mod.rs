//! Register-file I2C simulator for the driver tests.

use embedded_hal::i2c::{self, ErrorType, I2c, Operation};

/// 7-bit device address the driver must use.
pub const DEVICE_ADDRESS: u8 = 0x68;

/// Simulates the chip's register file behind an I2C bus.
///
/// A write transaction latches the first byte as the register pointer and
/// stores any following bytes at consecutive addresses. Read transactions
/// return consecutive bytes starting at the latched pointer, matching the
/// chip's address auto-increment behavior.
pub struct BusSim {
    registers: [u8; 0x13],
    pointer: usize,
    /// When set, every transaction fails, standing in for a NACK or timeout.
    pub fail: bool,
}

impl BusSim {
    pub fn new() -> Self {
        BusSim {
            registers: [0; 0x13],
            pointer: 0,
            fail: false,
        }
    }
}

#[derive(Debug)]
pub struct BusSimError;

impl i2c::Error for BusSimError {
    fn kind(&self) -> i2c::ErrorKind {
        i2c::ErrorKind::Other
    }
}

impl ErrorType for BusSim {
    type Error = BusSimError;
}

impl I2c for BusSim {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        assert_eq!(address, DEVICE_ADDRESS, "unexpected device address");
        if self.fail {
            return Err(BusSimError);
        }
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    if let Some((&register, values)) = bytes.split_first() {
                        self.pointer = usize::from(register) % self.registers.len();
                        for &value in values {
                            self.registers[self.pointer] = value;
                            self.pointer = (self.pointer + 1) % self.registers.len();
                        }
                    }
                }
                Operation::Read(buffer) => {
                    for byte in buffer.iter_mut() {
                        *byte = self.registers[self.pointer];
                        self.pointer = (self.pointer + 1) % self.registers.len();
                    }
                }
            }
        }
        Ok(())
    }
}

//! Date and time field access.
//!
//! One register read or write per field. Setters reject out-of-range input
//! with [`Error::InvalidInputData`] instead of letting a value above 99 (or
//! above the field range) corrupt the BCD encoding on the chip.

use embedded_hal::i2c::I2c;
use rtcc::{DateTimeAccess, Datelike, Hours, NaiveDate, NaiveDateTime, NaiveTime, Rtcc, Timelike};

use crate::bcd::{decode_bcd, encode_bcd};
use crate::{BitFlags, Ds3231, Error, Register};

impl<I2C> Ds3231<I2C>
where
    I2C: I2c,
{
    /// Get the current second, 0 to 59. The clock-halt bit is masked away.
    pub fn get_second(&mut self) -> Result<u8, Error<I2C::Error>> {
        let data = self.read_register(Register::SECONDS)?;
        Ok(decode_bcd(data & BitFlags::SECONDS_MASK))
    }

    /// Set the second, 0 to 59.
    ///
    /// The clock-halt bit currently stored in the seconds register is read
    /// first and carried over, so setting the second never starts or stops
    /// the oscillator.
    pub fn set_second(&mut self, second: u8) -> Result<(), Error<I2C::Error>> {
        if second > 59 {
            return Err(Error::InvalidInputData);
        }
        let halt = self.read_register(Register::SECONDS)? & BitFlags::CLOCK_HALT;
        self.write_register(Register::SECONDS, encode_bcd(second) | halt)
    }

    /// Get the current minute, 0 to 59.
    pub fn get_minute(&mut self) -> Result<u8, Error<I2C::Error>> {
        let data = self.read_register(Register::MINUTES)?;
        Ok(decode_bcd(data))
    }

    /// Set the minute, 0 to 59.
    pub fn set_minute(&mut self, minute: u8) -> Result<(), Error<I2C::Error>> {
        if minute > 59 {
            return Err(Error::InvalidInputData);
        }
        self.write_register(Register::MINUTES, encode_bcd(minute))
    }

    /// Get the current hour in 24-hour format, 0 to 23.
    ///
    /// The 12/24-hour mode and AM/PM bits are masked away; a register left in
    /// 12-hour mode by other software is not interpreted.
    pub fn get_hour(&mut self) -> Result<u8, Error<I2C::Error>> {
        let data = self.read_register(Register::HOURS)?;
        Ok(decode_bcd(data & BitFlags::HOURS_MASK))
    }

    /// Set the hour in 24-hour format, 0 to 23.
    ///
    /// The mode-select bit is written cleared, forcing the chip into 24-hour
    /// mode.
    pub fn set_hour(&mut self, hour: u8) -> Result<(), Error<I2C::Error>> {
        if hour > 23 {
            return Err(Error::InvalidInputData);
        }
        self.write_register(Register::HOURS, encode_bcd(hour) & !BitFlags::H24_H12)
    }

    /// Get the current day of the week as days since Sunday, 0 to 6.
    pub fn get_day_of_week(&mut self) -> Result<u8, Error<I2C::Error>> {
        let data = self.read_register(Register::DOW)?;
        Ok(decode_bcd(data))
    }

    /// Set the day of the week as days since Sunday, 0 to 6.
    pub fn set_day_of_week(&mut self, day_of_week: u8) -> Result<(), Error<I2C::Error>> {
        if day_of_week > 6 {
            return Err(Error::InvalidInputData);
        }
        self.write_register(Register::DOW, encode_bcd(day_of_week))
    }

    /// Get the current day of the month, 1 to 31.
    pub fn get_day(&mut self) -> Result<u8, Error<I2C::Error>> {
        let data = self.read_register(Register::DOM)?;
        Ok(decode_bcd(data))
    }

    /// Set the day of the month, 1 to 31.
    pub fn set_day(&mut self, day: u8) -> Result<(), Error<I2C::Error>> {
        if day < 1 || day > 31 {
            return Err(Error::InvalidInputData);
        }
        self.write_register(Register::DOM, encode_bcd(day))
    }

    /// Get the current month, 1 to 12.
    pub fn get_month(&mut self) -> Result<u8, Error<I2C::Error>> {
        let data = self.read_register(Register::MONTH)?;
        Ok(decode_bcd(data))
    }

    /// Set the month, 1 to 12.
    pub fn set_month(&mut self, month: u8) -> Result<(), Error<I2C::Error>> {
        if month < 1 || month > 12 {
            return Err(Error::InvalidInputData);
        }
        self.write_register(Register::MONTH, encode_bcd(month))
    }

    /// Get the current year, 2000 to 2099.
    ///
    /// Combines the century register (plain binary count of hundreds of
    /// years) with the BCD year-within-century register.
    pub fn get_year(&mut self) -> Result<u16, Error<I2C::Error>> {
        let century = u16::from(self.read_register(Register::CENTURY)?);
        let year = u16::from(decode_bcd(self.read_register(Register::YEAR)?));
        Ok(century * 100 + year)
    }

    /// Set the year, 2000 to 2099.
    ///
    /// The century register receives `year / 100` as plain binary, the year
    /// register `year % 100` as BCD.
    pub fn set_year(&mut self, year: u16) -> Result<(), Error<I2C::Error>> {
        if !(2000..=2099).contains(&year) {
            return Err(Error::InvalidInputData);
        }
        self.write_register(Register::CENTURY, (year / 100) as u8)?;
        self.write_register(Register::YEAR, encode_bcd((year % 100) as u8))
    }
}

impl<I2C> DateTimeAccess for Ds3231<I2C>
where
    I2C: I2c,
{
    type Error = Error<I2C::Error>;

    fn datetime(&mut self) -> Result<NaiveDateTime, Self::Error> {
        let year = self.get_year()?;
        let month = self.get_month()?;
        let day = self.get_day()?;
        let hour = self.get_hour()?;
        let minute = self.get_minute()?;
        let second = self.get_second()?;
        NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .and_then(|date| {
                date.and_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
            })
            .ok_or(Error::InvalidDeviceState)
    }

    fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<(), Self::Error> {
        if datetime.year() < 2000 || datetime.year() > 2099 {
            return Err(Error::InvalidInputData);
        }
        self.set_year(datetime.year() as u16)?;
        self.set_month(datetime.month() as u8)?;
        self.set_day(datetime.day() as u8)?;
        self.set_day_of_week(datetime.weekday().num_days_from_sunday() as u8)?;
        self.set_hour(datetime.hour() as u8)?;
        self.set_minute(datetime.minute() as u8)?;
        self.set_second(datetime.second() as u8)
    }
}

impl<I2C> Rtcc for Ds3231<I2C>
where
    I2C: I2c,
{
    fn seconds(&mut self) -> Result<u8, Self::Error> {
        self.get_second()
    }

    fn minutes(&mut self) -> Result<u8, Self::Error> {
        self.get_minute()
    }

    fn hours(&mut self) -> Result<Hours, Self::Error> {
        Ok(Hours::H24(self.get_hour()?))
    }

    fn time(&mut self) -> Result<NaiveTime, Self::Error> {
        let hour = self.get_hour()?;
        let minute = self.get_minute()?;
        let second = self.get_second()?;
        NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
            .ok_or(Error::InvalidDeviceState)
    }

    /// Day of the week, 1 to 7, where 1 is Sunday.
    fn weekday(&mut self) -> Result<u8, Self::Error> {
        Ok(self.get_day_of_week()? + 1)
    }

    fn day(&mut self) -> Result<u8, Self::Error> {
        self.get_day()
    }

    fn month(&mut self) -> Result<u8, Self::Error> {
        self.get_month()
    }

    fn year(&mut self) -> Result<u16, Self::Error> {
        self.get_year()
    }

    fn date(&mut self) -> Result<NaiveDate, Self::Error> {
        let year = self.get_year()?;
        let month = self.get_month()?;
        let day = self.get_day()?;
        NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .ok_or(Error::InvalidDeviceState)
    }

    fn set_seconds(&mut self, seconds: u8) -> Result<(), Self::Error> {
        self.set_second(seconds)
    }

    fn set_minutes(&mut self, minutes: u8) -> Result<(), Self::Error> {
        self.set_minute(minutes)
    }

    fn set_hours(&mut self, hours: Hours) -> Result<(), Self::Error> {
        let hour = match hours {
            Hours::H24(h) if h <= 23 => h,
            Hours::AM(h) if (1..=12).contains(&h) => h % 12,
            Hours::PM(h) if (1..=12).contains(&h) => h % 12 + 12,
            _ => return Err(Error::InvalidInputData),
        };
        self.set_hour(hour)
    }

    fn set_time(&mut self, time: &NaiveTime) -> Result<(), Self::Error> {
        self.set_hour(time.hour() as u8)?;
        self.set_minute(time.minute() as u8)?;
        self.set_second(time.second() as u8)
    }

    fn set_weekday(&mut self, weekday: u8) -> Result<(), Self::Error> {
        if !(1..=7).contains(&weekday) {
            return Err(Error::InvalidInputData);
        }
        self.set_day_of_week(weekday - 1)
    }

    fn set_day(&mut self, day: u8) -> Result<(), Self::Error> {
        Ds3231::set_day(self, day)
    }

    fn set_month(&mut self, month: u8) -> Result<(), Self::Error> {
        Ds3231::set_month(self, month)
    }

    fn set_year(&mut self, year: u16) -> Result<(), Self::Error> {
        Ds3231::set_year(self, year)
    }

    fn set_date(&mut self, date: &NaiveDate) -> Result<(), Self::Error> {
        if date.year() < 2000 || date.year() > 2099 {
            return Err(Error::InvalidInputData);
        }
        Ds3231::set_year(self, date.year() as u16)?;
        Ds3231::set_month(self, date.month() as u8)?;
        Ds3231::set_day(self, date.day() as u8)?;
        self.set_day_of_week(date.weekday().num_days_from_sunday() as u8)
    }
}

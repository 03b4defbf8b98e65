//! LSM303DLHC magnetometer + accelerometer over I2C.
//!
//! Grounded in `magnetometer.c`'s `init_magnetometer`/`read_magnetometer_data`:
//! same register addresses and configuration bytes (`CTRL_REG1_A = 0x20`,
//! `CTRL_REG4_A = 0x23`, `MR_REG_M = 0x02`, `CRA_REG_M = 0x00`,
//! `CRB_REG_M = 0x01`), same 6-byte burst reads starting at `OUT_X_L_A`
//! (0x28) and `OUT_X_H_M` (0x03). The original's infinite `printf` loop
//! becomes a one-shot `read()` the caller polls, and raw `i2c_write_blocking`
//! calls become one `embedded-hal` `I2c` trait bound.

use embedded_hal::i2c::I2c;

const ACCELEROMETER_ADDR: u8 = 0x19;
const MAGNETOMETER_ADDR: u8 = 0x1E;

/// Raw accelerometer + magnetometer sample, axis units left in sensor LSBs
/// (scaling into physical units depends on the configured full-scale range,
/// which the original never converts either).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImuSample {
    pub accel_x: i16,
    pub accel_y: i16,
    pub accel_z: i16,
    pub mag_x: i16,
    pub mag_y: i16,
    pub mag_z: i16,
}

pub struct Imu<I2C> {
    i2c: I2C,
}

impl<I2C, E> Imu<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Imu { i2c }
    }

    /// `init_magnetometer`'s register-configuration half (the GPIO/I2C bus
    /// setup itself is done once for the whole board in `board.rs`).
    pub fn configure(&mut self) -> Result<(), E> {
        // CTRL_REG1_A: normal power mode, all axes enabled.
        self.i2c.write(ACCELEROMETER_ADDR, &[0x20, 0x27])?;
        // CTRL_REG4_A: +/- 2g full scale, continuous update.
        self.i2c.write(ACCELEROMETER_ADDR, &[0x23, 0x00])?;
        // MR_REG_M: continuous conversion mode.
        self.i2c.write(MAGNETOMETER_ADDR, &[0x02, 0x00])?;
        // CRA_REG_M: 15 Hz output rate.
        self.i2c.write(MAGNETOMETER_ADDR, &[0x00, 0x10])?;
        // CRB_REG_M: +/- 1.3 gauss gain.
        self.i2c.write(MAGNETOMETER_ADDR, &[0x01, 0x20])?;
        Ok(())
    }

    /// One accelerometer + magnetometer read, replacing one iteration of
    /// `read_magnetometer_data`'s loop body.
    pub fn read(&mut self) -> Result<ImuSample, E> {
        let mut accel = [0u8; 6];
        self.i2c.write_read(ACCELEROMETER_ADDR, &[0x28], &mut accel)?;
        let accel_x = i16::from_le_bytes([accel[0], accel[1]]);
        let accel_y = i16::from_le_bytes([accel[2], accel[3]]);
        let accel_z = i16::from_le_bytes([accel[4], accel[5]]);

        let mut mag = [0u8; 6];
        self.i2c.write_read(MAGNETOMETER_ADDR, &[0x03], &mut mag)?;
        let mag_x = i16::from_be_bytes([mag[0], mag[1]]);
        let mag_y = i16::from_be_bytes([mag[2], mag[3]]);
        let mag_z = i16::from_be_bytes([mag[4], mag[5]]);

        Ok(ImuSample {
            accel_x,
            accel_y,
            accel_z,
            mag_x,
            mag_y,
            mag_z,
        })
    }
}

//! Peripheral drivers: one module per sensor/actuator, each a thin typed
//! wrapper over `embedded-hal`/`rp2040-hal` traits, mirroring how the
//! original firmware gave each peripheral its own `driver/<name>/` folder.

pub mod encoder;
pub mod imu;
pub mod irline;
pub mod motor;
pub mod ultrasonic;

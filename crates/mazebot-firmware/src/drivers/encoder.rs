//! Wheel encoder pulse counting and speed estimation.
//!
//! Grounded in `wheel_encoder.c`'s `get_time_diff`/`get_speed`, with the raw
//! millisecond-float arithmetic replaced by typed [`fugit`] durations and the
//! interrupt-driven pulse counter made an explicit piece of state instead of
//! a free-floating global.

use fugit::MicrosDurationU64;

/// Counts encoder pulses and turns the interval between two pulses into a
/// speed estimate, mirroring `get_time_diff`/`get_speed`.
#[derive(Debug, Default)]
pub struct WheelEncoder {
    pulse_count: u32,
    last_pulse_at: Option<MicrosDurationU64>,
    last_interval: Option<MicrosDurationU64>,
    distance_per_pulse_mm: f32,
}

impl WheelEncoder {
    pub fn new(distance_per_pulse_mm: f32) -> Self {
        WheelEncoder {
            pulse_count: 0,
            last_pulse_at: None,
            last_interval: None,
            distance_per_pulse_mm,
        }
    }

    /// Call from the encoder's GPIO interrupt handler with the current
    /// free-running microsecond counter's value.
    pub fn on_pulse(&mut self, now: MicrosDurationU64) {
        if let Some(prev) = self.last_pulse_at {
            self.last_interval = Some(now - prev);
        }
        self.last_pulse_at = Some(now);
        self.pulse_count = self.pulse_count.wrapping_add(1);
    }

    pub fn pulse_count(&self) -> u32 {
        self.pulse_count
    }

    /// `get_speed(time_elapsed, is_pulse=true)`: pulses per second.
    pub fn pulses_per_second(&self) -> Option<f32> {
        self.last_interval.map(|dt| 1_000_000.0 / dt.to_micros() as f32)
    }

    /// `get_speed(time_elapsed, is_pulse=false)`: millimetres per second.
    pub fn mm_per_second(&self) -> Option<f32> {
        self.pulses_per_second()
            .map(|pps| pps * self.distance_per_pulse_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulses_per_second_from_two_pulses() {
        let mut enc = WheelEncoder::new(204.203 / 20.0);
        enc.on_pulse(MicrosDurationU64::micros(0));
        enc.on_pulse(MicrosDurationU64::micros(1_000));
        assert_eq!(enc.pulse_count(), 2);
        assert!((enc.pulses_per_second().unwrap() - 1_000.0).abs() < 1e-3);
    }

    #[test]
    fn no_speed_before_a_second_pulse() {
        let mut enc = WheelEncoder::new(1.0);
        enc.on_pulse(MicrosDurationU64::micros(0));
        assert!(enc.pulses_per_second().is_none());
    }
}

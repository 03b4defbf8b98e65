//! HC-SR04-style ultrasonic ranger.
//!
//! Grounded in `ultrasonic.c`'s `get_pulse`/`get_cm`/`get_inches`: trigger a
//! short pulse, let the echo-pin interrupt latch the pulse width, then
//! convert that width to a distance with the same speed-of-sound divisors
//! the original uses (29 us/cm, 74 us/inch, round trip).
//!
//! The original measures pulse width from a GPIO edge-interrupt ISR
//! (`ultrasonic_pulse_isr`) writing into a global. Here that state is an
//! explicit field the caller's interrupt handler updates via
//! [`UltrasonicSensor::on_edge`], and a timeout abandons a reading that
//! never completes rather than looping on it (`ULTRASONIC_TIMEOUT`).

use embedded_hal::digital::{InputPin, OutputPin};
use fugit::MicrosDurationU32;

/// Rising/falling edge on the echo pin, reported by the caller's interrupt
/// handler together with a free-running microsecond timestamp.
pub enum EchoEdge {
    Rise(MicrosDurationU32),
    Fall(MicrosDurationU32),
}

pub struct UltrasonicSensor<T, E> {
    trig: T,
    echo: E,
    timeout_cycles: u32,
    pulse_start: Option<MicrosDurationU32>,
    pulse_width: Option<MicrosDurationU32>,
    width_cycles: u32,
}

impl<T, E> UltrasonicSensor<T, E>
where
    T: OutputPin,
    E: InputPin,
{
    pub fn new(trig: T, echo: E, timeout_cycles: u32) -> Self {
        UltrasonicSensor {
            trig,
            echo,
            timeout_cycles,
            pulse_start: None,
            pulse_width: None,
            width_cycles: 0,
        }
    }

    /// `ultrasonic_pulse_isr`: call from the echo pin's edge interrupt.
    pub fn on_edge(&mut self, edge: EchoEdge) {
        match edge {
            EchoEdge::Rise(at) => {
                self.pulse_start = Some(at);
                self.width_cycles += 1;
                if self.width_cycles > self.timeout_cycles {
                    #[cfg(not(test))]
                    defmt::warn!(
                        "ultrasonic echo timed out after {} cycles, abandoning pulse",
                        self.width_cycles
                    );
                    self.width_cycles = 0;
                }
            }
            EchoEdge::Fall(at) => {
                if let Some(start) = self.pulse_start {
                    self.pulse_width = Some(at - start);
                }
            }
        }
    }

    /// `get_pulse`: pulse length in microseconds since the last trigger,
    /// then reset the edge counter the way the original zeroes
    /// `g_ultrasonic_data.g_width`.
    pub fn take_pulse_width(&mut self) -> Option<MicrosDurationU32> {
        self.width_cycles = 0;
        self.pulse_width.take()
    }

    /// `get_cm`.
    pub fn distance_cm(&mut self) -> Option<u32> {
        self.take_pulse_width()
            .map(|w| w.to_micros() / 29 / 2)
    }

    /// `get_inches`.
    pub fn distance_inches(&mut self) -> Option<u32> {
        self.take_pulse_width()
            .map(|w| ((w.to_micros() as f32) / 74.0 / 2.0) as u32)
    }

    /// Drive the trigger pin high briefly; the caller is expected to follow
    /// this with a short busy-wait (`sleep_us(ULTRASONIC_TRIG_PULSE_US)`)
    /// before calling [`Self::end_trigger`].
    pub fn begin_trigger(&mut self) {
        let _ = self.trig.set_high();
    }

    pub fn end_trigger(&mut self) {
        let _ = self.trig.set_low();
    }
}

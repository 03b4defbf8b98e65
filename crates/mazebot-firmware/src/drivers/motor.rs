//! Differential-drive motor control: one PWM channel and two direction pins
//! per side.
//!
//! Grounded in `motor_control.c`'s `start_motor`/`update_pwm`/
//! `update_direction`/`move_forward`/`stop`/`reverse`/`turn_left`/
//! `turn_right`, generalized from the original's hard-coded GPIO constants
//! to `embedded-hal` trait objects configured from [`crate::board::BoardConfig`].

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Duty cycle, clamped to `[0.0, 1.0]`, mirroring `update_pwm`'s clamp.
fn clamp_duty(duty_cycle: f32) -> f32 {
    let clamped = duty_cycle.clamp(0.0, 1.0);
    if clamped != duty_cycle {
        #[cfg(not(test))]
        defmt::warn!("motor duty cycle {} out of range, clamped to {}", duty_cycle, clamped);
    }
    clamped
}

/// One side's PWM channel plus its pair of direction pins.
pub struct MotorChannel<P, C, A> {
    pwm: P,
    clockwise: C,
    anticlockwise: A,
}

impl<P, C, A> MotorChannel<P, C, A>
where
    P: SetDutyCycle,
    C: OutputPin,
    A: OutputPin,
{
    pub fn new(pwm: P, clockwise: C, anticlockwise: A) -> Self {
        MotorChannel {
            pwm,
            clockwise,
            anticlockwise,
        }
    }

    /// `update_pwm`: set this channel's duty cycle.
    pub fn set_duty(&mut self, duty_cycle: f32) {
        let duty_cycle = clamp_duty(duty_cycle);
        let max = self.pwm.max_duty_cycle();
        let level = (max as f32 * duty_cycle) as u16;
        let _ = self.pwm.set_duty_cycle(level);
    }

    /// `update_direction`: drive the direction pins for forward rotation.
    pub fn set_clockwise(&mut self) {
        let _ = self.clockwise.set_high();
        let _ = self.anticlockwise.set_low();
    }

    /// `update_direction`: drive the direction pins for reverse rotation.
    pub fn set_anticlockwise(&mut self) {
        let _ = self.clockwise.set_low();
        let _ = self.anticlockwise.set_high();
    }

    pub fn stop_duty(&mut self) {
        self.set_duty(0.0);
    }
}

/// A full differential-drive motor pair, the Rust equivalent of
/// `motor_pins_t` plus the free functions that acted on it.
pub struct MotorPair<P, C, A> {
    pub left: MotorChannel<P, C, A>,
    pub right: MotorChannel<P, C, A>,
}

impl<P, C, A> MotorPair<P, C, A>
where
    P: SetDutyCycle,
    C: OutputPin,
    A: OutputPin,
{
    pub fn new(left: MotorChannel<P, C, A>, right: MotorChannel<P, C, A>) -> Self {
        MotorPair { left, right }
    }

    /// `move_forward`: both motors clockwise at equal, moderate duty.
    pub fn move_forward(&mut self) {
        self.left.set_duty(0.5);
        self.right.set_duty(0.5);
        self.left.set_clockwise();
        self.right.set_clockwise();
    }

    /// `stop`: both motors to zero duty.
    pub fn stop(&mut self) {
        self.left.stop_duty();
        self.right.stop_duty();
    }

    /// `reverse`: both motors anticlockwise at equal, moderate duty.
    pub fn reverse(&mut self) {
        self.left.set_duty(0.5);
        self.right.set_duty(0.5);
        self.left.set_anticlockwise();
        self.right.set_anticlockwise();
    }

    /// `turn_left`: slow the left wheel, counter-rotate on `reverse_turn`.
    pub fn turn_left(&mut self, reverse_turn: bool) {
        self.left.set_duty(0.2);
        self.right.set_duty(0.5);
        if reverse_turn {
            self.left.set_clockwise();
            self.right.set_anticlockwise();
        } else {
            self.left.set_anticlockwise();
            self.right.set_clockwise();
        }
    }

    /// `turn_right`: slow the right wheel, counter-rotate on `reverse_turn`.
    pub fn turn_right(&mut self, reverse_turn: bool) {
        self.left.set_duty(0.5);
        self.right.set_duty(0.2);
        if reverse_turn {
            self.left.set_anticlockwise();
            self.right.set_clockwise();
        } else {
            self.left.set_clockwise();
            self.right.set_anticlockwise();
        }
    }
}

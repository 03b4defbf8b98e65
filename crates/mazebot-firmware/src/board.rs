//! Board-level pin assignments and tuning constants.
//!
//! Rust-native replacement for the original firmware's scattered `#define`
//! constants (`MOTOR_PWM_CLKDIV`, `MOTOR_PWM_WRAP`, `ULTRASONIC_TIMEOUT`,
//! `ENCODER_STEP_TURN_90_DEG`, ...) spread across `motor_control.h`,
//! `ultrasonic.h`, and `pid.h`. Collected into one `Default`-constructible
//! struct so a board revision only has to override what changed.

/// GPIO pin numbers and tuning constants for one physical robot.
#[derive(Clone, Copy, Debug)]
pub struct BoardConfig {
    /// PWM clock divider applied to both drive motors (`MOTOR_PWM_CLKDIV`).
    pub motor_pwm_clkdiv: u8,
    /// PWM wrap value applied to both drive motors (`MOTOR_PWM_WRAP`).
    pub motor_pwm_wrap: u16,

    /// PWM output pin for the left motor.
    pub left_pwm_gpio: u8,
    /// Clockwise direction pin for the left motor.
    pub left_clockwise_gpio: u8,
    /// Anticlockwise direction pin for the left motor.
    pub left_anticlockwise_gpio: u8,
    /// PWM output pin for the right motor.
    pub right_pwm_gpio: u8,
    /// Clockwise direction pin for the right motor.
    pub right_clockwise_gpio: u8,
    /// Anticlockwise direction pin for the right motor.
    pub right_anticlockwise_gpio: u8,

    /// Wheel encoder interrupt pin (`ENCODER_PIN`).
    pub encoder_gpio: u8,
    /// Wheel circumference divided by pulses-per-revolution, in millimetres
    /// per pulse (`DISTANCE_PER_PULSE`).
    pub distance_per_pulse_mm: f32,

    /// Ultrasonic trigger pin.
    pub ultrasonic_trig_gpio: u8,
    /// Ultrasonic echo pin.
    pub ultrasonic_echo_gpio: u8,
    /// Pulse timeout in cycles before a reading is abandoned
    /// (`ULTRASONIC_TIMEOUT`).
    pub ultrasonic_timeout_cycles: u32,

    /// Analog pin reading the IR line/wall sensor array.
    pub ir_adc_gpio: u8,

    /// Encoder pulses to complete a 90 degree turn
    /// (`ENCODER_STEP_TURN_90_DEG`).
    pub encoder_steps_turn_90: u32,
    /// Encoder pulses to complete a 180 degree turn
    /// (`ENCODER_STEP_TURN_180_DEG`).
    pub encoder_steps_turn_180: u32,
    /// Encoder pulses that make up one cell's forward move
    /// (`ENCODER_STEP_MOVE`).
    pub encoder_steps_move: u32,
    /// Encoder pulses spent centering the car before a turn begins
    /// (`ENCODER_CENTER_OFFSET`).
    pub encoder_center_offset: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        // Pin numbers and tuning constants mirror the original firmware's
        // per-driver headers; this is the one board this crate currently
        // targets.
        BoardConfig {
            motor_pwm_clkdiv: 100,
            motor_pwm_wrap: 62_500,

            left_pwm_gpio: 2,
            left_clockwise_gpio: 3,
            left_anticlockwise_gpio: 4,
            right_pwm_gpio: 5,
            right_clockwise_gpio: 6,
            right_anticlockwise_gpio: 7,

            encoder_gpio: 21,
            distance_per_pulse_mm: 204.203 / 20.0,

            ultrasonic_trig_gpio: 14,
            ultrasonic_echo_gpio: 15,
            ultrasonic_timeout_cycles: 26_100,

            ir_adc_gpio: 26,

            encoder_steps_turn_90: 18,
            encoder_steps_turn_180: 36,
            encoder_steps_move: 25,
            encoder_center_offset: 5,
        }
    }
}

//! Turn sequencing: the state machine that turns a single `move(nav, dir)`
//! callback into a multi-tick centre/turn/advance sequence on real motors.
//!
//! Grounded in `pid.c`'s `turn_params_t`/`init_pid_structs`/
//! `navigate_car_turn`: the original ticks this state machine once per
//! encoder pulse, first centering the car (`ENCODER_CENTER_OFFSET` pulses),
//! then turning left or right for a fixed pulse count depending on whether
//! the turn is 90 or 180 degrees, then driving forward for
//! `ENCODER_STEP_MOVE` pulses, then resetting. Closed-loop gain tuning
//! (the actual PID error-correction math in `error_correction.c`) stays out
//! of scope, per the Non-goal on motor control loop tuning — this module
//! only reproduces the open-loop pulse-counted sequencing.

use mazebot_core::grid::{relative_direction, CardinalDirection, RelativeDirection};

use crate::board::BoardConfig;
use crate::drivers::motor::MotorPair;

/// `get_offset_from_nav_direction` / `maze_get_nav_dir_offset`: how the
/// navigator's current orientation must turn to face `target`, expressed as
/// the relative turn the PID sequencer drives towards.
pub fn turns_for(orientation: CardinalDirection, target: CardinalDirection) -> RelativeDirection {
    relative_direction(orientation, target)
}

/// One step of `navigate_car_turn`'s inner switch, i.e. which way the wheels
/// spin while centering/turning for a given relative turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TurnDirection {
    Left,
    Right,
    /// `RelativeDirection::Back`: the original spins left for a 180, same
    /// as a left turn but for twice as many encoder pulses.
    AboutFace,
    /// `RelativeDirection::Front`: no turn needed, go straight to the move
    /// phase.
    None,
}

impl From<RelativeDirection> for TurnDirection {
    fn from(rel: RelativeDirection) -> Self {
        match rel {
            RelativeDirection::Front => TurnDirection::None,
            RelativeDirection::Right => TurnDirection::Right,
            RelativeDirection::Back => TurnDirection::AboutFace,
            RelativeDirection::Left => TurnDirection::Left,
        }
    }
}

/// Mirrors `turn_params_t`'s fields one-for-one.
pub struct TurnSequencer {
    is_turning: bool,
    encoder_step_count: u32,
    turn_direction: TurnDirection,
    is_centered: bool,
    completed_turn: bool,
    moved_cell: bool,
    center_offset: u32,
    steps_turn_90: u32,
    steps_turn_180: u32,
    steps_move: u32,
}

impl TurnSequencer {
    pub fn new(config: &BoardConfig) -> Self {
        TurnSequencer {
            is_turning: false,
            encoder_step_count: 0,
            turn_direction: TurnDirection::None,
            is_centered: false,
            completed_turn: false,
            moved_cell: false,
            center_offset: config.encoder_center_offset,
            steps_turn_90: config.encoder_steps_turn_90,
            steps_turn_180: config.encoder_steps_turn_180,
            steps_move: config.encoder_steps_move,
        }
    }

    /// `init_pid_structs`.
    pub fn reset(&mut self) {
        self.is_turning = false;
        self.encoder_step_count = 0;
        self.turn_direction = TurnDirection::None;
        self.is_centered = false;
        self.completed_turn = false;
        self.moved_cell = false;
    }

    /// Begin sequencing a move towards `target`, relative to the
    /// navigator's current `orientation`.
    pub fn begin(&mut self, orientation: CardinalDirection, target: CardinalDirection) {
        self.reset();
        self.is_turning = true;
        self.turn_direction = TurnDirection::from(turns_for(orientation, target));
    }

    /// Returns `true` once the whole sequence (turn + one-cell move) has
    /// completed. Call this once per encoder pulse, as the original's ISR
    /// did with `navigate_car_turn`.
    pub fn on_encoder_pulse<P, C, A>(&mut self, motors: &mut MotorPair<P, C, A>) -> bool
    where
        P: embedded_hal::pwm::SetDutyCycle,
        C: embedded_hal::digital::OutputPin,
        A: embedded_hal::digital::OutputPin,
    {
        if !self.is_turning {
            return false;
        }
        self.encoder_step_count += 1;

        if !self.is_centered {
            if self.encoder_step_count == self.center_offset {
                self.is_centered = true;
                self.encoder_step_count = 0;
            }
        } else if !self.completed_turn {
            let target_steps = match self.turn_direction {
                TurnDirection::AboutFace => self.steps_turn_180,
                TurnDirection::Left | TurnDirection::Right => self.steps_turn_90,
                TurnDirection::None => 0,
            };
            match self.turn_direction {
                TurnDirection::Left | TurnDirection::AboutFace => motors.turn_left(false),
                TurnDirection::Right => motors.turn_right(false),
                TurnDirection::None => {}
            }
            if self.encoder_step_count >= target_steps {
                self.completed_turn = true;
                self.encoder_step_count = 0;
            }
        } else if !self.moved_cell {
            motors.move_forward();
            if self.encoder_step_count == self.steps_move {
                self.moved_cell = true;
                self.encoder_step_count = 0;
            }
        } else {
            self.reset();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_for_identifies_each_relative_direction() {
        use CardinalDirection::*;
        assert_eq!(turns_for(North, North), RelativeDirection::Front);
        assert_eq!(turns_for(North, East), RelativeDirection::Right);
        assert_eq!(turns_for(North, South), RelativeDirection::Back);
        assert_eq!(turns_for(North, West), RelativeDirection::Left);
    }

    #[test]
    fn sequence_fields_reset_between_moves() {
        let config = BoardConfig::default();
        let mut seq = TurnSequencer::new(&config);
        seq.begin(CardinalDirection::North, CardinalDirection::East);
        assert!(seq.is_turning);
        seq.reset();
        assert!(!seq.is_turning);
        assert!(!seq.is_centered);
        assert!(!seq.completed_turn);
    }
}

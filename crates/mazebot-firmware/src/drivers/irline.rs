//! IR wall/line sensor array.
//!
//! Grounded in `ir_sensor.c`'s `read_line`/`find_wall_directions`: a digital
//! read per side reports whether that side sees a wall, packed into a
//! bitmask (`LEFT_WALL = 8`, `FRONT_WALL = 1`). Barcode decoding
//! (`read_barcode`, `barcode.c`) is a maze-floor calibration feature, not a
//! wall-sensing one, and is left out per the Non-goal on barcode decoding.
//!
//! [`mazebot_core::grid::RelativeGapMask`] is open-bit-set rather than
//! wall-bit-set, so [`IrLineSensor::sense`] inverts each side's wall flag
//! into the corresponding gap flag before returning.

use embedded_hal::digital::InputPin;
use mazebot_core::grid::{RelativeDirection, RelativeGapMask};

pub struct IrLineSensor<F, R, B, L> {
    front: F,
    right: R,
    back: B,
    left: L,
}

impl<F, R, B, L> IrLineSensor<F, R, B, L>
where
    F: InputPin,
    R: InputPin,
    B: InputPin,
    L: InputPin,
{
    pub fn new(front: F, right: R, back: B, left: L) -> Self {
        IrLineSensor {
            front,
            right,
            back,
            left,
        }
    }

    /// `find_wall_directions`, extended to all four sides and inverted to a
    /// gap mask: a high digital read means "wall seen on that side".
    pub fn sense(&mut self) -> RelativeGapMask {
        let mut mask = RelativeGapMask(0);
        let sides = [
            (RelativeDirection::Front, self.front.is_high()),
            (RelativeDirection::Right, self.right.is_high()),
            (RelativeDirection::Back, self.back.is_high()),
            (RelativeDirection::Left, self.left.is_high()),
        ];
        for (rel, wall_seen) in sides {
            let has_wall = wall_seen.unwrap_or_else(|_| {
                #[cfg(not(test))]
                defmt::warn!("ir sensor read failed, assuming no wall on that side");
                false
            });
            if !has_wall {
                mask.0 |= 1 << (rel as u8);
            }
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorType, InputPin};

    struct FixedPin(bool);
    impl ErrorType for FixedPin {
        type Error = core::convert::Infallible;
    }
    impl InputPin for FixedPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }
        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[test]
    fn wall_on_left_and_front_clears_those_gap_bits() {
        let mut sensor = IrLineSensor::new(FixedPin(true), FixedPin(false), FixedPin(false), FixedPin(true));
        let mask = sensor.sense();
        assert!(!mask.is_open(RelativeDirection::Front));
        assert!(mask.is_open(RelativeDirection::Right));
        assert!(mask.is_open(RelativeDirection::Back));
        assert!(!mask.is_open(RelativeDirection::Left));
    }
}

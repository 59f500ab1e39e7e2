const MIN_ANGLE: i16 = 0;
const MAX_ANGLE: i16 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Triangle-wave angle generator over [0, 180]. Starts at 0 moving up,
/// reverses at each bound, clamping when the step does not land exactly on it.
#[derive(Debug, Clone)]
pub struct Sweep {
    angle: u8,
    step: u8,
    direction: Direction,
}

impl Sweep {
    pub fn new(step: u8) -> Self {
        Self {
            angle: 0,
            // A zero step would pin the servo forever; config validation
            // rejects it, but keep the generator total anyway.
            step: step.max(1),
            direction: Direction::Forward,
        }
    }

    pub fn current(&self) -> u8 {
        self.angle
    }

    pub fn advance(&mut self) {
        let delta = match self.direction {
            Direction::Forward => self.step as i16,
            Direction::Backward => -(self.step as i16),
        };
        let next = self.angle as i16 + delta;

        if next >= MAX_ANGLE {
            self.angle = MAX_ANGLE as u8;
            self.direction = Direction::Backward;
        } else if next <= MIN_ANGLE {
            self.angle = MIN_ANGLE as u8;
            self.direction = Direction::Forward;
        } else {
            self.angle = next as u8;
        }
    }

    /// Restart the wave at 0 moving up. Each client session begins here.
    pub fn reset(&mut self) {
        self.angle = 0;
        self.direction = Direction::Forward;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(sweep: &mut Sweep, n: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(sweep.current());
            sweep.advance();
        }
        out
    }

    #[test]
    fn test_full_cycle_is_a_triangle_wave() {
        let mut sweep = Sweep::new(5);
        // 0..=180 up (37 values), 175..=5 down (35 values), then 0 again.
        let angles = take(&mut sweep, 73);

        assert_eq!(angles[0], 0);
        assert_eq!(angles[36], 180);
        assert_eq!(angles[72], 0);
        for pair in angles[..=36].windows(2) {
            assert_eq!(pair[1] as i16 - pair[0] as i16, 5);
        }
        for pair in angles[36..].windows(2) {
            assert_eq!(pair[0] as i16 - pair[1] as i16, 5);
        }
    }

    #[test]
    fn test_angles_stay_in_bounds() {
        let mut sweep = Sweep::new(7);
        for _ in 0..1000 {
            assert!(sweep.current() <= 180);
            sweep.advance();
        }
    }

    #[test]
    fn test_clamps_when_step_overshoots_bound() {
        let mut sweep = Sweep::new(7);
        // 25 steps of 7 pass 175; the next value must clamp to exactly 180.
        let angles = take(&mut sweep, 27);
        assert_eq!(angles[25], 175);
        assert_eq!(angles[26], 180);

        // take() already advanced past the clamped bound.
        assert_eq!(sweep.current(), 173);
    }

    #[test]
    fn test_reset_restarts_from_zero_upward() {
        let mut sweep = Sweep::new(5);
        for _ in 0..50 {
            sweep.advance();
        }
        sweep.reset();
        assert_eq!(sweep.current(), 0);
        sweep.advance();
        assert_eq!(sweep.current(), 5);
    }
}

/// Simulated days added per rendered frame (0.05 simulated hours).
pub const DEFAULT_DAYS_PER_FRAME: f64 = 0.05 / 24.0;

/// Particle step in simulated seconds. Not tied to [`DEFAULT_DAYS_PER_FRAME`].
pub const DEFAULT_PARTICLE_DT: f32 = 1.0 / 60.0;

/// Errors from clock construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClockError {
    #[error("days per frame must be finite and positive, got {0}")]
    InvalidDaysPerFrame(f64),
    #[error("particle dt must be finite and positive, got {0}")]
    InvalidParticleDt(f32),
}

/// Simulated time for one scene.
///
/// Orbital motion is keyed to `global_time_days`; particle motion is keyed to
/// `particle_dt` seconds per frame. The two steps are independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    global_time_days: f64,
    days_per_frame: f64,
    particle_dt: f32,
    frame: u64,
}

impl SimulationClock {
    pub fn new(days_per_frame: f64, particle_dt: f32) -> Result<Self, ClockError> {
        if !days_per_frame.is_finite() || days_per_frame <= 0.0 {
            return Err(ClockError::InvalidDaysPerFrame(days_per_frame));
        }
        if !particle_dt.is_finite() || particle_dt <= 0.0 {
            return Err(ClockError::InvalidParticleDt(particle_dt));
        }
        Ok(Self {
            global_time_days: 0.0,
            days_per_frame,
            particle_dt,
            frame: 0,
        })
    }

    /// Simulated days elapsed since the clock was created.
    pub fn global_time_days(&self) -> f64 {
        self.global_time_days
    }

    pub fn days_per_frame(&self) -> f64 {
        self.days_per_frame
    }

    pub fn particle_dt(&self) -> f32 {
        self.particle_dt
    }

    /// Number of completed frames.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Move forward by exactly one frame.
    pub fn advance(&mut self) {
        self.global_time_days += self.days_per_frame;
        self.frame += 1;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            global_time_days: 0.0,
            days_per_frame: DEFAULT_DAYS_PER_FRAME,
            particle_dt: DEFAULT_PARTICLE_DT,
            frame: 0,
        }
    }
}

/// A component that is advanced once per frame by the scene driver.
///
/// Implementors read the shared clock and write only their own state. The
/// returned value describes what changed so the caller can forward it to the
/// rendering boundary.
pub trait Tickable {
    type Changes;

    fn tick(&mut self, clock: &SimulationClock) -> Self::Changes;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = SimulationClock::default();
        assert_eq!(clock.global_time_days(), 0.0);
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.days_per_frame(), DEFAULT_DAYS_PER_FRAME);
        assert_eq!(clock.particle_dt(), DEFAULT_PARTICLE_DT);
    }

    #[test]
    fn advance_is_monotonic() {
        let mut clock = SimulationClock::default();
        let mut last = clock.global_time_days();
        for _ in 0..100 {
            clock.advance();
            assert!(clock.global_time_days() > last);
            last = clock.global_time_days();
        }
        assert_eq!(clock.frame(), 100);
    }

    #[test]
    fn four_hundred_eighty_frames_is_one_day() {
        let mut clock = SimulationClock::default();
        for _ in 0..480 {
            clock.advance();
        }
        assert!((clock.global_time_days() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_zero_step() {
        assert_eq!(
            SimulationClock::new(0.0, DEFAULT_PARTICLE_DT),
            Err(ClockError::InvalidDaysPerFrame(0.0))
        );
        assert!(matches!(
            SimulationClock::new(DEFAULT_DAYS_PER_FRAME, -1.0),
            Err(ClockError::InvalidParticleDt(_))
        ));
        assert!(SimulationClock::new(f64::NAN, DEFAULT_PARTICLE_DT).is_err());
    }
}

use std::time::Duration;

pub const START_INTERVAL: Duration = Duration::from_micros(75_000);
pub const INTERVAL_STEP: Duration = Duration::from_micros(100);
pub const FLOOR_INTERVAL: Duration = Duration::from_micros(25_000);

/// Inter-tick sleep that shrinks by a fixed step every tick until it hits the floor.
#[derive(Clone, Copy, Debug)]
pub struct DifficultyRamp
{
    interval: Duration,
    step: Duration,
    floor: Duration,
}

impl DifficultyRamp
{
    pub fn new(start: Duration, step: Duration, floor: Duration) -> Self
    {
        Self {
            interval: start.max(floor),
            step,
            floor,
        }
    }

    pub fn interval(&self) -> Duration
    {
        self.interval
    }

    /// Returns the sleep for this tick and tightens the next one.
    pub fn next_interval(&mut self) -> Duration
    {
        let current = self.interval;
        if self.interval > self.floor {
            self.interval = self.interval.saturating_sub(self.step).max(self.floor);
            if self.interval == self.floor {
                log::debug!("tick interval reached its floor of {:?}", self.floor);
            }
        }
        current
    }

    /// Ticks until the interval stops shrinking.
    pub fn ticks_to_floor(&self) -> u64
    {
        if self.step.is_zero() {
            return 0;
        }
        let gap = self.interval.saturating_sub(self.floor).as_nanos();
        gap.div_ceil(self.step.as_nanos()) as u64
    }
}

impl Default for DifficultyRamp
{
    fn default() -> Self
    {
        Self::new(START_INTERVAL, INTERVAL_STEP, FLOOR_INTERVAL)
    }
}

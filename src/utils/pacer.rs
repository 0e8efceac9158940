use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps consecutive frames at least `frametime` apart.
pub struct Pacer {
    target_frametime: Duration,
    frame_timer: Option<Instant>,
}

impl Pacer {
    pub fn new(target_frametime: Duration) -> Self {
        Self {
            target_frametime,
            frame_timer: None,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn unlimited() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Sleeps for whatever is left of the target frame time since the
    /// previous call. The first call waits the full frame time.
    pub fn delay(&mut self) {
        let elapsed = self.frame_timer.map_or(Duration::ZERO, |t| t.elapsed());
        if self.target_frametime > elapsed {
            sleep(self.target_frametime - elapsed);
        }
        self.frame_timer = Some(Instant::now());
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::from_millis(1000)
    }
}

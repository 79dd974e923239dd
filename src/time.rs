//! Frame clock: converts `performance.now()` timestamps into fixed ticks.
//!
//! `draw_web()` runs at the display's refresh rate. Animation timers (tap
//! flash, toast lifetime, level-up highlight) count in whole ticks instead,
//! so they behave the same on a 60Hz phone and a 144Hz monitor.

/// Game ticks per real-time second.
pub const TICKS_PER_SEC: u32 = 10;

/// Longest frame gap honoured, in ms. A backgrounded tab resumes without a burst.
const MAX_FRAME_GAP_MS: f64 = 500.0;

pub struct TickClock {
    ms_per_tick: f64,
    /// Milliseconds not yet turned into ticks.
    carry_ms: f64,
    last_timestamp: Option<f64>,
    /// Clamped length of the most recent frame.
    last_frame_ms: f64,
}

impl TickClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec.max(1) as f64,
            carry_ms: 0.0,
            last_timestamp: None,
            last_frame_ms: 0.0,
        }
    }

    /// Record a frame at `now_ms` and return the whole ticks that elapsed.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let frame_ms = self
            .last_timestamp
            .map_or(0.0, |prev| (now_ms - prev).clamp(0.0, MAX_FRAME_GAP_MS));
        self.last_timestamp = Some(now_ms);
        self.last_frame_ms = frame_ms;

        self.carry_ms += frame_ms;
        let ticks = (self.carry_ms / self.ms_per_tick) as u32;
        self.carry_ms -= ticks as f64 * self.ms_per_tick;
        ticks
    }

    /// Length of the last frame in whole milliseconds, for effect timing.
    pub fn last_frame_ms(&self) -> u32 {
        self.last_frame_ms as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_returns_zero_ticks() {
        let mut clock = TickClock::new(TICKS_PER_SEC);
        assert_eq!(clock.advance(1234.0), 0);
        assert_eq!(clock.last_frame_ms(), 0);
    }

    #[test]
    fn remainder_carries_between_frames() {
        let mut clock = TickClock::new(10);
        clock.advance(0.0);
        assert_eq!(clock.advance(150.0), 1);
        assert_eq!(clock.advance(200.0), 1); // 50ms carried + 50ms
        assert_eq!(clock.last_frame_ms(), 50);
    }

    #[test]
    fn long_gap_is_clamped() {
        let mut clock = TickClock::new(10);
        clock.advance(0.0);
        assert_eq!(clock.advance(10_000.0), 5);
        assert_eq!(clock.last_frame_ms(), 500);
    }

    #[test]
    fn clock_going_backwards_yields_nothing() {
        let mut clock = TickClock::new(10);
        clock.advance(1000.0);
        assert_eq!(clock.advance(900.0), 0);
        assert_eq!(clock.advance(1000.0), 1);
    }

    #[test]
    fn steady_60fps_gives_about_ten_ticks_per_second() {
        let mut clock = TickClock::new(10);
        clock.advance(0.0);
        let total: u32 = (1..=60).map(|i| clock.advance(i as f64 * 16.667)).sum();
        assert!((9..=11).contains(&total), "expected ~10 ticks, got {}", total);
    }
}

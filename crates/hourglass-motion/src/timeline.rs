//! Timed keyframe sequences and their repetition.

use crate::easing::Easing;

/// Duration of every leg of both hourglass loops.
pub const LEG_DURATION_MS: u32 = 1200;

/// How far the sand mask travels, in view-box units.
pub const SAND_TRAVEL: f32 = 34.0;

/// Timing of the rotation legs: overshoot and settle.
pub const ROTATION_TIMING: TimingConfig = TimingConfig {
    duration_ms: LEG_DURATION_MS,
    easing: Easing::elastic(1.0),
};

/// Timing of the sand legs: slow start, then a trickle that tapers off.
pub const SAND_TIMING: TimingConfig = TimingConfig {
    duration_ms: LEG_DURATION_MS,
    easing: Easing::bezier(1.0, 0.2, 0.47, 0.97),
};

/// Duration and easing of one interpolation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    pub duration_ms: u32,
    pub easing: Easing,
}

/// One step of a sequence: interpolate to `target` with `timing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub target: f32,
    pub timing: TimingConfig,
}

/// A start value followed by legs played back to back.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    start: f32,
    legs: Vec<Leg>,
}

impl Sequence {
    pub fn new(start: f32) -> Self {
        Self {
            start,
            legs: Vec::new(),
        }
    }

    /// Append a leg (builder pattern).
    pub fn then(mut self, target: f32, timing: TimingConfig) -> Self {
        self.legs.push(Leg { target, timing });
        self
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Value once every leg has played.
    pub fn end_value(&self) -> f32 {
        self.legs.last().map_or(self.start, |leg| leg.target)
    }

    /// Total duration of all legs.
    pub fn duration_ms(&self) -> u64 {
        self.legs
            .iter()
            .map(|leg| u64::from(leg.timing.duration_ms))
            .sum()
    }

    /// Value at `elapsed_ms` after the sequence started. Before the first
    /// leg this is the start value, after the last leg the end value.
    pub fn sample(&self, elapsed_ms: u64) -> f32 {
        let mut from = self.start;
        let mut leg_start = 0u64;

        for leg in &self.legs {
            let duration = u64::from(leg.timing.duration_ms);
            if elapsed_ms < leg_start + duration {
                let progress = (elapsed_ms - leg_start) as f32 / duration as f32;
                let eased = leg.timing.easing.apply(progress);
                return from + (leg.target - from) * eased;
            }
            from = leg.target;
            leg_start += duration;
        }

        from
    }

    /// `(time, value)` at the start and at the end of every leg.
    pub fn breakpoints(&self) -> Vec<(u64, f32)> {
        let mut points = Vec::with_capacity(self.legs.len() + 1);
        points.push((0, self.start));

        let mut at = 0u64;
        for leg in &self.legs {
            at += u64::from(leg.timing.duration_ms);
            points.push((at, leg.target));
        }
        points
    }
}

/// How many times a [`Repeat`] plays its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iterations {
    Forever,
    Times(u32),
}

/// A sequence played over and over. Each iteration restarts from the
/// sequence's start value.
#[derive(Debug, Clone, PartialEq)]
pub struct Repeat {
    sequence: Sequence,
    iterations: Iterations,
}

impl Repeat {
    pub fn forever(sequence: Sequence) -> Self {
        Self {
            sequence,
            iterations: Iterations::Forever,
        }
    }

    pub fn times(sequence: Sequence, count: u32) -> Self {
        Self {
            sequence,
            iterations: Iterations::Times(count),
        }
    }

    /// Length of one iteration.
    pub fn period_ms(&self) -> u64 {
        self.sequence.duration_ms()
    }

    /// Value at `elapsed_ms` after the first iteration started.
    ///
    /// The exact end of an iteration reports that iteration's final value;
    /// the next iteration takes over right after it. A bounded repeat holds
    /// its final value once done.
    pub fn sample(&self, elapsed_ms: u64) -> f32 {
        let period = self.period_ms();
        if period == 0 {
            return self.sequence.end_value();
        }

        let iteration = elapsed_ms / period;
        let local = elapsed_ms % period;

        if let Iterations::Times(count) = self.iterations {
            if count == 0 {
                return self.sequence.start();
            }
            if iteration >= u64::from(count) {
                return self.sequence.end_value();
            }
        }

        if local == 0 && iteration > 0 {
            return self.sequence.end_value();
        }
        self.sequence.sample(local)
    }
}

/// Rotation legs: 0° → 180° → 0° → -180°.
pub fn rotation_sequence() -> Sequence {
    Sequence::new(0.0)
        .then(180.0, ROTATION_TIMING)
        .then(0.0, ROTATION_TIMING)
        .then(-180.0, ROTATION_TIMING)
}

/// Sand legs: hold at 0, rise to [`SAND_TRAVEL`], fall back to 0.
///
/// The hold keeps the sand loop as long as the rotation loop.
pub fn sand_sequence() -> Sequence {
    Sequence::new(0.0)
        .then(0.0, SAND_TIMING)
        .then(SAND_TRAVEL, SAND_TIMING)
        .then(0.0, SAND_TIMING)
}

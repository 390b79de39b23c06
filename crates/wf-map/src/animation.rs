//! Looping map animations driven by one tick step.
//!
//! Each animated entity owns a [`LoopClock`]. The [`Animator`] advances all
//! of them from the same elapsed time; a clock that reaches its period wraps
//! to the start, so every loop repeats until the animator is dropped.

use std::time::Duration;

use serde::Serialize;

use crate::geometry::Point;
use crate::scene::Scene;

pub const PULSE_PERIOD: Duration = Duration::from_millis(1500);
pub const PULSE_START_RADIUS: f64 = 12.0;
pub const PULSE_END_RADIUS: f64 = 30.0;
pub const PULSE_START_OPACITY: f64 = 0.4;

/// A clock that wraps around every `period`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopClock {
    period: Duration,
    elapsed: Duration,
}

impl LoopClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        let period = self.period.as_nanos();
        if period == 0 {
            return;
        }
        let total = self.elapsed.as_nanos() + dt.as_nanos();
        // Remainder is below the period, which fits in a Duration.
        self.elapsed = Duration::from_nanos(u64::try_from(total % period).unwrap_or(0));
    }

    /// Position within the current cycle, in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        if self.period.is_zero() {
            return 0.0;
        }
        self.elapsed.as_secs_f64() / self.period.as_secs_f64()
    }
}

/// Cubic ease-in-out.
fn ease_cubic(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Expanding, fading ring around the vehicle.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PulseRing {
    pub center: Point,
    pub radius: f64,
    pub opacity: f64,
}

impl PulseRing {
    pub fn at(center: Point, progress: f64) -> Self {
        let k = ease_cubic(progress.clamp(0.0, 1.0));
        Self {
            center,
            radius: PULSE_START_RADIUS + (PULSE_END_RADIUS - PULSE_START_RADIUS) * k,
            opacity: PULSE_START_OPACITY * (1.0 - k),
        }
    }
}

/// A marker travelling along one road at constant speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowDot {
    pub road: usize,
    pub clock: LoopClock,
}

/// Where a flow dot is in the current frame.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct DotSample {
    pub road: usize,
    pub position: Point,
}

/// Sampled state of every animation at one instant.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    pub pulse: PulseRing,
    pub dots: Vec<DotSample>,
}

/// Per-entity clocks for one scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    pulse: LoopClock,
    dots: Vec<FlowDot>,
}

impl Animator {
    /// Fresh clocks for `scene`: one pulse, one flow dot per congested road.
    pub fn for_scene(scene: &Scene) -> Self {
        let dots = scene
            .roads
            .iter()
            .filter_map(|road| {
                road.flow.map(|speed| FlowDot {
                    road: road.index,
                    clock: LoopClock::new(speed.traversal()),
                })
            })
            .collect();
        Self {
            pulse: LoopClock::new(PULSE_PERIOD),
            dots,
        }
    }

    /// Advance every clock by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.pulse.advance(dt);
        for dot in &mut self.dots {
            dot.clock.advance(dt);
        }
    }

    /// Sample the animations against the scene they were built for.
    pub fn frame(&self, scene: &Scene) -> AnimationFrame {
        let dots = self
            .dots
            .iter()
            .filter_map(|dot| {
                let road = scene.roads.get(dot.road)?;
                let position = road.path.point_at_fraction(dot.clock.progress())?;
                Some(DotSample {
                    road: dot.road,
                    position,
                })
            })
            .collect();
        AnimationFrame {
            pulse: PulseRing::at(scene.vehicle, self.pulse.progress()),
            dots,
        }
    }
}

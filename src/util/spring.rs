// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Damped spring smoothing for the scroll progress signal.
//!
//! Raw scroll offsets arrive as discrete jumps; the hero animation reads
//! them through this spring so frame changes glide instead of stepping.
//! Constants match the original tuning (stiffness 100, damping 30, rest
//! delta 0.001) which is overdamped, so the value never overshoots.

/// Integration step; keeps explicit Euler stable for this stiffness.
const MAX_STEP: f32 = 1.0 / 240.0;

#[derive(Debug, Clone)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
    rest_delta: f32,
}

impl Spring {
    /// Spring at rest at `initial`.
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            stiffness: 100.0,
            damping: 30.0,
            rest_delta: 0.001,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Advance the spring by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let mut remaining = dt.clamp(0.0, 0.1);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let accel = self.stiffness * (self.target - self.value) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        // Snap to rest once within the rest delta.
        if (self.target - self.value).abs() < self.rest_delta && self.velocity.abs() < self.rest_delta
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// True once the spring has snapped onto its target.
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }
}

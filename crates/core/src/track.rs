// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracked-object data model

use std::time::Instant;

/// Geographic position of a tracked object
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
    pub alt_m: f64,
}

/// Velocity of a tracked object
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Velocity {
    pub speed_mps: f64,
    pub heading_deg: f64,
}

/// A single externally-sensed moving entity
///
/// Refreshed each poll tick when present in the snapshot; absence from a
/// snapshot means logically gone for that tick.
#[derive(Clone, Debug)]
pub struct TrackedObject {
    /// Stable identifier assigned by the sensor
    pub id: String,
    pub position: Position,
    pub velocity: Velocity,
    /// When the sensor last refreshed this track
    pub last_update: Instant,
}

impl TrackedObject {
    pub fn new(id: impl Into<String>, position: Position, last_update: Instant) -> Self {
        Self {
            id: id.into(),
            position,
            velocity: Velocity {
                speed_mps: 0.0,
                heading_deg: 0.0,
            },
            last_update,
        }
    }

    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }
}

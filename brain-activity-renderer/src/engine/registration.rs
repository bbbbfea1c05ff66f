//! Bounding-box registration of electrode space into mesh space.
//!
//! Each axis is rescaled on its own so that the source box lands exactly on
//! the target box. The mapping is affine per axis and may stretch the cloud
//! anisotropically when the two boxes have different aspect ratios.

use std::collections::BTreeMap;
use std::fmt;

use bevy::prelude::*;

use crate::engine::assets::bounds::BoundingBox;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Outcome of a registration pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registration {
    points: usize,
    degenerate_axes: Vec<Axis>,
}

impl Registration {
    pub fn points(&self) -> usize {
        self.points
    }

    /// Source axes with no extent. Every point was placed on the target
    /// midpoint along these axes.
    pub fn degenerate_axes(&self) -> &[Axis] {
        &self.degenerate_axes
    }
}

/// Map one coordinate from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// A source range with no extent maps everything to the target midpoint.
pub fn remap_axis(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    let from_extent = from_max - from_min;
    if from_extent <= 0.0 {
        return (to_min + to_max) * 0.5;
    }
    to_min + ((value - from_min) / from_extent) * (to_max - to_min)
}

/// Rewrite every point in place from the `from` box into the `to` box.
pub fn register_points(
    points: &mut BTreeMap<String, Vec3>,
    from: &BoundingBox,
    to: &BoundingBox,
) -> Registration {
    if points.is_empty() {
        return Registration::default();
    }

    let degenerate_axes = Axis::ALL
        .into_iter()
        .filter(|axis| from.max[axis.index()] - from.min[axis.index()] <= 0.0)
        .collect();

    for position in points.values_mut() {
        *position = register_point(*position, from, to);
    }

    Registration {
        points: points.len(),
        degenerate_axes,
    }
}

pub fn register_point(point: Vec3, from: &BoundingBox, to: &BoundingBox) -> Vec3 {
    Vec3::new(
        remap_axis(point.x, from.min.x, from.max.x, to.min.x, to.max.x),
        remap_axis(point.y, from.min.y, from.max.y, to.min.y, to.max.y),
        remap_axis(point.z, from.min.z, from.max.z, to.min.z, to.max.z),
    )
}

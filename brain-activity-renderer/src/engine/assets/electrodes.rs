use std::collections::BTreeMap;

use bevy::prelude::*;

use super::bounds::BoundingBox;
use crate::engine::registration::{Registration, register_points};

/// Electrode sites keyed by label.
///
/// Positions start out in electrode space as captured. After
/// [`ElectrodeSet::register_into`] they are in mesh space and the captured
/// coordinates are gone.
#[derive(Debug, Clone, Default)]
pub struct ElectrodeSet {
    positions: BTreeMap<String, Vec3>,
    bounds: BoundingBox,
}

impl ElectrodeSet {
    pub fn from_positions(positions: BTreeMap<String, Vec3>) -> Self {
        let bounds = BoundingBox::from_points(positions.values());
        Self { positions, bounds }
    }

    pub fn positions(&self) -> &BTreeMap<String, Vec3> {
        &self.positions
    }

    pub fn position(&self, label: &str) -> Option<Vec3> {
        self.positions.get(label).copied()
    }

    /// Bounds of the positions in their current coordinate space.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Remap every position so that the set's bounds coincide with `target`.
    pub fn register_into(&mut self, target: &BoundingBox) -> Registration {
        let registration = register_points(&mut self.positions, &self.bounds, target);
        self.bounds = if self.positions.is_empty() {
            BoundingBox::empty()
        } else {
            *target
        };
        registration
    }
}

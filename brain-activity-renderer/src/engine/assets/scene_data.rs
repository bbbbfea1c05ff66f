use bevy::prelude::*;

use super::activity::ActivitySet;
use super::brain_mesh::BrainMesh;
use super::electrodes::ElectrodeSet;

/// Electrode that has an activity entry and therefore gets drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawableElectrode<'a> {
    pub label: &'a str,
    pub position: Vec3,
    pub activity: f32,
}

/// Registered datasets owned by the render layer for the process lifetime.
#[derive(Resource, Debug, Clone)]
pub struct SceneData {
    pub mesh: BrainMesh,
    pub electrodes: ElectrodeSet,
    pub activity: ActivitySet,
}

impl SceneData {
    /// Pivot of the scene view and of the mesh orientation correction.
    pub fn mesh_centre(&self) -> Vec3 {
        self.mesh.bounds.centre()
    }

    /// Electrodes in label order, skipping any without an activity value.
    pub fn drawable_electrodes(&self) -> impl Iterator<Item = DrawableElectrode<'_>> + '_ {
        self.electrodes
            .positions()
            .iter()
            .filter_map(|(label, position)| {
                self.activity.get(label).map(|activity| DrawableElectrode {
                    label: label.as_str(),
                    position: *position,
                    activity,
                })
            })
    }
}

use std::path::PathBuf;

use bevy::prelude::*;
use constants::paths::{ACTIVITY_VALUES_PATH, BRAIN_MODEL_PATH, ELECTRODE_POSITIONS_PATH};

use super::error::LoadError;
use super::mesh_loader::load_brain_mesh;
use super::point_set_loader::{load_activity_values, load_electrode_positions};
use crate::engine::assets::scene_data::SceneData;

/// Locations of the three scene inputs.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneSources {
    pub brain_model: PathBuf,
    pub electrode_positions: PathBuf,
    pub activity_values: PathBuf,
}

impl Default for SceneSources {
    fn default() -> Self {
        Self {
            brain_model: PathBuf::from(BRAIN_MODEL_PATH),
            electrode_positions: PathBuf::from(ELECTRODE_POSITIONS_PATH),
            activity_values: PathBuf::from(ACTIVITY_VALUES_PATH),
        }
    }
}

/// Load every input and register the electrodes into mesh space.
///
/// Runs once, synchronously, before the event loop starts.
pub fn load_scene(sources: &SceneSources) -> Result<SceneData, LoadError> {
    let mesh = load_brain_mesh(&sources.brain_model)?;
    let mut electrodes = load_electrode_positions(&sources.electrode_positions)?;

    let registration = electrodes.register_into(&mesh.bounds);
    for axis in registration.degenerate_axes() {
        warn!(
            "Electrode positions have no extent along {axis}; placing them on the mesh midpoint"
        );
    }
    info!(
        "Registered {} electrodes into mesh bounds {} .. {}",
        registration.points(),
        mesh.bounds.min,
        mesh.bounds.max
    );

    let activity = load_activity_values(&sources.activity_values)?;
    let unmatched = electrodes
        .positions()
        .keys()
        .filter(|label| activity.get(label).is_none())
        .count();
    if unmatched > 0 {
        info!("{unmatched} electrodes have no activity value and will not be drawn");
    }

    Ok(SceneData {
        mesh,
        electrodes,
        activity,
    })
}

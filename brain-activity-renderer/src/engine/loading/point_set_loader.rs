use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bevy::prelude::*;
use serde::de::DeserializeOwned;

use super::error::LoadError;
use crate::engine::assets::activity::ActivitySet;
use crate::engine::assets::electrodes::ElectrodeSet;

/// `{ "<label>": [x, y, z] }` as captured by the digitiser.
type RawElectrodePositions = BTreeMap<String, [f32; 3]>;

/// `{ "<label>": value }` before normalisation.
type RawActivityValues = BTreeMap<String, f32>;

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_json<T: DeserializeOwned>(reader: impl Read, source: &Path) -> Result<T, LoadError> {
    serde_json::from_reader(reader).map_err(|err| LoadError::Json {
        path: source.to_path_buf(),
        source: err,
    })
}

pub fn load_electrode_positions(path: &Path) -> Result<ElectrodeSet, LoadError> {
    info!("Loading electrode positions from {}", path.display());
    read_electrode_positions(open(path)?, path)
}

pub fn read_electrode_positions(reader: impl Read, source: &Path) -> Result<ElectrodeSet, LoadError> {
    let raw: RawElectrodePositions = parse_json(reader, source)?;
    let positions = raw
        .into_iter()
        .map(|(label, xyz)| (label, Vec3::from_array(xyz)))
        .collect();

    let electrodes = ElectrodeSet::from_positions(positions);
    info!("Loaded {} electrodes", electrodes.len());
    Ok(electrodes)
}

pub fn load_activity_values(path: &Path) -> Result<ActivitySet, LoadError> {
    info!("Loading activity values from {}", path.display());
    read_activity_values(open(path)?, path)
}

pub fn read_activity_values(reader: impl Read, source: &Path) -> Result<ActivitySet, LoadError> {
    let raw: RawActivityValues = parse_json(reader, source)?;

    let activity = ActivitySet::normalised(raw);
    info!(
        "Loaded {} activity values. Max was {}",
        activity.len(),
        activity.max_raw()
    );
    Ok(activity)
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::engine::assets::brain_mesh::MeshError;

/// Failure to bring one of the three scene sources into memory.
///
/// Always fatal: the viewer exits before any window is shown.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to parse mesh {}: {source}", .path.display())]
    Mesh {
        path: PathBuf,
        source: tobj::LoadError,
    },

    #[error("invalid mesh {}: {source}", .path.display())]
    InvalidMesh { path: PathBuf, source: MeshError },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Source file the failure refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Open { path, .. }
            | LoadError::Mesh { path, .. }
            | LoadError::InvalidMesh { path, .. }
            | LoadError::Json { path, .. } => path,
        }
    }
}

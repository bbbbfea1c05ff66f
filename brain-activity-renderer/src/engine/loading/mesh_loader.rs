use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bevy::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};

use super::error::LoadError;
use crate::engine::assets::brain_mesh::{BrainMesh, MeshShape};

fn obj_load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

/// Load the anatomical mesh from an OBJ file.
pub fn load_brain_mesh(path: &Path) -> Result<BrainMesh, LoadError> {
    info!("Loading brain model from {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let material_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();

    // Materials are parsed for completeness but the cortex is drawn in one colour.
    read_brain_mesh(&mut BufReader::new(file), path, move |mtl| {
        tobj::load_mtl(material_dir.join(mtl))
    })
}

/// Parse OBJ text from any buffered reader. `source` names it in errors.
pub fn read_brain_mesh<R, ML>(
    reader: &mut R,
    source: &Path,
    material_loader: ML,
) -> Result<BrainMesh, LoadError>
where
    R: BufRead,
    ML: Fn(&Path) -> tobj::MTLLoadResult,
{
    let (models, _materials) = tobj::load_obj_buf(reader, &obj_load_options(), material_loader)
        .map_err(|err| LoadError::Mesh {
            path: source.to_path_buf(),
            source: err,
        })?;

    let total_corners: usize = models.iter().map(|model| model.mesh.indices.len()).sum();

    // Expand triangle corners with progress tracking.
    let pb = ProgressBar::new(total_corners as u64);
    pb.set_style(
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} corners ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("▉▊▋▌▍▎▏ "),
    );
    pb.set_message("Expanding mesh");

    let shapes = models.iter().map(|model| MeshShape {
        positions: &model.mesh.positions,
        corners: &model.mesh.indices,
    });
    let mesh = BrainMesh::from_shapes(shapes, || pb.inc(1));
    pb.finish_and_clear();

    let mesh = mesh.map_err(|err| LoadError::InvalidMesh {
        path: source.to_path_buf(),
        source: err,
    })?;

    info!(
        "Loaded {} vertices ({} triangles) from {} shapes",
        mesh.vertex_count(),
        mesh.triangle_count(),
        models.len()
    );
    Ok(mesh)
}

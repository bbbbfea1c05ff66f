use bevy::math::Vec3;

/// Axis of both 180° orientation corrections applied to the brain mesh.
/// The source asset is modelled with its up axis opposite to the viewer's.
pub const ORIENTATION_CORRECTION_AXIS: Vec3 = Vec3::X;

/// Angle of the orbit-space correction, applied after the user orbit.
pub const ORBIT_ORIENTATION_CORRECTION_DEGREES: f32 = 180.0;

/// Angle of the mesh-local correction, pivoting on the mesh bounds centre.
pub const MESH_ORIENTATION_CORRECTION_DEGREES: f32 = 180.0;

/// Anatomical mesh, relative to the working directory.
pub const BRAIN_MODEL_PATH: &str = "models/Brain_Model.obj";

/// JSON object mapping electrode label to `[x, y, z]` in electrode space.
pub const ELECTRODE_POSITIONS_PATH: &str = "electrode_positions.json";

/// JSON object mapping electrode label to a raw activity value.
pub const ACTIVITY_VALUES_PATH: &str = "activity.json";

use std::collections::BTreeMap;

/// Activity per electrode label, normalised against the largest raw value.
#[derive(Debug, Clone, Default)]
pub struct ActivitySet {
    values: BTreeMap<String, f32>,
    max_raw: f32,
}

impl ActivitySet {
    /// Divide every value by the largest raw value when that maximum is
    /// positive. The maximum is folded from zero, so a set with no positive
    /// entry passes through unchanged.
    pub fn normalised(mut values: BTreeMap<String, f32>) -> Self {
        let max_raw = values.values().copied().fold(0.0_f32, f32::max);

        if max_raw > 0.0 {
            for value in values.values_mut() {
                *value /= max_raw;
            }
        }

        Self { values, max_raw }
    }

    pub fn get(&self, label: &str) -> Option<f32> {
        self.values.get(label).copied()
    }

    pub fn values(&self) -> &BTreeMap<String, f32> {
        &self.values
    }

    /// Largest raw value seen, or zero if none was positive.
    pub fn max_raw(&self) -> f32 {
        self.max_raw
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

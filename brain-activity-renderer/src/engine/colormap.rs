//! Blue → green → red heat ramp for normalised electrode activity.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityColour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ActivityColour {
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<ActivityColour> for Color {
    fn from(colour: ActivityColour) -> Self {
        Color::srgb(colour.r, colour.g, colour.b)
    }
}

/// Map a normalised activity value onto the heat ramp.
///
/// The value is clamped to `[0, 1]` and square-rooted before the lookup so
/// that low activity already shows a visible hue shift.
pub fn activity_to_colour(value: f32) -> ActivityColour {
    let boosted = value.clamp(0.0, 1.0).sqrt();

    if boosted < 0.5 {
        let g = boosted * 2.0;
        ActivityColour {
            r: 0.0,
            g,
            b: 1.0 - g,
        }
    } else {
        let r = (boosted - 0.5) * 2.0;
        ActivityColour {
            r,
            g: 1.0 - r,
            b: 0.0,
        }
    }
}

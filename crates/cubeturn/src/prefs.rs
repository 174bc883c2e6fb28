//! Engine preferences.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::{ColorScheme, CubeGeometry, EngineError, Interpolation};

const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    /// Preferences bundled with the engine.
    pub static ref DEFAULT_PREFS: EnginePreferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// Tunable parameters of the engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EnginePreferences {
    /// Duration of one layer twist, in seconds.
    pub twist_duration: f32,
    /// Easing curve for layer twists.
    pub interpolation: Interpolation,
    /// Maximum distance from the outer layer coordinate at which a cubelet is
    /// still considered part of that layer.
    pub layer_tolerance: f32,
    /// Size and spacing of the cubelets.
    pub geometry: CubeGeometry,
    /// Sticker colors.
    pub colors: ColorScheme,
}
impl Default for EnginePreferences {
    fn default() -> Self {
        Self {
            twist_duration: 0.2,
            interpolation: Interpolation::default(),
            layer_tolerance: 0.1,
            geometry: CubeGeometry::default(),
            colors: ColorScheme::default(),
        }
    }
}
impl EnginePreferences {
    /// Loads preferences from YAML. Missing fields take their default values.
    pub fn from_yaml(s: &str) -> Result<Self, EngineError> {
        let prefs: Self =
            serde_norway::from_str(s).map_err(|e| EngineError::Prefs(e.to_string()))?;
        prefs.validate()?;
        Ok(prefs)
    }
    /// Serializes preferences to YAML.
    pub fn to_yaml(&self) -> Result<String, EngineError> {
        serde_norway::to_string(self).map_err(|e| EngineError::Prefs(e.to_string()))
    }

    /// Checks that layers can be told apart with these settings: the
    /// distance between neighboring cubelets must be positive, and the layer
    /// tolerance must be positive and less than half that distance.
    pub fn validate(&self) -> Result<(), EngineError> {
        let pitch = self.geometry.pitch();
        if !(self.geometry.cubelet_size > 0.0 && pitch.is_finite() && pitch > 0.0) {
            return Err(EngineError::Prefs(format!(
                "cubelet size {} and spacing {} do not give a positive distance between cubelets",
                self.geometry.cubelet_size, self.geometry.spacing,
            )));
        }
        let tolerance = self.layer_tolerance;
        if !(tolerance > 0.0 && tolerance < pitch / 2.0) {
            return Err(EngineError::Prefs(format!(
                "layer tolerance {tolerance} must be between 0 and {}",
                pitch / 2.0,
            )));
        }
        Ok(())
    }

    /// Returns the duration of one layer twist. Negative or non-finite values
    /// make twists instant.
    pub fn twist_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.twist_duration).unwrap_or(Duration::ZERO)
    }
}

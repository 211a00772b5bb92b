//! Parameters for hide-key generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point the affected vertices shrink toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CenterMode {
    /// Mean position of the affected vertices.
    #[default]
    Centroid,
    /// The object's local origin.
    Origin,
}

/// Parameters for [`GenerateHideKey`](crate::operations::GenerateHideKey).
///
/// # Examples
///
/// ```
/// use material_hide::config::{CenterMode, HideKeyConfig};
///
/// let config = HideKeyConfig::new()
///     .with_key_name("  ")
///     .with_shrink_factor(1.5)
///     .with_center_mode(CenterMode::Origin);
///
/// assert_eq!(config.resolved_key_name(), "Hidden");
/// assert_eq!(config.clamped_factor(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HideKeyConfig {
    /// Name of the created shape key. Blank names fall back to
    /// [`DEFAULT_KEY_NAME`](Self::DEFAULT_KEY_NAME).
    pub key_name: String,

    /// Scale of the part when hidden, in `[0, 1]` (default: 0.01).
    ///
    /// 0 collapses the part to the center point, 1 leaves it unmoved.
    pub shrink_factor: f64,

    /// Shrink center (default: [`CenterMode::Centroid`]).
    pub center_mode: CenterMode,
}

impl HideKeyConfig {
    /// Key name used when the configured one is blank.
    pub const DEFAULT_KEY_NAME: &'static str = "Hidden";

    /// Default shrink factor.
    pub const DEFAULT_SHRINK_FACTOR: f64 = 0.01;

    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_key_name(mut self, name: impl Into<String>) -> Self {
        self.key_name = name.into();
        self
    }

    #[must_use]
    pub fn with_shrink_factor(mut self, factor: f64) -> Self {
        self.shrink_factor = factor;
        self
    }

    #[must_use]
    pub fn with_center_mode(mut self, mode: CenterMode) -> Self {
        self.center_mode = mode;
        self
    }

    /// The trimmed key name, or `"Hidden"` if it is blank.
    #[must_use]
    pub fn resolved_key_name(&self) -> &str {
        match self.key_name.trim() {
            "" => Self::DEFAULT_KEY_NAME,
            name => name,
        }
    }

    /// The shrink factor clamped to `[0, 1]`. NaN maps to 1 (no shrink).
    #[must_use]
    pub fn clamped_factor(&self) -> f64 {
        if self.shrink_factor.is_nan() {
            1.0
        } else {
            self.shrink_factor.clamp(0.0, 1.0)
        }
    }
}

impl Default for HideKeyConfig {
    fn default() -> Self {
        Self {
            key_name: Self::DEFAULT_KEY_NAME.to_owned(),
            shrink_factor: Self::DEFAULT_SHRINK_FACTOR,
            center_mode: CenterMode::Centroid,
        }
    }
}

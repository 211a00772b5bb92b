//! User-facing entry points.
//!
//! Operators act on the scene's active object and configuration. They never
//! return an error: every failure is converted into a single error
//! [`Report`] and the scene is left as it was.

use tracing::warn;

use crate::error::{MaterialHideError, SceneError};
use crate::operations::{GenerateHideKey, RefreshSelector};
use crate::scene::Scene;

/// Severity of a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Error,
}

/// How an operator invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Finished,
    Cancelled,
}

/// Message shown to the user after an operator runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}

impl Report {
    fn info(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Info,
            message: message.into(),
        }
    }

    fn error(err: &MaterialHideError) -> Self {
        Self {
            level: ReportLevel::Error,
            message: err.to_string(),
        }
    }

    /// [`Status::Finished`] for info reports, [`Status::Cancelled`] for errors.
    #[must_use]
    pub fn status(&self) -> Status {
        match self.level {
            ReportLevel::Info => Status::Finished,
            ReportLevel::Error => Status::Cancelled,
        }
    }
}

/// Rebuilds the active object's material checklist.
pub struct SyncMaterials;

impl SyncMaterials {
    pub const LABEL: &'static str = "Refresh Material List";

    /// Runs the refresh and reports the number of materials found.
    pub fn execute(scene: &mut Scene) -> Report {
        let result = scene
            .active_object()
            .ok_or_else(|| MaterialHideError::from(SceneError::NotAMesh))
            .and_then(|object| RefreshSelector::new(object).execute(scene));
        match result {
            Ok(count) => Report::info(format!("Material list updated: {count} materials found")),
            Err(err) => {
                warn!(error = %err, "material refresh cancelled");
                Report::error(&err)
            }
        }
    }
}

/// Creates the hide shape key on the active object using the scene config.
pub struct CreateHide;

impl CreateHide {
    pub const LABEL: &'static str = "Create Hide Shape Key";

    /// Runs the generator and reports the created key.
    pub fn execute(scene: &mut Scene) -> Report {
        let config = scene.config.clone();
        let result = scene
            .active_object()
            .ok_or_else(|| MaterialHideError::from(SceneError::NotAMesh))
            .and_then(|object| GenerateHideKey::new(object, config).execute(scene));
        match result {
            Ok(keys) => Report::info(format!(
                "Hide shape key '{}' created! 0 = visible/normal, 1 = hidden/shrunk.",
                keys.key_name
            )),
            Err(err) => {
                warn!(error = %err, "hide shape key creation cancelled");
                Report::error(&err)
            }
        }
    }
}

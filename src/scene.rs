//! Scene descriptions for the CLI
//!
//! A scene is a TOML file naming a root frame and a list of view
//! attachments. It exists so layouts can be inspected from the command line
//! without writing a host program:
//!
//! ```toml
//! [root]
//! kind = "Screen"
//! width = 390.0
//! height = 844.0
//!
//! [root.safe_area]
//! top = 47.0
//! bottom = 34.0
//!
//! [[views]]
//! kind = "Header"
//! snap = "top_right_left"
//! size = { height = 150.0 }
//!
//! [[views]]
//! kind = "Badge"
//! parent = "Header"
//! snap = "top_right"
//! padding = { top = 8.0, right = -8.0 }
//! size = { width = 32.0, height = 32.0 }
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::EngineConfig;
use crate::layout::{Insets, Rect, Size, SnapEdges, ViewHierarchy, ViewId};

/// Errors that can occur when loading or building a scene
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown snap combination '{name}', expected one of: {}", snap_names())]
    UnknownSnap { name: String },

    #[error("unknown parent '{name}': views may only attach to the root or to a view declared earlier")]
    UnknownParent { name: String },
}

fn snap_names() -> String {
    SnapEdges::NAMED
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A parsed scene description
#[derive(Debug, Deserialize)]
pub struct Scene {
    pub root: RootSpec,
    #[serde(default)]
    pub views: Vec<AttachmentSpec>,
}

/// The root view: a fixed frame at the origin plus optional safe-area insets
#[derive(Debug, Deserialize)]
pub struct RootSpec {
    #[serde(default = "default_root_kind")]
    pub kind: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub safe_area: Option<Insets>,
}

fn default_root_kind() -> String {
    "Root".to_string()
}

/// One view attachment: kind, snap combination, and the optional padding,
/// size, parent and intrinsic size
#[derive(Debug, Deserialize)]
pub struct AttachmentSpec {
    pub kind: String,
    pub snap: String,
    /// Kind of an earlier view to attach to; the root when omitted
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub padding: Insets,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub intrinsic_size: Option<Size>,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the view hierarchy this scene describes.
    ///
    /// The scene's safe area, when present, overrides the configuration's.
    /// Returns the hierarchy plus every view in declaration order (root
    /// first), keyed by kind.
    pub fn build(
        &self,
        config: EngineConfig,
    ) -> Result<(ViewHierarchy, Vec<(String, ViewId)>), SceneError> {
        let config = match self.root.safe_area {
            Some(insets) => config.with_safe_area(insets),
            None => config,
        };

        let mut ui = ViewHierarchy::with_config(config);
        let root = ui.add_root(
            self.root.kind.clone(),
            Rect::new(0.0, 0.0, self.root.width, self.root.height),
        );

        let mut placed: Vec<(String, ViewId)> = vec![(self.root.kind.clone(), root)];
        for spec in &self.views {
            let edges = SnapEdges::parse(&spec.snap).ok_or_else(|| SceneError::UnknownSnap {
                name: spec.snap.clone(),
            })?;
            let parent = match &spec.parent {
                Some(name) => placed
                    .iter()
                    .find(|(kind, _)| kind == name)
                    .map(|(_, id)| *id)
                    .ok_or_else(|| SceneError::UnknownParent { name: name.clone() })?,
                None => root,
            };

            let view = ui.create_view(spec.kind.clone());
            if let Some(size) = spec.intrinsic_size {
                ui.set_intrinsic_size(view, size);
            }
            ui.attach(view, parent, edges, spec.padding, spec.size);
            placed.push((spec.kind.clone(), view));
        }

        Ok((ui, placed))
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering of graph descriptions.
//!
//! The [`RenderOrchestrator`] hands markup to a [`RenderEngine`] and is the only writer of the
//! injected [`OutputSink`]. The bundled [`TreeEngine`] draws a Unicode tree so the pipeline works
//! in a terminal without an external engine.

use std::sync::Arc;

use crate::model::Zoom;

pub mod engine;
pub mod orchestrator;
pub mod sink;

pub use engine::{EngineError, RenderEngine, TreeEngine, TreeEngineConfig};
pub use orchestrator::{RenderError, RenderOrchestrator, RenderOutcome};
pub use sink::{Frame, OutputSink, TerminalSink};

/// Placeholder shown when there is nothing to render.
pub const NO_MIND_MAP_PLACEHOLDER: &str = "No mind map to display";
/// Placeholder shown while a render is in flight.
pub const RENDERING_PLACEHOLDER: &str = "Rendering...";

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';

/// A rendered visual, as produced by an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    text: String,
    width: usize,
    height: usize,
}

impl Artifact {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let height = text.lines().count();
        Self { text, width, height }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Width in character cells, before scaling.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformOrigin {
    #[default]
    TopLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleTransform {
    pub zoom: Zoom,
    pub origin: TransformOrigin,
}

impl ScaleTransform {
    pub fn top_left(zoom: Zoom) -> Self {
        Self { zoom, origin: TransformOrigin::TopLeft }
    }
}

/// An artifact together with the presentation transform applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    artifact: Arc<Artifact>,
    transform: ScaleTransform,
}

impl Presentation {
    pub fn new(artifact: Arc<Artifact>, zoom: Zoom) -> Self {
        Self { artifact, transform: ScaleTransform::top_left(zoom) }
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn transform(&self) -> ScaleTransform {
        self.transform
    }

    /// Scaled extent in cells, rounded up.
    pub fn scaled_size(&self) -> (usize, usize) {
        let factor = self.transform.zoom.factor();
        let scale = |cells: usize| (cells as f64 * factor).ceil() as usize;
        (scale(self.artifact.width()), scale(self.artifact.height()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{Artifact, Presentation, TransformOrigin};
    use crate::model::Zoom;

    #[test]
    fn artifact_measures_cells_not_bytes() {
        let artifact = Artifact::new("αβγ\n└── x");
        assert_eq!(artifact.width(), 5);
        assert_eq!(artifact.height(), 2);
    }

    #[test]
    fn presentation_scales_from_top_left() {
        let presentation = Presentation::new(Arc::new(Artifact::new("abcd\nef")), Zoom::MIN);
        assert_eq!(presentation.transform().origin, TransformOrigin::TopLeft);
        assert_eq!(presentation.scaled_size(), (2, 1));

        let presentation = Presentation::new(Arc::new(Artifact::new("abc")), Zoom::MAX);
        assert_eq!(presentation.scaled_size(), (6, 2));
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! View state and its controller.
//!
//! The controller owns the current hierarchy, selector and zoom, and keeps the derived graph
//! description in sync. Derivation is synchronous, so any render requested afterwards observes
//! the latest inputs.

use std::sync::Arc;

use tracing::debug;

use crate::format::mermaid::{render_markup, serialize};
use crate::model::{GraphDescription, Hierarchy, ViewSelector, Zoom};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Error,
}

/// What a controller call changed, so callers know whether to re-render or re-scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChange {
    Unchanged,
    /// The derived markup differs from before; the diagram must be re-rendered.
    Description,
    /// Only the zoom factor changed; the existing artifact must be re-scaled.
    Zoom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    hierarchy: Arc<Hierarchy>,
    selector: ViewSelector,
    zoom: Zoom,
    description: GraphDescription,
    markup: String,
    status: Status,
    error: Option<String>,
    /// The recorded error came from rendering, not acquisition.
    render_failed: bool,
    source_text: String,
    file_name: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            hierarchy: Arc::new(Hierarchy::empty()),
            selector: ViewSelector::All,
            zoom: Zoom::default(),
            description: GraphDescription::default(),
            markup: String::new(),
            status: Status::Idle,
            error: None,
            render_failed: false,
            source_text: String::new(),
            file_name: None,
        }
    }
}

impl ViewState {
    pub fn hierarchy(&self) -> &Arc<Hierarchy> {
        &self.hierarchy
    }

    pub fn selector(&self) -> &ViewSelector {
        &self.selector
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn description(&self) -> &GraphDescription {
        &self.description
    }

    /// Mermaid text of [`Self::description`]; empty when there is nothing to render.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewStateController {
    state: ViewState,
}

impl ViewStateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn current_graph_description(&self) -> &GraphDescription {
        &self.state.description
    }

    /// Replaces the hierarchy wholesale, returns to idle and re-derives the description.
    pub fn set_hierarchy(&mut self, hierarchy: impl Into<Arc<Hierarchy>>) -> ViewChange {
        self.state.hierarchy = hierarchy.into();
        self.clear_error();
        self.rederive()
    }

    /// Re-derives from the stored hierarchy; never refetches.
    pub fn set_view_selector(&mut self, selector: ViewSelector) -> ViewChange {
        self.state.selector = selector;
        self.rederive()
    }

    /// Offsets the zoom by `delta` (rounded to tenths) and clamps it into `[0.5, 2.0]`.
    ///
    /// Zoom is a presentation transform: the description is not re-derived.
    pub fn set_zoom(&mut self, delta: f64) -> ViewChange {
        let delta_tenths = if delta.is_finite() { (delta * 10.0).round() as i32 } else { 0 };
        let zoom = self.state.zoom.offset(delta_tenths);
        if zoom == self.state.zoom {
            return ViewChange::Unchanged;
        }
        self.state.zoom = zoom;
        ViewChange::Zoom
    }

    pub fn zoom_in(&mut self) -> ViewChange {
        self.set_zoom(0.2)
    }

    pub fn zoom_out(&mut self) -> ViewChange {
        self.set_zoom(-0.2)
    }

    pub fn set_source(&mut self, text: impl Into<String>, file_name: Option<String>) {
        self.state.source_text = text.into();
        if file_name.is_some() {
            self.state.file_name = file_name;
        }
    }

    /// Records the document being uploaded, before the backend answers.
    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.state.file_name = Some(file_name.into());
    }

    pub fn begin_loading(&mut self) {
        self.state.status = Status::Loading;
        self.state.error = None;
        self.state.render_failed = false;
    }

    /// Records an acquisition failure: the hierarchy is reset to empty.
    pub fn fail(&mut self, message: impl Into<String>) -> ViewChange {
        self.state.hierarchy = Arc::new(Hierarchy::empty());
        let change = self.rederive();
        self.state.status = Status::Error;
        self.state.error = Some(message.into());
        self.state.render_failed = false;
        change
    }

    /// Records a render failure; hierarchy and description stay as they are.
    pub fn set_render_error(&mut self, message: impl Into<String>) {
        self.state.status = Status::Error;
        self.state.error = Some(message.into());
        self.state.render_failed = true;
    }

    /// Clears the error only if it was recorded by [`Self::set_render_error`].
    pub fn clear_render_error(&mut self) {
        if self.state.render_failed {
            self.clear_error();
        }
    }

    pub fn clear_error(&mut self) {
        self.state.status = Status::Idle;
        self.state.error = None;
        self.state.render_failed = false;
    }

    fn rederive(&mut self) -> ViewChange {
        let description = serialize(&self.state.hierarchy, &self.state.selector);
        let markup = render_markup(&description);
        let changed = markup != self.state.markup;
        debug!(
            selector = %self.state.selector,
            statements = description.len(),
            changed,
            "re-derived graph description"
        );
        self.state.description = description;
        self.state.markup = markup;
        if changed {
            ViewChange::Description
        } else {
            ViewChange::Unchanged
        }
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::sync::Arc;

use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};
use tracing::{debug, warn};

use super::engine::{EngineError, RenderEngine};
use super::sink::OutputSink;
use super::{Artifact, Presentation, NO_MIND_MAP_PLACEHOLDER, RENDERING_PLACEHOLDER};
use crate::format::mermaid::render_markup;
use crate::model::{GraphDescription, Zoom};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The engine rejected the markup or failed; the output was left cleared.
    Engine { token: u64, source: EngineError },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine { token, source } => write!(f, "render {token} failed: {source}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Engine { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The artifact for this token is now shown.
    Presented { token: u64 },
    /// Nothing to render; the output shows the empty placeholder.
    Cleared { token: u64 },
    /// A newer request superseded this one; its result was dropped.
    Stale { token: u64 },
}

#[derive(Debug)]
struct OrchestratorState<S> {
    sink: S,
    next_token: u64,
    latest: u64,
    zoom: Zoom,
    shown: Option<Arc<Artifact>>,
}

impl<S: OutputSink> OrchestratorState<S> {
    fn issue_token(&mut self) -> u64 {
        self.next_token = self.next_token.wrapping_add(1);
        self.latest = self.next_token;
        self.shown = None;
        self.latest
    }

    fn show(&mut self, artifact: Arc<Artifact>) {
        self.sink.clear();
        self.sink.present(&Presentation::new(Arc::clone(&artifact), self.zoom));
        self.shown = Some(artifact);
    }
}

/// Coordinates renders against an asynchronous engine with last-requested-wins semantics.
///
/// Every request is tagged with a monotonically increasing token. A completion whose token is
/// not the latest issued one is discarded, so a slow stale render can never overwrite a newer
/// one. The engine offers no cancellation; in-flight calls simply run to completion.
#[derive(Debug)]
pub struct RenderOrchestrator<E, S> {
    engine: E,
    state: Mutex<OrchestratorState<S>>,
}

impl<E: RenderEngine, S: OutputSink> RenderOrchestrator<E, S> {
    pub fn new(engine: E, sink: S) -> Self {
        Self {
            engine,
            state: Mutex::new(OrchestratorState {
                sink,
                next_token: 0,
                latest: 0,
                zoom: Zoom::default(),
                shown: None,
            }),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Locks the sink for inspection. Do not hold the guard across a render.
    pub async fn sink(&self) -> MappedMutexGuard<'_, S> {
        MutexGuard::map(self.state.lock().await, |state| &mut state.sink)
    }

    /// Token of the most recent request.
    pub async fn latest_token(&self) -> u64 {
        self.state.lock().await.latest
    }

    pub async fn render(
        &self,
        description: &GraphDescription,
        zoom: Zoom,
    ) -> Result<RenderOutcome, RenderError> {
        let markup = render_markup(description);

        let token = {
            let mut state = self.state.lock().await;
            let token = state.issue_token();
            state.zoom = zoom;
            state.sink.clear();
            if markup.is_empty() {
                state.sink.placeholder(NO_MIND_MAP_PLACEHOLDER);
                debug!(token, "nothing to render");
                return Ok(RenderOutcome::Cleared { token });
            }
            state.sink.placeholder(RENDERING_PLACEHOLDER);
            token
        };

        let render_id = format!("graphDiv-{token}");
        debug!(token, %render_id, bytes = markup.len(), "render requested");
        let result = self.engine.render(&render_id, &markup).await;

        let mut state = self.state.lock().await;
        if token != state.latest {
            debug!(token, latest = state.latest, ok = result.is_ok(), "discarding stale render");
            return Ok(RenderOutcome::Stale { token });
        }

        match result {
            Ok(artifact) => {
                state.show(Arc::new(artifact));
                debug!(token, zoom = %state.zoom, "render presented");
                Ok(RenderOutcome::Presented { token })
            }
            Err(source) => {
                state.sink.clear();
                warn!(token, error = %source, "render failed");
                Err(RenderError::Engine { token, source })
            }
        }
    }

    /// Re-applies `zoom` to the artifact on display, replacing it.
    ///
    /// A render still in flight picks the new zoom up when it completes. Returns whether an
    /// artifact was re-presented.
    pub async fn apply_zoom(&self, zoom: Zoom) -> bool {
        let mut state = self.state.lock().await;
        state.zoom = zoom;
        let Some(artifact) = state.shown.clone() else {
            return false;
        };
        state.show(artifact);
        debug!(zoom = %zoom, "zoom re-applied");
        true
    }

    /// Drops whatever is shown or in flight and shows the empty placeholder.
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        let token = state.issue_token();
        state.sink.clear();
        state.sink.placeholder(NO_MIND_MAP_PLACEHOLDER);
        debug!(token, "output cleared");
    }
}

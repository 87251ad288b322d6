// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! User-facing controls.
//!
//! Each control maps to one pipeline operation. Failures never propagate: they end up as the
//! single error message in the view state.

use tracing::{debug, warn};

use crate::acquire::{
    extract_from_document, extract_from_text, AcquireError, Document, ExtractionBackend,
};
use crate::model::ViewSelector;
use crate::render::{OutputSink, RenderEngine, RenderOrchestrator, RenderOutcome};
use crate::view::{ViewChange, ViewStateController};

pub const MSG_EMPTY_TEXT: &str = "Please enter text";
pub const MSG_TEXT_FAILED: &str = "Failed to generate mind map";
pub const MSG_DOCUMENT_FAILED: &str = "Failed to process PDF";
pub const MSG_RENDER_FAILED: &str = "Failed to render mind map";

pub struct MindMapApp<B, E, S> {
    backend: B,
    view: ViewStateController,
    renderer: RenderOrchestrator<E, S>,
}

impl<B, E, S> MindMapApp<B, E, S>
where
    B: ExtractionBackend,
    E: RenderEngine,
    S: OutputSink,
{
    pub fn new(backend: B, engine: E, sink: S) -> Self {
        Self {
            backend,
            view: ViewStateController::new(),
            renderer: RenderOrchestrator::new(engine, sink),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &ViewStateController {
        &self.view
    }

    pub fn renderer(&self) -> &RenderOrchestrator<E, S> {
        &self.renderer
    }

    pub async fn submit_text(&mut self, text: &str) {
        self.view.begin_loading();
        self.view.set_source(text, None);

        match extract_from_text(&self.backend, text).await {
            Ok(hierarchy) => {
                self.view.set_hierarchy(hierarchy);
                self.render_current().await;
            }
            Err(AcquireError::Validation(_)) => self.fail(MSG_EMPTY_TEXT).await,
            Err(_) => self.fail(MSG_TEXT_FAILED).await,
        }
    }

    pub async fn submit_document(&mut self, document: Document) {
        self.view.begin_loading();
        self.view.set_file_name(document.file_name());

        match extract_from_document(&self.backend, &document).await {
            Ok(extraction) => {
                self.view.set_source(extraction.text, None);
                self.view.set_hierarchy(extraction.hierarchy);
                self.render_current().await;
            }
            Err(AcquireError::Processing(message)) => self.fail(message).await,
            Err(_) => self.fail(MSG_DOCUMENT_FAILED).await,
        }
    }

    pub async fn zoom_in(&mut self) {
        let change = self.view.zoom_in();
        self.apply_change(change).await;
    }

    pub async fn zoom_out(&mut self) {
        let change = self.view.zoom_out();
        self.apply_change(change).await;
    }

    /// Switches the visible branch; the stored hierarchy is reused, the backend is not called.
    pub async fn select_view(&mut self, selector: ViewSelector) {
        let change = self.view.set_view_selector(selector);
        self.apply_change(change).await;
    }

    async fn apply_change(&mut self, change: ViewChange) {
        match change {
            ViewChange::Unchanged => debug!("view unchanged"),
            ViewChange::Description => self.render_current().await,
            ViewChange::Zoom => {
                self.renderer.apply_zoom(self.view.state().zoom()).await;
            }
        }
    }

    async fn render_current(&mut self) {
        let zoom = self.view.state().zoom();
        let result = self.renderer.render(self.view.current_graph_description(), zoom).await;
        match result {
            Ok(RenderOutcome::Presented { .. } | RenderOutcome::Cleared { .. }) => {
                self.view.clear_render_error();
            }
            Ok(RenderOutcome::Stale { token }) => debug!(token, "render superseded"),
            Err(err) => {
                warn!(error = %err, "mind map render failed");
                self.view.set_render_error(MSG_RENDER_FAILED);
            }
        }
    }

    async fn fail(&mut self, message: impl Into<String>) {
        self.view.fail(message);
        self.renderer.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::{
        MindMapApp, MSG_DOCUMENT_FAILED, MSG_EMPTY_TEXT, MSG_RENDER_FAILED, MSG_TEXT_FAILED,
    };
    use crate::acquire::mock::MockBackend;
    use crate::acquire::{Document, DocumentResponse, RemoteError};
    use crate::model::fixtures::{resume_skills, resume_two_branches};
    use crate::model::{ViewSelector, Zoom};
    use crate::render::{
        Artifact, EngineError, Frame, RenderEngine, TerminalSink, TreeEngine,
        NO_MIND_MAP_PLACEHOLDER,
    };
    use crate::view::Status;

    struct RejectingEngine;

    #[async_trait]
    impl RenderEngine for RejectingEngine {
        async fn render(&self, _render_id: &str, _markup: &str) -> Result<Artifact, EngineError> {
            Err(EngineError::Rejected { reason: "parse error".to_owned() })
        }
    }

    /// Tree engine that rejects any markup containing `needle`.
    struct PickyEngine {
        needle: &'static str,
        inner: TreeEngine,
    }

    #[async_trait]
    impl RenderEngine for PickyEngine {
        async fn render(&self, render_id: &str, markup: &str) -> Result<Artifact, EngineError> {
            if markup.contains(self.needle) {
                return Err(EngineError::Rejected { reason: "parse error".to_owned() });
            }
            self.inner.render(render_id, markup).await
        }
    }

    fn app(backend: MockBackend) -> MindMapApp<MockBackend, TreeEngine, TerminalSink> {
        MindMapApp::new(backend, TreeEngine::default(), TerminalSink::new())
    }

    #[tokio::test]
    async fn submitted_text_is_rendered() {
        let mut app = app(MockBackend::default().reply_text(Ok(resume_skills())));
        app.submit_text("Skills: C/C++, DBMS").await;

        let state = app.view().state();
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(state.error(), None);
        assert_eq!(state.source_text(), "Skills: C/C++, DBMS");
        assert!(state.markup().starts_with("graph TD\nR[\"Resume\"]\nR --> N0\nN0[\"Skills\"]"));

        let text = app.renderer().sink().await.to_text();
        assert!(text.starts_with("zoom 100%\nResume\n└── Skills"));
    }

    #[tokio::test]
    async fn selecting_a_branch_reuses_stored_hierarchy() {
        let mut app = app(MockBackend::default().reply_text(Ok(resume_two_branches())));
        app.submit_text("resume").await;
        assert_eq!(app.backend().calls(), 1);

        app.select_view(ViewSelector::branch("Skills")).await;
        assert_eq!(app.backend().calls(), 1);
        let markup = app.view().state().markup();
        assert!(markup.contains("N0[\"Skills\"]"));
        assert!(!markup.contains("Education"));

        let text = app.renderer().sink().await.to_text();
        assert!(text.contains("Languages"));
        assert!(!text.contains("Degree"));

        app.select_view(ViewSelector::branch("Nope")).await;
        assert_eq!(app.view().state().markup(), "graph TD\nR[\"Resume\"]");
        assert_eq!(app.backend().calls(), 1);
    }

    #[tokio::test]
    async fn blank_text_shows_message_without_calling_backend() {
        let mut app = app(MockBackend::default().reply_text(Ok(resume_skills())));
        app.submit_text("   ").await;

        assert_eq!(app.backend().calls(), 0);
        assert_eq!(app.view().state().error(), Some(MSG_EMPTY_TEXT));
        assert_eq!(app.view().state().status(), Status::Error);
        assert_eq!(
            app.renderer().sink().await.frame(),
            &Frame::Placeholder(NO_MIND_MAP_PLACEHOLDER.to_owned())
        );
    }

    #[tokio::test]
    async fn backend_failure_resets_view() {
        let mut app = app(
            MockBackend::default()
                .reply_text(Ok(resume_skills()))
                .reply_text(Err(RemoteError::Status { status: 500, body: String::new() })),
        );
        app.submit_text("first").await;
        assert!(app.renderer().sink().await.presentation().is_some());

        app.submit_text("second").await;
        let state = app.view().state();
        assert_eq!(state.error(), Some(MSG_TEXT_FAILED));
        assert!(state.hierarchy().is_empty());
        assert!(state.markup().is_empty());
        assert!(app.renderer().sink().await.presentation().is_none());
    }

    #[tokio::test]
    async fn document_processing_error_clears_shown_map() {
        let ok: DocumentResponse = serde_json::from_str(
            r#"{"text": "Skills: DBMS", "root": "Resume", "nodes": [{"name": "Skills", "children": []}]}"#,
        )
        .expect("reply");
        let failed: DocumentResponse =
            serde_json::from_str(r#"{"error": "unreadable file"}"#).expect("reply");
        let mut app =
            app(MockBackend::default().reply_document(Ok(ok)).reply_document(Ok(failed)));

        app.submit_document(Document::new("cv.pdf", vec![0])).await;
        assert!(app.renderer().sink().await.presentation().is_some());

        app.submit_document(Document::new("scan.pdf", vec![0])).await;
        let state = app.view().state();
        assert_eq!(state.status(), Status::Error);
        assert_eq!(state.error(), Some("unreadable file"));
        assert!(state.hierarchy().is_empty());
        assert!(state.markup().is_empty());
        assert_eq!(
            app.renderer().sink().await.frame(),
            &Frame::Placeholder(NO_MIND_MAP_PLACEHOLDER.to_owned())
        );
    }

    #[tokio::test]
    async fn document_transport_failure_uses_generic_message() {
        let mut app = app(
            MockBackend::default()
                .reply_document(Err(RemoteError::Transport { message: "refused".to_owned() })),
        );
        app.submit_document(Document::new("cv.pdf", vec![0])).await;
        assert_eq!(app.view().state().error(), Some(MSG_DOCUMENT_FAILED));
        assert_eq!(app.view().state().file_name(), Some("cv.pdf"));
    }

    #[tokio::test]
    async fn document_success_records_source() {
        let reply: DocumentResponse = serde_json::from_str(
            r#"{"text": "Skills: DBMS", "root": "Resume", "nodes": [{"name": "Skills", "children": []}]}"#,
        )
        .expect("reply");
        let mut app = app(MockBackend::default().reply_document(Ok(reply)));
        app.submit_document(Document::new("cv.pdf", vec![0])).await;

        let state = app.view().state();
        assert_eq!(state.error(), None);
        assert_eq!(state.source_text(), "Skills: DBMS");
        assert_eq!(state.file_name(), Some("cv.pdf"));
        assert_eq!(state.markup(), "graph TD\nR[\"Resume\"]\nR --> N0\nN0[\"Skills\"]");
    }

    #[tokio::test]
    async fn zoom_rescales_without_rerendering() {
        let mut app = app(MockBackend::default().reply_text(Ok(resume_skills())));
        app.submit_text("resume").await;
        let token = app.renderer().latest_token().await;

        app.zoom_in().await;
        app.zoom_in().await;
        assert_eq!(app.renderer().latest_token().await, token);

        let sink = app.renderer().sink().await;
        let presentation = sink.presentation().expect("presented");
        assert_eq!(presentation.transform().zoom.percent(), 140);
        drop(sink);

        for _ in 0..10 {
            app.zoom_out().await;
        }
        assert_eq!(app.view().state().zoom(), Zoom::MIN);
    }

    #[tokio::test]
    async fn render_failure_keeps_hierarchy() {
        let mut app = MindMapApp::new(
            MockBackend::default().reply_text(Ok(resume_skills())),
            RejectingEngine,
            TerminalSink::new(),
        );
        app.submit_text("resume").await;

        let state = app.view().state();
        assert_eq!(state.error(), Some(MSG_RENDER_FAILED));
        assert!(!state.hierarchy().is_empty());
        assert!(!state.markup().is_empty());
        assert_eq!(app.renderer().sink().await.frame(), &Frame::Blank);
    }

    #[tokio::test]
    async fn successful_render_clears_previous_render_error() {
        let mut app = MindMapApp::new(
            MockBackend::default().reply_text(Ok(resume_two_branches())),
            PickyEngine { needle: "Education", inner: TreeEngine::default() },
            TerminalSink::new(),
        );
        app.submit_text("resume").await;
        assert_eq!(app.view().state().error(), Some(MSG_RENDER_FAILED));

        app.select_view(ViewSelector::branch("Skills")).await;
        assert!(app.renderer().sink().await.presentation().is_some());
        assert_eq!(app.view().state().status(), Status::Idle);
        assert_eq!(app.view().state().error(), None);
    }
}

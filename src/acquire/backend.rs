// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::RemoteError;
use crate::model::Hierarchy;

pub const DEFAULT_DOCUMENT_MIME: &str = "application/pdf";

/// A document to upload for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    file_name: String,
    mime: String,
    bytes: Vec<u8>,
}

impl Document {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), mime: DEFAULT_DOCUMENT_MIME.to_owned(), bytes }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = mime.into();
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRequest<'a> {
    pub text: &'a str,
}

/// Body of a successful document upload.
///
/// A 2xx response may still carry `error` when the backend could not process the document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentResponse {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub hierarchy: Hierarchy,
}

/// The extraction and document-processing service.
#[async_trait]
pub trait ExtractionBackend: Send + Sync {
    async fn post_text(&self, text: &str) -> Result<Hierarchy, RemoteError>;

    async fn post_document(&self, document: &Document) -> Result<DocumentResponse, RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::DocumentResponse;

    #[test]
    fn document_response_with_embedded_error_has_empty_hierarchy() {
        let response: DocumentResponse =
            serde_json::from_str(r#"{"error": "unreadable file"}"#).expect("response");
        assert_eq!(response.error.as_deref(), Some("unreadable file"));
        assert!(response.hierarchy.is_empty());
    }

    #[test]
    fn document_response_carries_text_and_hierarchy() {
        let response: DocumentResponse = serde_json::from_str(
            r#"{"text": "Skills: DBMS", "root": "Resume", "nodes": [{"name": "Skills", "children": []}]}"#,
        )
        .expect("response");
        assert_eq!(response.text.as_deref(), Some("Skills: DBMS"));
        assert_eq!(response.error, None);
        assert_eq!(response.hierarchy.root(), "Resume");
        assert_eq!(response.hierarchy.nodes().len(), 1);
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Data acquisition: turning raw text or a document into a [`Hierarchy`].

use tracing::{info, warn};

use crate::model::Hierarchy;

pub mod backend;
pub mod client;
pub mod error;

pub use backend::{Document, DocumentResponse, ExtractionBackend, DEFAULT_DOCUMENT_MIME};
pub use client::{ClientConfig, HttpExtractionClient, BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
pub use error::{AcquireError, RemoteError, ValidationError};

/// Result of a successful document extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentExtraction {
    /// Raw text the backend pulled out of the document (may be empty).
    pub text: String,
    pub hierarchy: Hierarchy,
}

/// Extracts a hierarchy from free text.
///
/// Empty or whitespace-only text fails with [`AcquireError::Validation`] without contacting the
/// backend.
pub async fn extract_from_text<B>(backend: &B, text: &str) -> Result<Hierarchy, AcquireError>
where
    B: ExtractionBackend + ?Sized,
{
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText.into());
    }

    let hierarchy = backend.post_text(text).await.map_err(|err| {
        warn!(error = %err, "text extraction failed");
        err
    })?;
    info!(root = hierarchy.root(), branches = hierarchy.nodes().len(), "text extracted");
    Ok(hierarchy)
}

/// Extracts a hierarchy from an uploaded document.
///
/// A success response carrying a non-empty `error` field fails with
/// [`AcquireError::Processing`]; its hierarchy is ignored.
pub async fn extract_from_document<B>(
    backend: &B,
    document: &Document,
) -> Result<DocumentExtraction, AcquireError>
where
    B: ExtractionBackend + ?Sized,
{
    let response = backend.post_document(document).await.map_err(|err| {
        warn!(file = document.file_name(), error = %err, "document upload failed");
        err
    })?;

    if let Some(message) = response.error.filter(|message| !message.is_empty()) {
        warn!(file = document.file_name(), %message, "backend could not process document");
        return Err(AcquireError::Processing(message));
    }

    info!(
        file = document.file_name(),
        root = response.hierarchy.root(),
        branches = response.hierarchy.nodes().len(),
        "document extracted"
    );
    Ok(DocumentExtraction { text: response.text.unwrap_or_default(), hierarchy: response.hierarchy })
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP client for the extraction backend.
//!
//! No pipeline awareness: one POST per call, status and body mapped onto [`RemoteError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::backend::{Document, DocumentResponse, ExtractionBackend, TextRequest};
use super::error::RemoteError;
use crate::model::Hierarchy;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const BACKEND_URL_ENV: &str = "MINDMAPIFY_BACKEND_URL";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const TEXT_ENDPOINT: &str = "/nlp/";
const DOCUMENT_ENDPOINT: &str = "/upload-pdf/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BACKEND_URL.to_owned(), timeout: DEFAULT_TIMEOUT }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from `MINDMAPIFY_BACKEND_URL` when set and non-empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_owned();
            }
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone)]
pub struct HttpExtractionClient {
    http: Client,
    config: ClientConfig,
}

impl HttpExtractionClient {
    pub fn new(config: ClientConfig) -> Result<Self, RemoteError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, RemoteError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, status = status.as_u16(), "backend returned non-success status");
            return Err(RemoteError::Status { status: status.as_u16(), body });
        }

        response.json::<T>().await.map_err(|err| RemoteError::Decode { message: err.to_string() })
    }
}

#[async_trait]
impl ExtractionBackend for HttpExtractionClient {
    async fn post_text(&self, text: &str) -> Result<Hierarchy, RemoteError> {
        let url = self.config.endpoint(TEXT_ENDPOINT);
        info!(%url, chars = text.chars().count(), "requesting text extraction");

        let response = self.http.post(&url).json(&TextRequest { text }).send().await?;
        Self::decode(&url, response).await
    }

    async fn post_document(&self, document: &Document) -> Result<DocumentResponse, RemoteError> {
        let url = self.config.endpoint(DOCUMENT_ENDPOINT);
        info!(%url, file = document.file_name(), bytes = document.bytes().len(), "uploading document");

        let part = Part::bytes(document.bytes().to_vec())
            .file_name(document.file_name().to_owned())
            .mime_str(document.mime())?;
        let form = Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;
        Self::decode(&url, response).await
    }
}

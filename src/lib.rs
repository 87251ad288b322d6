// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! MindMapify: concept hierarchies to Mermaid mind maps.
//!
//! Text or a document goes to an extraction backend ([`acquire`]), the returned [`model::Hierarchy`]
//! is serialized to flowchart markup ([`format::mermaid`]) under the current view selector
//! ([`view`]), and the markup is rendered with last-requested-wins semantics ([`render`]).
//! [`app::MindMapApp`] wires the controls together.

pub mod acquire;
pub mod app;
pub mod format;
pub mod model;
pub mod render;
pub mod view;

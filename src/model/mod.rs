// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A [`Hierarchy`] is the extracted concept tree; a [`GraphDescription`] is what the serializer
//! derives from it for a given [`ViewSelector`].

#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod hierarchy;
pub mod ids;
pub mod view;

pub use graph::{GraphDescription, GraphStatement};
pub use hierarchy::{ConceptChild, ConceptNode, Hierarchy, DEFAULT_ROOT_LABEL};
pub use ids::{IdError, NodeId, NodePosition};
pub use view::{ViewSelector, Zoom, VIEW_ALL};

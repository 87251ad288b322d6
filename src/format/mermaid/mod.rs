// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid flowchart serialization and the matching parser.

mod escape;
pub mod flowchart;

pub use escape::{escape_label, unescape_label};
pub use flowchart::{
    parse_markup, render_markup, serialize, MarkupParseError, ParsedGraph, ParsedNode,
    GRAPH_HEADER,
};

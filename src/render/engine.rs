// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use async_trait::async_trait;

use super::{
    Artifact, UNICODE_BOX_BOTTOM_LEFT, UNICODE_BOX_HORIZONTAL, UNICODE_BOX_TEE_RIGHT,
    UNICODE_BOX_VERTICAL,
};
use crate::format::mermaid::{parse_markup, MarkupParseError, ParsedGraph};
use crate::model::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The markup could not be parsed.
    Markup(MarkupParseError),
    /// Every node is the target of some edge, so there is nowhere to start drawing.
    NoRoot,
    Cycle { node_id: String },
    /// Engine-specific failure.
    Rejected { reason: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup(err) => write!(f, "malformed graph markup: {err}"),
            Self::NoRoot => f.write_str("graph has no root node"),
            Self::Cycle { node_id } => write!(f, "graph contains a cycle through node {node_id}"),
            Self::Rejected { reason } => write!(f, "render engine rejected input: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Markup(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MarkupParseError> for EngineError {
    fn from(err: MarkupParseError) -> Self {
        Self::Markup(err)
    }
}

/// External diagram engine boundary: markup in, artifact out.
///
/// `render_id` is unique per render request and may be used by engines that need a scratch
/// element id.
#[async_trait]
pub trait RenderEngine: Send + Sync {
    async fn render(&self, render_id: &str, markup: &str) -> Result<Artifact, EngineError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEngineConfig {
    /// Labels longer than this many characters are cut with an ellipsis.
    pub max_label_width: usize,
}

impl Default for TreeEngineConfig {
    fn default() -> Self {
        Self { max_label_width: 48 }
    }
}

/// Draws parsed markup as an indented Unicode tree:
///
/// ```text
/// Resume
/// └── Skills
///     ├── Languages
///     │   └── C/C++
///     └── Databases
///         └── DBMS
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeEngine {
    config: TreeEngineConfig,
}

impl TreeEngine {
    pub fn new(config: TreeEngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> TreeEngineConfig {
        self.config
    }

    pub fn render_sync(&self, markup: &str) -> Result<Artifact, EngineError> {
        let graph = parse_markup(markup)?;
        let mut lines = Vec::<String>::new();

        let roots = graph
            .nodes()
            .iter()
            .filter(|node| graph.edges().iter().all(|(_, to)| to != node.id()))
            .collect::<Vec<_>>();
        if roots.is_empty() {
            return if graph.nodes().is_empty() {
                Ok(Artifact::new(String::new()))
            } else {
                Err(EngineError::NoRoot)
            };
        }

        for root in roots {
            lines.push(self.label_cell(&graph, root.id()));
            let mut on_path = BTreeSet::from([root.id().clone()]);
            self.draw_children(&graph, root.id(), "", &mut on_path, &mut lines)?;
        }

        Ok(Artifact::new(lines.join("\n")))
    }

    fn label_cell(&self, graph: &ParsedGraph, id: &NodeId) -> String {
        let label = graph.node(id.as_str()).map(|node| node.label()).unwrap_or(id.as_str());
        fit_label(label, self.config.max_label_width)
    }

    fn draw_children(
        &self,
        graph: &ParsedGraph,
        parent: &NodeId,
        prefix: &str,
        on_path: &mut BTreeSet<NodeId>,
        lines: &mut Vec<String>,
    ) -> Result<(), EngineError> {
        let children = graph.successors(parent).collect::<Vec<_>>();
        let count = children.len();

        for (idx, child) in children.into_iter().enumerate() {
            if !on_path.insert(child.clone()) {
                return Err(EngineError::Cycle { node_id: child.as_str().to_owned() });
            }

            let is_last = idx + 1 == count;
            let branch = if is_last { UNICODE_BOX_BOTTOM_LEFT } else { UNICODE_BOX_TEE_RIGHT };
            let mut line = String::with_capacity(prefix.len() + 16);
            line.push_str(prefix);
            line.push(branch);
            line.push(UNICODE_BOX_HORIZONTAL);
            line.push(UNICODE_BOX_HORIZONTAL);
            line.push(' ');
            line.push_str(&self.label_cell(graph, child));
            line.truncate(line.trim_end().len());
            lines.push(line);

            let mut child_prefix = String::with_capacity(prefix.len() + 8);
            child_prefix.push_str(prefix);
            if is_last {
                child_prefix.push_str("    ");
            } else {
                child_prefix.push(UNICODE_BOX_VERTICAL);
                child_prefix.push_str("   ");
            }
            self.draw_children(graph, child, &child_prefix, on_path, lines)?;

            on_path.remove(child);
        }

        Ok(())
    }
}

/// Cuts `label` to at most `width` characters, the last of which becomes `…`.
fn fit_label(label: &str, width: usize) -> String {
    let label = label.trim_end();
    if label.chars().nth(width).is_none() {
        return label.to_owned();
    }
    if width == 0 {
        return String::new();
    }
    let keep = label.char_indices().nth(width - 1).map_or(label.len(), |(at, _)| at);
    format!("{}…", &label[..keep])
}

#[async_trait]
impl RenderEngine for TreeEngine {
    async fn render(&self, _render_id: &str, markup: &str) -> Result<Artifact, EngineError> {
        self.render_sync(markup)
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::escape::{escape_label, unescape_label};
use crate::model::graph::{GraphDescription, GraphStatement};
use crate::model::hierarchy::{ConceptNode, Hierarchy};
use crate::model::ids::{IdError, NodeId, NodePosition};
use crate::model::view::ViewSelector;

/// Header line emitted before any statement of a non-empty description.
pub const GRAPH_HEADER: &str = "graph TD";

const EDGE_OPERATOR: &str = "-->";

/// Serialize a hierarchy view into a graph description.
///
/// Pure and deterministic: equal inputs always produce equal statements in equal order.
///
/// - No top-level nodes: empty description.
/// - [`ViewSelector::All`]: root, then each branch depth-first (edge before declaration).
/// - [`ViewSelector::Branch`]: root plus the first branch with that exact name, re-indexed as
///   branch `0`; root only if no branch matches.
pub fn serialize(hierarchy: &Hierarchy, selector: &ViewSelector) -> GraphDescription {
    let mut out = GraphDescription::default();
    if hierarchy.is_empty() {
        return out;
    }

    let root = NodeId::root();
    out.push(GraphStatement::node(root.clone(), hierarchy.root()));

    match selector {
        ViewSelector::All => {
            for (i, node) in hierarchy.nodes().iter().enumerate() {
                push_branch(&mut out, &root, i, node);
            }
        }
        ViewSelector::Branch(name) => {
            if let Some(node) = hierarchy.find_branch(name) {
                push_branch(&mut out, &root, 0, node);
            }
        }
    }

    out
}

fn push_branch(out: &mut GraphDescription, root: &NodeId, i: usize, node: &ConceptNode) {
    let node_id = NodeId::from_position(NodePosition::Branch(i));
    out.push(GraphStatement::edge(root.clone(), node_id.clone()));
    out.push(GraphStatement::node(node_id.clone(), node.name()));

    for (j, child) in node.children().iter().enumerate() {
        let child_id = NodeId::from_position(NodePosition::Child(i, j));
        out.push(GraphStatement::edge(node_id.clone(), child_id.clone()));
        out.push(GraphStatement::node(child_id.clone(), child.name()));

        for (k, leaf) in child.subchildren().iter().enumerate() {
            let leaf_id = NodeId::from_position(NodePosition::Leaf(i, j, k));
            out.push(GraphStatement::edge(child_id.clone(), leaf_id.clone()));
            out.push(GraphStatement::node(leaf_id, leaf.as_str()));
        }
    }
}

fn write_statement(out: &mut String, statement: &GraphStatement) {
    match statement {
        GraphStatement::Node { id, label } => {
            out.push_str(id.as_str());
            out.push_str("[\"");
            out.push_str(&escape_label(label));
            out.push_str("\"]");
        }
        GraphStatement::Edge { from, to } => {
            out.push_str(from.as_str());
            out.push(' ');
            out.push_str(EDGE_OPERATOR);
            out.push(' ');
            out.push_str(to.as_str());
        }
    }
}

/// Render a description as Mermaid flowchart text.
///
/// An empty description renders to the empty string (no header).
pub fn render_markup(description: &GraphDescription) -> String {
    if description.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(GRAPH_HEADER.len() + description.len() * 16);
    out.push_str(GRAPH_HEADER);
    for statement in description.statements() {
        out.push('\n');
        write_statement(&mut out, statement);
    }
    out
}

impl fmt::Display for GraphDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_markup(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupParseError {
    MissingHeader,
    InvalidDirection { line_no: usize, direction: String },
    UnsupportedSyntax { line_no: usize, line: String },
    InvalidNodeId { line_no: usize, name: String, reason: IdError },
    InvalidNodeLabelSyntax { line_no: usize, token: String },
    EmptyNodeLabel { line_no: usize, token: String },
    ConflictingNodeLabel { line_no: usize, id: String, existing_label: String, new_label: String },
}

impl fmt::Display for MarkupParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => {
                f.write_str("expected 'graph' or 'flowchart' as the first non-empty line")
            }
            Self::InvalidDirection { line_no, direction } => write!(
                f,
                "invalid graph direction on line {line_no}: {direction} (expected TD/TB/LR/RL/BT)"
            ),
            Self::UnsupportedSyntax { line_no, line } => {
                write!(f, "unsupported Mermaid syntax on line {line_no}: {line}")
            }
            Self::InvalidNodeId { line_no, name, reason } => {
                write!(f, "invalid node id on line {line_no}: {name} ({reason})")
            }
            Self::InvalidNodeLabelSyntax { line_no, token } => write!(
                f,
                "invalid node label syntax on line {line_no}: {token} (expected '<id>[\"<label>\"]' or '<id>[<label>]')"
            ),
            Self::EmptyNodeLabel { line_no, token } => {
                write!(f, "empty node label on line {line_no}: {token}")
            }
            Self::ConflictingNodeLabel { line_no, id, existing_label, new_label } => write!(
                f,
                "conflicting label for node '{id}' on line {line_no}: '{existing_label}' vs '{new_label}'"
            ),
        }
    }
}

impl std::error::Error for MarkupParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNode {
    id: NodeId,
    label: String,
}

impl ParsedNode {
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Graph recovered from markup: nodes in first-mention order plus edges in statement order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedGraph {
    nodes: Vec<ParsedNode>,
    index: BTreeMap<NodeId, usize>,
    edges: Vec<(NodeId, NodeId)>,
}

impl ParsedGraph {
    pub fn nodes(&self) -> &[ParsedNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&ParsedNode> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Edge targets of `id`, in statement order.
    pub fn successors<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.edges.iter().filter(move |(from, _)| from == id).map(|(_, to)| to)
    }

    /// First node (in mention order) that is not the target of any edge.
    pub fn root(&self) -> Option<&ParsedNode> {
        self.nodes.iter().find(|node| self.edges.iter().all(|(_, to)| to != &node.id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeSpec {
    id: NodeId,
    label: Option<String>,
}

fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with("%%")
}

fn parse_node_id(raw: &str, line_no: usize) -> Result<NodeId, MarkupParseError> {
    NodeId::new(raw).map_err(|reason| MarkupParseError::InvalidNodeId {
        line_no,
        name: raw.to_owned(),
        reason,
    })
}

fn parse_node_spec(token: &str, line_no: usize) -> Result<NodeSpec, MarkupParseError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(MarkupParseError::UnsupportedSyntax { line_no, line: token.to_owned() });
    }

    let Some(open_idx) = trimmed.find('[') else {
        return Ok(NodeSpec { id: parse_node_id(trimmed, line_no)?, label: None });
    };

    let id = parse_node_id(trimmed[..open_idx].trim(), line_no)?;
    let Some(inner) = trimmed[open_idx + 1..].strip_suffix(']') else {
        return Err(MarkupParseError::InvalidNodeLabelSyntax { line_no, token: trimmed.to_owned() });
    };

    let inner = inner.trim();
    let label = if let Some(quoted) = inner.strip_prefix('"') {
        let Some(quoted) = quoted.strip_suffix('"') else {
            return Err(MarkupParseError::InvalidNodeLabelSyntax {
                line_no,
                token: trimmed.to_owned(),
            });
        };
        if quoted.contains('"') {
            return Err(MarkupParseError::InvalidNodeLabelSyntax {
                line_no,
                token: trimmed.to_owned(),
            });
        }
        quoted
    } else {
        if inner.is_empty() {
            return Err(MarkupParseError::EmptyNodeLabel { line_no, token: trimmed.to_owned() });
        }
        if inner.contains(['[', ']', '"']) {
            return Err(MarkupParseError::InvalidNodeLabelSyntax {
                line_no,
                token: trimmed.to_owned(),
            });
        }
        inner
    };

    Ok(NodeSpec { id, label: Some(unescape_label(label).into_owned()) })
}

/// Splits `line` on every `-->` that is not inside a `[...]` label.
fn split_edge_chain(line: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_label = false;
    let mut in_quote = false;
    let mut start = 0usize;
    let mut skip_until = 0usize;

    for (idx, ch) in line.char_indices() {
        if idx < skip_until {
            continue;
        }
        match ch {
            '"' if in_label => in_quote = !in_quote,
            '[' if !in_quote => in_label = true,
            ']' if !in_quote => in_label = false,
            '-' if !in_label && line[idx..].starts_with(EDGE_OPERATOR) => {
                parts.push(&line[start..idx]);
                start = idx + EDGE_OPERATOR.len();
                skip_until = start;
            }
            _ => {}
        }
    }
    parts.push(&line[start..]);
    parts
}

fn ensure_node(
    graph: &mut ParsedGraph,
    spec: NodeSpec,
    line_no: usize,
) -> Result<NodeId, MarkupParseError> {
    let NodeSpec { id, label } = spec;

    let Some(&idx) = graph.index.get(&id) else {
        let label = label.unwrap_or_else(|| id.as_str().to_owned());
        graph.index.insert(id.clone(), graph.nodes.len());
        graph.nodes.push(ParsedNode { id: id.clone(), label });
        return Ok(id);
    };

    if let Some(explicit) = label {
        let existing = &mut graph.nodes[idx];
        if existing.label == explicit {
            // ok
        } else if existing.label == id.as_str() {
            // implicit (default) label, upgrade to explicit label.
            existing.label = explicit;
        } else {
            return Err(MarkupParseError::ConflictingNodeLabel {
                line_no,
                id: id.as_str().to_owned(),
                existing_label: existing.label.clone(),
                new_label: explicit,
            });
        }
    }

    Ok(id)
}

/// Parse the Mermaid subset that [`render_markup`] emits.
///
/// Supported:
/// - `graph`/`flowchart` header with optional direction (`TD`, `TB`, `LR`, `RL`, `BT`)
/// - comment lines starting with `%%`
/// - node declarations: `<id>`, `<id>[<label>]`, `<id>["<label>"]` (entity codes decoded)
/// - edges `<a> --> <b>`, chains `<a> --> <b> --> <c>`, with optional declarations on either side
///
/// Anything else is rejected with a line-numbered error.
pub fn parse_markup(input: &str) -> Result<ParsedGraph, MarkupParseError> {
    let mut graph = ParsedGraph::default();
    let mut saw_header = false;

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || is_comment_line(trimmed) {
            continue;
        }

        if !saw_header {
            let mut parts = trimmed.split_whitespace();
            if !matches!(parts.next(), Some("graph" | "flowchart")) {
                return Err(MarkupParseError::MissingHeader);
            }
            if let Some(direction) = parts.next() {
                if !matches!(direction, "TD" | "TB" | "LR" | "RL" | "BT") {
                    return Err(MarkupParseError::InvalidDirection {
                        line_no,
                        direction: direction.to_owned(),
                    });
                }
            }
            if parts.next().is_some() {
                return Err(MarkupParseError::UnsupportedSyntax {
                    line_no,
                    line: trimmed.to_owned(),
                });
            }
            saw_header = true;
            continue;
        }

        let parts = split_edge_chain(trimmed);
        let mut prev: Option<NodeId> = None;
        for part in parts {
            let spec = parse_node_spec(part, line_no).map_err(|err| match err {
                MarkupParseError::UnsupportedSyntax { .. } => MarkupParseError::UnsupportedSyntax {
                    line_no,
                    line: trimmed.to_owned(),
                },
                other => other,
            })?;
            let id = ensure_node(&mut graph, spec, line_no)?;
            if let Some(from) = prev.take() {
                graph.edges.push((from, id.clone()));
            }
            prev = Some(id);
        }
    }

    if !saw_header {
        return Err(MarkupParseError::MissingHeader);
    }

    Ok(graph)
}

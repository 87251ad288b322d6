// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::NodeId;

/// One line of a graph description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GraphStatement {
    /// Declares a node and its (unescaped) label.
    Node { id: NodeId, label: String },
    /// Directed edge between two declared node ids.
    Edge { from: NodeId, to: NodeId },
}

impl GraphStatement {
    pub fn node(id: NodeId, label: impl Into<String>) -> Self {
        Self::Node { id, label: label.into() }
    }

    pub fn edge(from: NodeId, to: NodeId) -> Self {
        Self::Edge { from, to }
    }
}

/// Ordered, deterministic directed-graph description derived from a hierarchy view.
///
/// Empty means "nothing to render"; it is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GraphDescription {
    statements: Vec<GraphStatement>,
}

impl GraphDescription {
    pub fn new(statements: Vec<GraphStatement>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[GraphStatement] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub(crate) fn push(&mut self, statement: GraphStatement) {
        self.statements.push(statement);
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.statements.iter().filter_map(|statement| match statement {
            GraphStatement::Node { id, .. } => Some(id),
            GraphStatement::Edge { .. } => None,
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.statements.iter().filter_map(|statement| match statement {
            GraphStatement::Edge { from, to } => Some((from, to)),
            GraphStatement::Node { .. } => None,
        })
    }

    /// Label declared for `id`, if any.
    pub fn label_of(&self, id: &str) -> Option<&str> {
        self.statements.iter().find_map(|statement| match statement {
            GraphStatement::Node { id: node_id, label } if node_id.as_str() == id => {
                Some(label.as_str())
            }
            _ => None,
        })
    }
}

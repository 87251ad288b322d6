// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// Root label used when the extractor returns no (or an empty) root.
pub const DEFAULT_ROOT_LABEL: &str = "Topic";

/// A rooted concept tree with exactly three levels below the root.
///
/// Sibling names are not guaranteed to be unique; the serializer identifies nodes by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HierarchyWire")]
pub struct Hierarchy {
    root: String,
    nodes: Vec<ConceptNode>,
}

#[derive(Debug, Default, Deserialize)]
struct HierarchyWire {
    #[serde(default)]
    root: Option<String>,
    #[serde(default)]
    nodes: Option<Vec<ConceptNode>>,
}

impl From<HierarchyWire> for Hierarchy {
    fn from(wire: HierarchyWire) -> Self {
        Self::new(wire.root.unwrap_or_default(), wire.nodes.unwrap_or_default())
    }
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::empty()
    }
}

impl Hierarchy {
    pub fn new(root: impl Into<String>, nodes: Vec<ConceptNode>) -> Self {
        let root = root.into();
        let root = if root.is_empty() { DEFAULT_ROOT_LABEL.to_owned() } else { root };
        Self { root, nodes }
    }

    pub fn empty() -> Self {
        Self::new(DEFAULT_ROOT_LABEL, Vec::new())
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn nodes(&self) -> &[ConceptNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level names in order, including duplicates.
    pub fn branch_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(ConceptNode::name)
    }

    /// First top-level node with exactly this name.
    pub fn find_branch(&self, name: &str) -> Option<&ConceptNode> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Second-level names flattened across all branches, in order.
    pub fn concepts(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .flat_map(|node| node.children.iter().map(ConceptChild::name))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptNode {
    name: String,
    #[serde(default)]
    children: Vec<ConceptChild>,
}

impl ConceptNode {
    pub fn new(name: impl Into<String>, children: Vec<ConceptChild>) -> Self {
        Self { name: name.into(), children }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[ConceptChild] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptChild {
    name: String,
    #[serde(default, rename = "children")]
    subchildren: Vec<String>,
}

impl ConceptChild {
    pub fn new<I, S>(name: impl Into<String>, subchildren: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), subchildren: subchildren.into_iter().map(Into::into).collect() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Terminal leaf labels.
    pub fn subchildren(&self) -> &[String] {
        &self.subchildren
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// Structural position of a node inside the (possibly filtered) hierarchy view.
///
/// Indices are sibling indices at each level; the top-level index is the index *within the
/// current view*, so a single-branch view always uses `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodePosition {
    Root,
    Branch(usize),
    Child(usize, usize),
    Leaf(usize, usize, usize),
}

/// A graph node identifier as it appears in the emitted markup.
///
/// Identifiers are Mermaid-safe: non-empty, ASCII alphanumeric or `_`. Positional ids compose
/// every ancestor index with an `_` separator (`S0_12_3`), so distinct positions never collide,
/// regardless of how many digits an index has.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    value: SmolStr,
}

impl NodeId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, IdError> {
        let value = value.as_ref();
        validate_ident(value)?;
        Ok(Self { value: SmolStr::new(value) })
    }

    pub fn root() -> Self {
        Self::from_position(NodePosition::Root)
    }

    pub fn from_position(position: NodePosition) -> Self {
        let mut out = String::with_capacity(12);
        let mut buf = itoa::Buffer::new();
        let mut push_indices = |prefix: char, indices: &[usize]| {
            out.push(prefix);
            for (pos, index) in indices.iter().enumerate() {
                if pos > 0 {
                    out.push('_');
                }
                out.push_str(buf.format(*index));
            }
        };

        match position {
            NodePosition::Root => push_indices('R', &[]),
            NodePosition::Branch(i) => push_indices('N', &[i]),
            NodePosition::Child(i, j) => push_indices('C', &[i, j]),
            NodePosition::Leaf(i, j, k) => push_indices('S', &[i, j, k]),
        }

        Self { value: SmolStr::new(out) }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for NodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    Empty,
    ContainsWhitespace,
    InvalidChar { ch: char },
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("must not be empty"),
            Self::ContainsWhitespace => f.write_str("must not contain whitespace"),
            Self::InvalidChar { ch } => write!(f, "contains invalid character: '{ch}'"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_ident(ident: &str) -> Result<(), IdError> {
    if ident.is_empty() {
        return Err(IdError::Empty);
    }
    if ident.chars().any(|c| c.is_whitespace()) {
        return Err(IdError::ContainsWhitespace);
    }
    if let Some(ch) = ident.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(IdError::InvalidChar { ch });
    }
    Ok(())
}

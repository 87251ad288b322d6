// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::hierarchy::{ConceptChild, ConceptNode, Hierarchy};

/// The hierarchy the extractor returns for `"Skills: C/C++, DBMS"`.
pub(crate) fn resume_skills() -> Hierarchy {
    Hierarchy::new(
        "Resume",
        vec![ConceptNode::new(
            "Skills",
            vec![
                ConceptChild::new("Languages", ["C/C++"]),
                ConceptChild::new("Databases", ["DBMS"]),
            ],
        )],
    )
}

pub(crate) fn resume_two_branches() -> Hierarchy {
    Hierarchy::new(
        "Resume",
        vec![
            ConceptNode::new(
                "Education",
                vec![
                    ConceptChild::new("Degree", ["Iit bombay"]),
                    ConceptChild::new("Course", ["Algorithms"]),
                ],
            ),
            ConceptNode::new(
                "Skills",
                vec![
                    ConceptChild::new("Languages", ["C/C++", "Python"]),
                    ConceptChild::new("Databases", ["DBMS"]),
                ],
            ),
        ],
    )
}

/// `branches` top-level nodes, each with `children` children of `leaves` leaves, all sharing
/// the same label so only positional ids can tell them apart.
pub(crate) fn uniform_duplicates(branches: usize, children: usize, leaves: usize) -> Hierarchy {
    let nodes = (0..branches)
        .map(|_| {
            let kids = (0..children)
                .map(|_| ConceptChild::new("same", std::iter::repeat("same").take(leaves)))
                .collect();
            ConceptNode::new("same", kids)
        })
        .collect();
    Hierarchy::new("same", nodes)
}

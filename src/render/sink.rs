// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Presentation;

/// The visual output container.
///
/// Exactly one frame is visible at a time: every call replaces what was shown before.
pub trait OutputSink: Send {
    fn clear(&mut self);
    fn placeholder(&mut self, text: &str);
    fn present(&mut self, presentation: &Presentation);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Frame {
    #[default]
    Blank,
    Placeholder(String),
    Presented(Presentation),
}

/// Keeps the current frame in memory so a terminal shell can print it.
#[derive(Debug, Clone, Default)]
pub struct TerminalSink {
    frame: Frame,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        match &self.frame {
            Frame::Presented(presentation) => Some(presentation),
            _ => None,
        }
    }

    pub fn to_text(&self) -> String {
        match &self.frame {
            Frame::Blank => String::new(),
            Frame::Placeholder(text) => text.clone(),
            Frame::Presented(presentation) => {
                let zoom = presentation.transform().zoom;
                format!("zoom {zoom}\n{}", presentation.artifact().text())
            }
        }
    }
}

impl OutputSink for TerminalSink {
    fn clear(&mut self) {
        self.frame = Frame::Blank;
    }

    fn placeholder(&mut self, text: &str) {
        self.frame = Frame::Placeholder(text.to_owned());
    }

    fn present(&mut self, presentation: &Presentation) {
        self.frame = Frame::Presented(presentation.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{Frame, OutputSink, TerminalSink};
    use crate::model::Zoom;
    use crate::render::{Artifact, Presentation};

    #[test]
    fn frames_replace_each_other() {
        let mut sink = TerminalSink::new();
        sink.placeholder("Rendering...");
        assert_eq!(sink.to_text(), "Rendering...");

        let artifact = Arc::new(Artifact::new("Resume"));
        sink.present(&Presentation::new(artifact.clone(), Zoom::default()));
        sink.present(&Presentation::new(artifact, Zoom::MAX));
        assert_eq!(sink.to_text(), "zoom 200%\nResume");

        sink.clear();
        assert_eq!(sink.frame(), &Frame::Blank);
        assert!(sink.presentation().is_none());
    }
}

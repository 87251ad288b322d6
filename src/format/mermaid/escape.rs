// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Label escaping for quoted Mermaid node labels (`ID["..."]`).
//!
//! Characters that would end the label or the statement are replaced with Mermaid entity codes.
//! Runs of control characters (line breaks included) collapse to one space, because a statement
//! must stay on a single line.

use std::borrow::Cow;

fn entity_for(ch: char) -> Option<&'static str> {
    match ch {
        '"' => Some("#quot;"),
        '#' => Some("#35;"),
        '[' => Some("#91;"),
        ']' => Some("#93;"),
        '<' => Some("#lt;"),
        '>' => Some("#gt;"),
        _ => None,
    }
}

fn needs_escape(ch: char) -> bool {
    ch.is_control() || entity_for(ch).is_some()
}

pub fn escape_label(label: &str) -> Cow<'_, str> {
    if !label.chars().any(needs_escape) {
        return Cow::Borrowed(label);
    }

    let mut out = String::with_capacity(label.len() + 8);
    let mut in_control_run = false;
    for ch in label.chars() {
        if ch.is_control() {
            if !in_control_run {
                out.push(' ');
            }
            in_control_run = true;
            continue;
        }
        in_control_run = false;
        match entity_for(ch) {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "quot" => Some('"'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        _ if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) => {
            name.parse::<u32>().ok().and_then(char::from_u32)
        }
        _ => None,
    }
}

/// Decodes Mermaid entity codes (`#quot;`, `#35;`, ...). Unknown sequences are kept verbatim.
pub fn unescape_label(raw: &str) -> Cow<'_, str> {
    if !raw.contains('#') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(hash) = rest.find('#') {
        out.push_str(&rest[..hash]);
        let after = &rest[hash + 1..];
        let decoded = after
            .find(';')
            .and_then(|semi| decode_entity(&after[..semi]).map(|ch| (ch, semi)));
        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('#');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

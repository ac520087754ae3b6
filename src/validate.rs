//! Authoring-time checks on a DocStructure.
//!
//! The registry is compiled in, so nothing here runs on the lookup path. The
//! `check` command (and the tests below) use it to catch a bad edit to the
//! table before it ships.

use crate::Result;
use crate::diagnostics;
use crate::structure::{DocStructure, SectionKey};

use anyhow::{Context, bail};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

// One or more segments of [A-Za-z0-9_.-] joined by single slashes.
const RELATIVE_PATH_RE: &str = r"^[A-Za-z0-9_.-]+(?:/[A-Za-z0-9_.-]+)*$";

#[derive(Debug, Clone, Serialize)]
pub struct CheckedSection {
    pub key: SectionKey,
    pub relative: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub root: String,
    pub sections: Vec<CheckedSection>,
}

/// Validate root and every section path. Fails on the first violation.
///
/// A section that does not end in `.md` is allowed but warned about.
pub fn check(structure: &DocStructure) -> Result<Report> {
    let re = Regex::new(RELATIVE_PATH_RE)?;

    check_root(structure.root, &re)?;

    let mut seen: BTreeMap<&str, SectionKey> = BTreeMap::new();
    let mut sections = Vec::new();
    for (key, rel) in structure.entries() {
        check_relative(rel, &re)
            .with_context(|| diagnostics::error_message(format!("section {}", key)))?;

        if let Some(prev) = seen.insert(rel, key) {
            bail!(
                "{}",
                diagnostics::error_message(format!(
                    "sections {} and {} both point at {}",
                    prev, key, rel
                ))
            );
        }

        if !rel.ends_with(".md") {
            diagnostics::warn(format!("section {} is not a markdown file: {}", key, rel));
        }

        let path = structure.path(key);
        diagnostics::info(format!("{} -> {}", key, path));
        sections.push(CheckedSection {
            key,
            relative: rel.to_string(),
            path,
        });
    }

    Ok(Report {
        root: structure.root.to_string(),
        sections,
    })
}

impl Report {
    pub fn summary(&self) -> String {
        format!("ok: {} sections under {}", self.sections.len(), self.root)
    }
}

fn check_root(root: &str, re: &Regex) -> Result<()> {
    if root.is_empty() {
        bail!("{}", diagnostics::error_message("root is empty"));
    }
    let Some(rest) = root.strip_prefix('/') else {
        bail!(
            "{}",
            diagnostics::error_message(format!("root must be absolute: {:?}", root))
        );
    };
    if rest.ends_with('/') {
        bail!(
            "{}",
            diagnostics::error_message(format!("root has a trailing slash: {:?}", root))
        );
    }
    // "/" alone is a valid root; anything longer must be well-formed segments.
    if !rest.is_empty() && (!re.is_match(rest) || has_traversal(rest)) {
        bail!(
            "{}",
            diagnostics::error_message(format!("malformed root: {:?}", root))
        );
    }
    Ok(())
}

// Messages here carry no prefix; `check` adds "docmap: section <key>" as context.
fn check_relative(rel: &str, re: &Regex) -> Result<()> {
    if rel.is_empty() {
        bail!("empty path");
    }
    if rel.starts_with('/') {
        bail!("path is absolute: {:?}", rel);
    }
    if rel.contains("..") {
        bail!("path contains '..': {:?}", rel);
    }
    if has_traversal(rel) || !re.is_match(rel) {
        bail!("path is malformed: {:?}", rel);
    }
    Ok(())
}

fn has_traversal(path: &str) -> bool {
    path.split('/').any(|seg| seg == "." || seg == "..")
}

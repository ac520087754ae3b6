//! Documentation structure registry.
//!
//! This module owns:
//! - SectionKey (closed set of section identifiers)
//! - Sections (key -> path relative to the root)
//! - DOC_STRUCTURE, the compiled-in registry
//!
//! Everything here is built in a const context and never mutated, so the
//! registry can be read from any thread without synchronization.

pub mod key;
pub mod sections;

pub use key::SectionKey;
pub use sections::Sections;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocStructure {
    /// Absolute base directory. No trailing slash.
    pub root: &'static str,
    pub sections: Sections,
}

pub static DOC_STRUCTURE: DocStructure = DocStructure {
    root: "/docs",
    sections: Sections {
        setup: "setup.md",
        architecture: "architecture.md",
        api: "api/index.md",
        database: "database/schema.md",
        frontend: "frontend/overview.md",
        deployment: "deployment.md",
    },
};

impl DocStructure {
    pub fn relative(&self, key: SectionKey) -> &'static str {
        self.sections.get(key)
    }

    /// Full document path: `root + "/" + relative`.
    pub fn path(&self, key: SectionKey) -> String {
        format!("{}/{}", self.root, self.relative(key))
    }

    pub fn entries(&self) -> impl Iterator<Item = (SectionKey, &'static str)> + '_ {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    #[test]
    fn literal_values() {
        let expected = [
            (SectionKey::Setup, "setup.md"),
            (SectionKey::Architecture, "architecture.md"),
            (SectionKey::Api, "api/index.md"),
            (SectionKey::Database, "database/schema.md"),
            (SectionKey::Frontend, "frontend/overview.md"),
            (SectionKey::Deployment, "deployment.md"),
        ];
        for (key, rel) in expected {
            assert_eq!(DOC_STRUCTURE.relative(key), rel);
            // Repeated reads are stable.
            assert_eq!(DOC_STRUCTURE.relative(key), DOC_STRUCTURE.relative(key));
        }
    }

    #[test]
    fn root_is_docs_without_trailing_slash() {
        assert_eq!(DOC_STRUCTURE.root, "/docs");
        assert!(!DOC_STRUCTURE.root.ends_with('/'));
    }

    #[test]
    fn values_are_relative_and_non_empty() {
        for (key, rel) in DOC_STRUCTURE.entries() {
            assert!(!rel.is_empty(), "{key} is empty");
            assert!(!rel.starts_with('/'), "{key} is absolute: {rel}");
            assert!(!rel.contains(".."), "{key} has traversal: {rel}");
        }
    }

    #[test]
    fn key_set_is_exactly_six() {
        let keys: BTreeSet<&str> = DOC_STRUCTURE.entries().map(|(k, _)| k.as_str()).collect();
        let expected: BTreeSet<&str> = [
            "setup",
            "architecture",
            "api",
            "database",
            "frontend",
            "deployment",
        ]
        .into_iter()
        .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn api_path_composes_with_root() {
        assert_eq!(DOC_STRUCTURE.path(SectionKey::Api), "/docs/api/index.md");
    }

    #[test]
    fn modifying_a_clone_leaves_registry_untouched() {
        let mut copy = DOC_STRUCTURE.clone();
        copy.root = "/elsewhere";
        copy.sections.api = "api/v2.md";
        assert_eq!(DOC_STRUCTURE.root, "/docs");
        assert_eq!(DOC_STRUCTURE.relative(SectionKey::Api), "api/index.md");
        assert_eq!(copy.path(SectionKey::Api), "/elsewhere/api/v2.md");
    }

    #[test]
    fn concurrent_reads_agree() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| DOC_STRUCTURE.path(SectionKey::Database)))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "/docs/database/schema.md");
        }
    }

    #[test]
    fn serializes_to_nested_object() {
        let json = serde_json::to_value(&DOC_STRUCTURE).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "root": "/docs",
                "sections": {
                    "setup": "setup.md",
                    "architecture": "architecture.md",
                    "api": "api/index.md",
                    "database": "database/schema.md",
                    "frontend": "frontend/overview.md",
                    "deployment": "deployment.md"
                }
            })
        );
    }
}

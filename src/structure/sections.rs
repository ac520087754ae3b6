use crate::structure::SectionKey;
use serde::Serialize;

/// Relative path of each section, one field per key.
///
/// Field names double as the JSON keys, so the serialized shape is
/// `{"setup": "...", "architecture": "...", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sections {
    pub setup: &'static str,
    pub architecture: &'static str,
    pub api: &'static str,
    pub database: &'static str,
    pub frontend: &'static str,
    pub deployment: &'static str,
}

impl Sections {
    pub fn get(&self, key: SectionKey) -> &'static str {
        match key {
            SectionKey::Setup => self.setup,
            SectionKey::Architecture => self.architecture,
            SectionKey::Api => self.api,
            SectionKey::Database => self.database,
            SectionKey::Frontend => self.frontend,
            SectionKey::Deployment => self.deployment,
        }
    }

    /// (key, relative path) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &'static str)> + '_ {
        SectionKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

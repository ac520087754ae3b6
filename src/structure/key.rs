//! Section identifiers.
//!
//! The key set is closed: lookups through `SectionKey` cannot miss. Text from
//! the command line goes through `FromStr`, which is the only place an
//! unknown key can show up.

use crate::Result;
use crate::diagnostics;

use anyhow::bail;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Setup,
    Architecture,
    Api,
    Database,
    Frontend,
    Deployment,
}

impl SectionKey {
    /// Every key, in declaration order.
    pub const ALL: [SectionKey; 6] = [
        SectionKey::Setup,
        SectionKey::Architecture,
        SectionKey::Api,
        SectionKey::Database,
        SectionKey::Frontend,
        SectionKey::Deployment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Setup => "setup",
            SectionKey::Architecture => "architecture",
            SectionKey::Api => "api",
            SectionKey::Database => "database",
            SectionKey::Frontend => "frontend",
            SectionKey::Deployment => "deployment",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match SectionKey::ALL.iter().find(|k| k.as_str() == s) {
            Some(key) => Ok(*key),
            None => {
                let known: Vec<&str> = SectionKey::ALL.iter().map(|k| k.as_str()).collect();
                bail!(
                    "{}",
                    diagnostics::error_message(format!(
                        "unknown section key: {:?} (expected one of {})",
                        s,
                        known.join(", ")
                    ))
                );
            }
        }
    }
}

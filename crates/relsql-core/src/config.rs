//! Render configuration.
//!
//! The mapping layer usually embeds a [`RenderConfig`] in its own
//! configuration file; every field has a default so a partial table is
//! enough.

use serde::{Deserialize, Serialize};

use crate::dialect::DialectKind;

/// How identifiers are quoted in rendered SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quoting {
    /// Quote only identifiers created quoted.
    #[default]
    AsDeclared,
    /// Quote every identifier.
    Always,
    /// Never quote.
    Never,
}

impl Quoting {
    /// Returns whether an identifier declared with `declared` is quoted.
    #[must_use]
    pub const fn applies(self, declared: bool) -> bool {
        match self {
            Self::AsDeclared => declared,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Settings for [`SqlRenderer`](crate::render::SqlRenderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Target dialect.
    pub dialect: DialectKind,
    /// Identifier quoting mode.
    pub quoting: Quoting,
}

impl RenderConfig {
    /// Creates a configuration for `dialect` with default quoting.
    #[must_use]
    pub fn for_dialect(dialect: DialectKind) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// Sets the quoting mode.
    #[must_use]
    pub const fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoting_applies() {
        assert!(Quoting::AsDeclared.applies(true));
        assert!(!Quoting::AsDeclared.applies(false));
        assert!(Quoting::Always.applies(false));
        assert!(!Quoting::Never.applies(true));
    }

    #[test]
    fn test_builder_methods() {
        let config = RenderConfig::for_dialect(DialectKind::MySql).with_quoting(Quoting::Always);
        assert_eq!(config.dialect, DialectKind::MySql);
        assert_eq!(config.quoting, Quoting::Always);
    }
}

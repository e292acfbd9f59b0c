//! Parsing of `propex-context` comment directives.
//!
//! A context directive declares metadata for the marker(s) at a referencing
//! site, the comment analog of an annotation:
//!
//! - `// propex-context scope=environment "database host for this env"`
//! - `# propex-context scope=node`
//! - `// propex-context "free text only"`
//!
//! A directive on the same line as a marker applies to that line; a
//! directive on a line of its own applies to the next line.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::Scope;

pub const DIRECTIVE_NAME: &str = "propex-context";

static QUOTED_STRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());

static SCOPE_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"scope\s*=\s*([A-Za-z_-]+)").unwrap());

/// Metadata declared by one context directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextDirective {
    pub scope: Scope,
    pub description: String,
}

impl ContextDirective {
    /// Parse a directive from a source line. Returns `None` when the line
    /// carries no `propex-context` marker.
    ///
    /// Unknown scope tokens degrade to `NotSpecified` instead of failing
    /// the scan; the description is the first double-quoted string after
    /// the directive name, empty when absent.
    pub fn parse(line: &str) -> Option<Self> {
        let start = line.find(DIRECTIVE_NAME)?;
        let rest = &line[start + DIRECTIVE_NAME.len()..];

        let scope = SCOPE_TOKEN_REGEX
            .captures(rest)
            .map(|c| Scope::parse(&c[1]))
            .unwrap_or_default();

        let description = QUOTED_STRING_REGEX
            .captures(rest)
            .map(|c| c[1].to_string())
            .unwrap_or_default();

        Some(Self { scope, description })
    }
}

//! Occurrence data model and the marker parser.
//!
//! A *marker* is a textual placeholder of the form `${key}` or
//! `${key:default}` denoting an externally-configurable value. The scanner
//! hands us raw marker strings together with where they were found; this
//! module turns each of them into a structured [`KeyOccurrence`], or drops
//! it when the string is not a marker at all.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Declared lifecycle/visibility classification of a configuration key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// No information given at the referencing site.
    #[default]
    NotSpecified,
    /// Same value for all nodes and environments.
    Application,
    /// Different value per environment, same across its nodes.
    Environment,
    /// Different value per application node.
    Node,
}

impl Scope {
    /// Parse a scope token from a context directive (case insensitive).
    /// Unknown tokens map to `NotSpecified` rather than failing the scan.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "application" | "app" => Self::Application,
            "environment" | "env" => Self::Environment,
            "node" => Self::Node,
            _ => Self::NotSpecified,
        }
    }

    pub fn is_specified(&self) -> bool {
        !matches!(self, Self::NotSpecified)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::NotSpecified => write!(f, "NOT_SPECIFIED"),
            Scope::Application => write!(f, "APPLICATION"),
            Scope::Environment => write!(f, "ENVIRONMENT"),
            Scope::Node => write!(f, "NODE"),
        }
    }
}

/// One unparsed marker candidate as reported by the scanner.
///
/// `origin_label` identifies the referencing code location (a file stem,
/// the analog of a simple type name). It is reporting-only and never part
/// of a key's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOccurrence {
    pub marker_text: String,
    pub origin_label: String,
    pub scope: Scope,
    pub description: String,
}

impl RawOccurrence {
    pub fn new(marker_text: impl Into<String>, origin_label: impl Into<String>) -> Self {
        Self {
            marker_text: marker_text.into(),
            origin_label: origin_label.into(),
            scope: Scope::NotSpecified,
            description: String::new(),
        }
    }

    pub fn with_context(mut self, scope: Scope, description: impl Into<String>) -> Self {
        self.scope = scope;
        self.description = description.into();
        self
    }
}

/// A successfully parsed marker reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOccurrence {
    /// Substring of the marker body before the first `:`. May legitimately
    /// be empty when the body starts with `:` (permissive, see [`parse`]).
    pub key: String,
    /// Everything after the first `:` in the body, when present. An empty
    /// default is "present but empty" here; the aggregator excludes it
    /// from the record-level default set.
    pub default_value: Option<String>,
    pub origin_label: String,
    pub scope: Scope,
    pub description: String,
}

// Greedy body: spans from the first `${` to the *last* `}` on purpose, so a
// default value may itself contain `}` without truncating the match.
static MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(?<body>.*)\}").unwrap());

/// Parse one raw occurrence into a structured key occurrence.
///
/// Returns `None` when `marker_text` contains no `${`...`}` span, or when
/// the span's body is empty. That is not an error: not every string passed
/// through the pipeline is expected to be a configuration marker, so
/// non-markers are silently dropped.
///
/// The body is split on the first `:` into at most two parts; extra colons
/// belong to the default value text. An empty key (body starting with `:`)
/// is accepted as-is.
pub fn parse(raw: RawOccurrence) -> Option<KeyOccurrence> {
    let captures = MARKER_REGEX.captures(&raw.marker_text)?;
    let body = captures.name("body")?.as_str();
    if body.is_empty() {
        return None;
    }

    let (key, default_value) = match body.split_once(':') {
        Some((key, default)) => (key.to_string(), Some(default.to_string())),
        None => (body.to_string(), None),
    };

    Some(KeyOccurrence {
        key,
        default_value,
        origin_label: raw.origin_label,
        scope: raw.scope,
        description: raw.description,
    })
}

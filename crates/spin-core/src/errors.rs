//! Structured error types shared across the spin lattice crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes attached to [`ErrorInfo::code`].
pub mod codes {
    /// Site count is too large for `2^N` to be represented.
    pub const INVALID_SITE_COUNT: &str = "invalid-site-count";
    /// Decimal index lies outside `[0, 2^N)`.
    pub const INVALID_INDEX: &str = "invalid-index";
    /// Configuration does not fit in a 64-bit index.
    pub const INDEX_OVERFLOW: &str = "index-overflow";
    /// A query ran before any initializer materialized the configuration.
    pub const UNSET_CONFIGURATION: &str = "unset-configuration";
    /// A configuration element lies outside `{0, 1}`.
    pub const INVALID_ELEMENT: &str = "invalid-element";
    /// Enumeration run configuration failed validation.
    pub const INVALID_RUN_CONFIG: &str = "invalid-run-config";
}

/// Structured payload attached to every [`SpinError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (site counts, indices, positions).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for spin lattice operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SpinError {
    /// Lattice shape errors (site count).
    #[error("lattice error: {0}")]
    Lattice(ErrorInfo),
    /// Decimal index errors.
    #[error("index error: {0}")]
    Index(ErrorInfo),
    /// Configuration state errors (unset or corrupted).
    #[error("state error: {0}")]
    State(ErrorInfo),
    /// Enumeration run configuration errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl SpinError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SpinError::Lattice(info)
            | SpinError::Index(info)
            | SpinError::State(info)
            | SpinError::Config(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Site count whose configuration space cannot be represented.
    pub fn invalid_site_count(site_count: u32, max: u32) -> Self {
        SpinError::Lattice(
            ErrorInfo::new(
                codes::INVALID_SITE_COUNT,
                format!("site count {site_count} exceeds the representable maximum"),
            )
            .with_context("site_count", site_count)
            .with_context("max", max),
        )
    }

    /// Index outside the configuration space of the lattice.
    pub fn invalid_index(index: u64, config_space_size: u64) -> Self {
        SpinError::Index(
            ErrorInfo::new(
                codes::INVALID_INDEX,
                format!("index {index} is outside the configuration space"),
            )
            .with_context("index", index)
            .with_context("config_space_size", config_space_size)
            .with_hint("valid indices lie in [0, config_space_size)"),
        )
    }

    /// Query issued before any initializer ran.
    pub fn unset_configuration(operation: &str) -> Self {
        SpinError::State(
            ErrorInfo::new(
                codes::UNSET_CONFIGURATION,
                "configuration has not been initialized",
            )
            .with_context("operation", operation)
            .with_hint("call init_from_index or init_from_signs first"),
        )
    }

    /// Element outside `{0, 1}` found at `position`.
    pub fn invalid_element(position: usize, value: u8) -> Self {
        SpinError::State(
            ErrorInfo::new(
                codes::INVALID_ELEMENT,
                format!("spin value {value} at position {position} is neither 0 nor 1"),
            )
            .with_context("position", position)
            .with_context("value", value),
        )
    }

    /// Enumeration run configuration rejected by validation.
    pub fn invalid_run_config(message: impl Into<String>) -> Self {
        SpinError::Config(ErrorInfo::new(codes::INVALID_RUN_CONFIG, message))
    }
}

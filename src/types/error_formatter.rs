//! Error chain formatting utilities.

use core::fmt::Display;

use crate::types::alloc_type::{String, Vec};

/// Trait for customizing error chain formatting.
///
/// A chain is rendered as a flat list of items: one per link (message and
/// depth) and one per root cause. The provided methods give the default
/// single-line layout.
pub trait ChainFormatter {
    fn format_link(&self, message: &str, depth: usize) -> String {
        alloc::format!("{message} (cause count {depth})")
    }

    fn format_cause(&self, cause: &dyn Display) -> String {
        alloc::format!("root cause: {cause}")
    }

    fn separator(&self) -> &str {
        " -> "
    }

    fn format_chain(&self, items: impl Iterator<Item = String>) -> String {
        items.collect::<Vec<_>>().join(self.separator())
    }
}

/// Configuration-based chain formatter.
///
/// # Examples
///
/// ```
/// use fault_rail::{ChainFormatConfig, ChainedError};
///
/// let err = ChainedError::wrap(std::fmt::Error, "render");
///
/// assert_eq!(
///     err.error_chain_with(ChainFormatConfig::compact()),
///     "render | root cause: an error occurred when formatting an argument"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainFormatConfig {
    pub separator: String,
    pub link_prefix: Option<String>,
    pub cause_prefix: String,
    pub show_count: bool,
    pub cascade: bool,
    pub indent: String,
}

impl Default for ChainFormatConfig {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
            link_prefix: None,
            cause_prefix: "root cause: ".into(),
            show_count: true,
            cascade: false,
            indent: "  ".into(),
        }
    }
}

impl ChainFormatConfig {
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            link_prefix: Some("├─ ".into()),
            cause_prefix: "└─ ".into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn cascaded() -> Self {
        Self { separator: "\n".into(), cascade: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), show_count: false, ..Default::default() }
    }

    #[inline]
    pub fn no_count() -> Self {
        Self { show_count: false, ..Default::default() }
    }
}

impl ChainFormatter for ChainFormatConfig {
    fn format_link(&self, message: &str, depth: usize) -> String {
        let mut result = String::new();
        if let Some(prefix) = &self.link_prefix {
            result.push_str(prefix);
        }
        result.push_str(message);
        if self.show_count {
            result.push_str(&alloc::format!(" (cause count {depth})"));
        }
        result
    }

    fn format_cause(&self, cause: &dyn Display) -> String {
        alloc::format!("{}{}", self.cause_prefix, cause)
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_chain(&self, items: impl Iterator<Item = String>) -> String {
        let mut result = String::new();
        for (i, item) in items.enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
                if self.cascade {
                    for _ in 0..i {
                        result.push_str(&self.indent);
                    }
                }
            }
            result.push_str(&item);
        }
        result
    }
}

//! The badge request record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BadgeError;
use crate::style::Style;

/// Label or message content. Numbers are accepted and rendered in their
/// decimal form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BadgeText {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl Default for BadgeText {
    fn default() -> Self {
        BadgeText::Text(String::new())
    }
}

impl fmt::Display for BadgeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeText::Text(s) => f.write_str(s),
            BadgeText::Integer(n) => write!(f, "{n}"),
            BadgeText::Unsigned(n) => write!(f, "{n}"),
            BadgeText::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for BadgeText {
    fn from(value: &str) -> Self {
        BadgeText::Text(value.to_string())
    }
}

impl From<String> for BadgeText {
    fn from(value: String) -> Self {
        BadgeText::Text(value)
    }
}

impl From<i64> for BadgeText {
    fn from(value: i64) -> Self {
        BadgeText::Integer(value)
    }
}

impl From<i32> for BadgeText {
    fn from(value: i32) -> Self {
        BadgeText::Integer(i64::from(value))
    }
}

impl From<u64> for BadgeText {
    fn from(value: u64) -> Self {
        BadgeText::Unsigned(value)
    }
}

impl From<f64> for BadgeText {
    fn from(value: f64) -> Self {
        BadgeText::Float(value)
    }
}

/// Everything needed to render one badge.
///
/// Deserializes from the camelCase JSON record a serving layer receives:
///
/// ```json
/// {"label": "build", "message": "passing", "style": "flat", "labelColor": "#555"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeRequest {
    /// Left-hand text; may be empty.
    #[serde(default)]
    pub label: BadgeText,

    /// Right-hand text. Required in JSON.
    pub message: BadgeText,

    /// Style name; absent means `flat`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Message box background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Label box background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,

    /// Pre-encoded image data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Width reserved for the logo, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_width: Option<u32>,

    /// Click-through targets for the label and message boxes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,

    /// Appended to element ids so several badges can share a page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_suffix: Option<String>,
}

impl BadgeRequest {
    pub fn new(message: impl Into<BadgeText>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Parse a request from its JSON form.
    pub fn from_json(s: &str) -> Result<Self, BadgeError> {
        Ok(serde_json::from_str(s)?)
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<BadgeText>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: impl Into<String>) -> Self {
        self.label_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    #[must_use]
    pub fn with_logo_width(mut self, width: u32) -> Self {
        self.logo_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_id_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.id_suffix = Some(suffix.into());
        self
    }

    /// Validated style, defaulting to flat when absent.
    pub fn resolved_style(&self) -> Result<Style, BadgeError> {
        Style::resolve(self.style.as_deref())
    }
}

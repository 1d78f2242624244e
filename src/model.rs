use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::theme::{Background, is_valid_hex_color};

pub const DEFAULT_CARD_THEME: &str = "default_repocard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub color: String,
}

/// Repository metadata as supplied by the data layer.
///
/// Deserializes from the GraphQL repository shape (`nameWithOwner`,
/// `stargazers.totalCount`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RepositoryPayload")]
pub struct RepositorySummary {
    pub name: String,
    pub name_with_owner: String,
    pub description: Option<String>,
    pub primary_language: Option<Language>,
    pub star_count: u64,
    pub fork_count: u64,
    pub is_archived: bool,
    pub is_template: bool,
}

impl RepositorySummary {
    pub fn new(name: &str, name_with_owner: &str) -> Self {
        Self {
            name: name.to_string(),
            name_with_owner: name_with_owner.to_string(),
            description: None,
            primary_language: None,
            star_count: 0,
            fork_count: 0,
            is_archived: false,
            is_template: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryPayload {
    name: String,
    #[serde(default)]
    name_with_owner: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    primary_language: Option<Language>,
    #[serde(default)]
    stargazers: Option<CountPayload>,
    #[serde(default)]
    fork_count: u64,
    #[serde(default)]
    is_archived: bool,
    #[serde(default)]
    is_template: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountPayload {
    total_count: u64,
}

impl From<RepositoryPayload> for RepositorySummary {
    fn from(payload: RepositoryPayload) -> Self {
        let name_with_owner = payload
            .name_with_owner
            .unwrap_or_else(|| payload.name.clone());
        Self {
            name: payload.name,
            name_with_owner,
            description: payload.description,
            primary_language: payload.primary_language,
            star_count: payload.stargazers.map(|s| s.total_count).unwrap_or(0),
            fork_count: payload.fork_count,
            is_archived: payload.is_archived,
            is_template: payload.is_template,
        }
    }
}

/// Styling knobs for a card. Unset colors fall back to the theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub title_color: Option<String>,
    pub icon_color: Option<String>,
    pub text_color: Option<String>,
    pub bg_color: Option<String>,
    pub show_owner: bool,
    pub theme: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            title_color: None,
            icon_color: None,
            text_color: None,
            bg_color: None,
            show_owner: false,
            theme: DEFAULT_CARD_THEME.to_string(),
        }
    }
}

impl StyleOptions {
    /// Checks the preconditions the renderer assumes but does not enforce.
    ///
    /// The renderer quietly replaces invalid colors with the default theme's
    /// and renders a malformed gradient with missing stops. Front ends that
    /// want to report those cases call this first.
    pub fn validate(&self) -> Result<(), CardError> {
        for (channel, value) in [
            ("title_color", &self.title_color),
            ("icon_color", &self.icon_color),
            ("text_color", &self.text_color),
        ] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty())
                && !is_valid_hex_color(value)
            {
                return Err(CardError::InvalidColor {
                    channel,
                    value: value.to_string(),
                });
            }
        }

        let Some(spec) = self.bg_color.as_deref().filter(|v| !v.is_empty()) else {
            return Ok(());
        };
        if !Background::is_gradient_spec(spec) {
            if is_valid_hex_color(spec) {
                return Ok(());
            }
            return Err(CardError::InvalidColor {
                channel: "bg_color",
                value: spec.to_string(),
            });
        }
        let parts: Vec<&str> = spec.split(',').collect();
        let well_formed = parts.len() == 3
            && parts[0].trim().parse::<f32>().is_ok()
            && is_valid_hex_color(parts[1])
            && is_valid_hex_color(parts[2]);
        if well_formed {
            Ok(())
        } else {
            Err(CardError::MalformedGradient {
                spec: spec.to_string(),
            })
        }
    }
}

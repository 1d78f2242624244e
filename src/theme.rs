use serde::{Deserialize, Serialize};

use crate::model::StyleOptions;

/// Theme used when a requested theme is unknown or one of its colors is invalid.
pub const FALLBACK_THEME: &str = "default";

/// Default colors of a named card theme. Hex values are stored without `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub title_color: String,
    pub icon_color: String,
    pub text_color: String,
    pub bg_color: String,
}

impl Theme {
    fn from_hex(title: &str, icon: &str, text: &str, bg: &str) -> Self {
        Self {
            title_color: title.to_string(),
            icon_color: icon.to_string(),
            text_color: text.to_string(),
            bg_color: bg.to_string(),
        }
    }

    pub fn fallback() -> Self {
        Self::from_hex("2f80ed", "4c71f2", "333", "fffefe")
    }

    pub fn default_repocard() -> Self {
        Self::from_hex("2f80ed", "586069", "333", "fffefe")
    }

    /// Looks up a built-in theme by name.
    pub fn named(name: &str) -> Option<Self> {
        let theme = match name {
            "default" => Self::fallback(),
            "default_repocard" => Self::default_repocard(),
            "dark" => Self::from_hex("fff", "79ff97", "9f9f9f", "151515"),
            "radical" => Self::from_hex("fe428e", "f8d847", "a9fef7", "141321"),
            "merko" => Self::from_hex("abd200", "b7d364", "68b587", "0a0f0b"),
            "gruvbox" => Self::from_hex("fabd2f", "fe8019", "8ec07c", "282828"),
            "tokyonight" => Self::from_hex("70a5fd", "bf91f3", "38bdae", "1a1b27"),
            "onedark" => Self::from_hex("e4bf7a", "8eb573", "df6d74", "282c34"),
            "cobalt" => Self::from_hex("e683d9", "0480ef", "75eeb2", "193549"),
            "synthwave" => Self::from_hex("e2e9ec", "ef8539", "e5289e", "2b213a"),
            "highcontrast" => Self::from_hex("e7f216", "00ffff", "fff", "000"),
            "dracula" => Self::from_hex("ff6e96", "79dafa", "f8f8f2", "282a36"),
            _ => return None,
        };
        Some(theme)
    }

    pub fn builtin_names() -> &'static [&'static str] {
        &[
            "default",
            "default_repocard",
            "dark",
            "radical",
            "merko",
            "gruvbox",
            "tokyonight",
            "onedark",
            "cobalt",
            "synthwave",
            "highcontrast",
            "dracula",
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Flat(String),
    Gradient {
        angle: String,
        start: String,
        end: String,
    },
}

impl Background {
    /// A background override is a gradient when it is not shaped like a bare
    /// 3 or 6 digit hex color.
    pub fn is_gradient_spec(spec: &str) -> bool {
        let len = spec.len();
        !spec.is_empty() && len != 6 && len != 3
    }

    fn parse_gradient(spec: &str) -> Self {
        // Wrong arity is the caller's contract violation; missing parts render empty.
        let mut parts = spec.split(',');
        let mut next = || parts.next().unwrap_or_default().trim().to_string();
        let angle = next();
        let start = next();
        let end = next();
        Background::Gradient { angle, start, end }
    }

    /// The value for a `fill` attribute.
    pub fn fill(&self) -> String {
        match self {
            Background::Flat(color) => color.clone(),
            Background::Gradient { .. } => "url('#gradient')".to_string(),
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Background::Gradient { .. })
    }
}

/// Concrete colors for a single card, every channel populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub title_color: String,
    pub text_color: String,
    pub icon_color: String,
    pub background: Background,
}

pub fn is_valid_hex_color(value: &str) -> bool {
    matches!(value.len(), 3 | 4 | 6 | 8) && value.chars().all(|ch| ch.is_ascii_hexdigit())
}

/// Layers explicit overrides over the selected theme over the fallback theme.
pub fn resolve_card_colors(options: &StyleOptions) -> ResolvedTheme {
    let fallback = Theme::fallback();
    let selected = Theme::named(&options.theme).unwrap_or_else(|| {
        tracing::debug!(theme = %options.theme, "unknown theme, using fallback colors");
        fallback.clone()
    });

    let title_color = pick_color(
        options.title_color.as_deref(),
        &selected.title_color,
        &fallback.title_color,
    );
    let icon_color = pick_color(
        options.icon_color.as_deref(),
        &selected.icon_color,
        &fallback.icon_color,
    );
    let text_color = pick_color(
        options.text_color.as_deref(),
        &selected.text_color,
        &fallback.text_color,
    );

    let bg_override = options.bg_color.as_deref().filter(|v| !v.is_empty());
    let background = match bg_override {
        Some(spec) if Background::is_gradient_spec(spec) => Background::parse_gradient(spec),
        _ => Background::Flat(pick_color(bg_override, &selected.bg_color, &fallback.bg_color)),
    };

    ResolvedTheme {
        title_color,
        text_color,
        icon_color,
        background,
    }
}

fn pick_color(explicit: Option<&str>, themed: &str, fallback: &str) -> String {
    let candidate = explicit.filter(|v| !v.is_empty()).unwrap_or(themed);
    if is_valid_hex_color(candidate) {
        format!("#{candidate}")
    } else {
        format!("#{fallback}")
    }
}

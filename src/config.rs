use crate::model::StyleOptions;
use crate::text::WrapOptions;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub style: StyleOptions,
    pub wrap: WrapOptions,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    title_color: Option<String>,
    icon_color: Option<String>,
    text_color: Option<String>,
    bg_color: Option<String>,
    show_owner: Option<bool>,
    description_width: Option<usize>,
    description_max_lines: Option<usize>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;
    tracing::debug!(path = %path.display(), "loaded card config");
    Ok(apply_config_file(config, parsed))
}

fn apply_config_file(mut config: Config, parsed: ConfigFile) -> Config {
    if let Some(theme) = parsed.theme {
        config.style.theme = theme;
    }
    if parsed.title_color.is_some() {
        config.style.title_color = parsed.title_color;
    }
    if parsed.icon_color.is_some() {
        config.style.icon_color = parsed.icon_color;
    }
    if parsed.text_color.is_some() {
        config.style.text_color = parsed.text_color;
    }
    if parsed.bg_color.is_some() {
        config.style.bg_color = parsed.bg_color;
    }
    if let Some(show_owner) = parsed.show_owner {
        config.style.show_owner = show_owner;
    }
    if let Some(width) = parsed.description_width {
        config.wrap.width = width.max(1);
    }
    if let Some(max_lines) = parsed.description_max_lines {
        config.wrap.max_lines = max_lines.max(1);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_CARD_THEME;
    use std::io::Write;

    #[test]
    fn missing_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.style.theme, DEFAULT_CARD_THEME);
        assert_eq!(config.wrap, WrapOptions::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "theme": "dracula", "bgColor": "90,ff0000,00ff00", "showOwner": true, "descriptionMaxLines": 2 }}"#
        )
        .unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.style.theme, "dracula");
        assert_eq!(config.style.bg_color.as_deref(), Some("90,ff0000,00ff00"));
        assert!(config.style.show_owner);
        assert_eq!(config.wrap.max_lines, 2);
        assert_eq!(config.wrap.width, 60);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(load_config(Some(file.path())).is_err());
    }
}

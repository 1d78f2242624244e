use repo_card_renderer::{RepositorySummary, StyleOptions, render_repo_card};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRenderOptions {
    theme: Option<String>,
    title_color: Option<String>,
    icon_color: Option<String>,
    text_color: Option<String>,
    bg_color: Option<String>,
    show_owner: Option<bool>,
}

fn build_style_options(options: CardRenderOptions) -> StyleOptions {
    let mut style = StyleOptions::default();
    if let Some(theme) = options.theme {
        style.theme = theme;
    }
    style.title_color = options.title_color;
    style.icon_color = options.icon_color;
    style.text_color = options.text_color;
    style.bg_color = options.bg_color;
    style.show_owner = options.show_owner.unwrap_or(false);
    style
}

fn render_card(repo_json: &str, options_json: Option<&str>) -> Result<String, String> {
    let options = match options_json {
        Some(raw) => serde_json::from_str::<CardRenderOptions>(raw).map_err(|e| e.to_string())?,
        None => CardRenderOptions::default(),
    };
    let style = build_style_options(options);
    style.validate().map_err(|e| e.to_string())?;
    let repo: RepositorySummary = serde_json::from_str(repo_json).map_err(|e| e.to_string())?;
    Ok(render_repo_card(&repo, &style))
}

#[wasm_bindgen]
pub fn render_repo_card_svg(repo_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    render_card(repo_json, options_json.as_deref()).map_err(|error| JsValue::from_str(&error))
}

#[cfg(test)]
mod tests {
    use crate::{CardRenderOptions, build_style_options, render_card};

    const REPO: &str = r##"{
        "name": "foo",
        "nameWithOwner": "octo/foo",
        "description": ":rocket: Does stuff",
        "primaryLanguage": { "name": "Rust", "color": "#dea584" },
        "stargazers": { "totalCount": 42 },
        "forkCount": 3
    }"##;

    #[test]
    fn renders_card_with_default_options() {
        let svg = render_card(REPO, None).expect("card should render");
        assert!(svg.contains("<svg"));
        assert!(svg.contains(">Rust</text>"));
        assert!(svg.contains(">42</text>"));
    }

    #[test]
    fn camel_case_options_are_applied() {
        let svg = render_card(REPO, Some(r#"{ "theme": "dark", "showOwner": true }"#))
            .expect("card should render");
        assert!(svg.contains(">octo/foo</text>"));
        assert!(svg.contains("fill: #fff"));
    }

    #[test]
    fn malformed_gradient_is_rejected() {
        assert!(render_card(REPO, Some(r#"{ "bgColor": "12345" }"#)).is_err());
    }

    #[test]
    fn default_options_use_repo_card_theme() {
        let style = build_style_options(CardRenderOptions::default());
        assert_eq!(style.theme, "default_repocard");
        assert!(!style.show_owner);
    }
}

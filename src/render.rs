use crate::emoji::parse_emojis;
use crate::flex::{FlexDirection, Fragment, flex_layout, fmt_num};
use crate::icons;
use crate::model::{RepositorySummary, StyleOptions};
use crate::text::{
    NO_DESCRIPTION, WrapOptions, encode_html, escape_xml, k_formatter, text_width,
    wrap_text_multiline,
};
use crate::theme::{Background, ResolvedTheme, resolve_card_colors};
use anyhow::Result;
use std::path::Path;

pub const CARD_WIDTH: f32 = 400.0;
const LINE_HEIGHT: f32 = 10.0;
const SINGLE_LINE_BASE_HEIGHT: f32 = 110.0;
const MULTI_LINE_BASE_HEIGHT: f32 = 120.0;
const STATS_GAP: f32 = 65.0;
const STATS_X_WITH_LANGUAGE: f32 = 155.0;
const STATS_X_WITHOUT_LANGUAGE: f32 = 25.0;
const LONG_LANGUAGE_CHARS: usize = 15;
const LANGUAGE_SHIFT: f32 = 30.0;
const FALLBACK_LANGUAGE_NAME: &str = "Unspecified";
const FALLBACK_LANGUAGE_COLOR: &str = "#333";

/// Card height for a description wrapped to `lines` lines.
pub fn card_height(lines: usize) -> f32 {
    let base = if lines > 1 {
        MULTI_LINE_BASE_HEIGHT
    } else {
        SINGLE_LINE_BASE_HEIGHT
    };
    base + lines as f32 * LINE_HEIGHT
}

/// Horizontal pull-back of the stats group; long language names get none.
pub fn language_shift(lang_name: &str) -> f32 {
    if text_width(lang_name) > LONG_LANGUAGE_CHARS {
        0.0
    } else {
        LANGUAGE_SHIFT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Template,
    Archived,
}

impl Badge {
    pub fn for_repo(repo: &RepositorySummary) -> Option<Self> {
        if repo.is_template {
            Some(Badge::Template)
        } else if repo.is_archived {
            Some(Badge::Archived)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Badge::Template => "Template",
            Badge::Archived => "Archived",
        }
    }
}

pub fn render_repo_card(repo: &RepositorySummary, options: &StyleOptions) -> String {
    render_repo_card_with(repo, options, WrapOptions::default())
}

pub fn render_repo_card_with(
    repo: &RepositorySummary,
    options: &StyleOptions,
    wrap: WrapOptions,
) -> String {
    let header = if options.show_owner {
        repo.name_with_owner.as_str()
    } else {
        repo.name.as_str()
    };

    let (lang_name, lang_color) = match &repo.primary_language {
        Some(lang) => (lang.name.as_str(), lang.color.as_str()),
        None => (FALLBACK_LANGUAGE_NAME, FALLBACK_LANGUAGE_COLOR),
    };
    let shift = language_shift(lang_name);

    let description = repo
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(NO_DESCRIPTION);
    let lines = wrap_text_multiline(&parse_emojis(description), wrap);
    let height = card_height(lines.len());

    let colors = resolve_card_colors(options);
    tracing::debug!(
        repo = %repo.name_with_owner,
        lines = lines.len(),
        height,
        theme = %options.theme,
        "composing repo card"
    );

    let badge = Badge::for_repo(repo).map(|badge| badge_svg(badge.label(), &colors.text_color));
    let language = repo
        .primary_language
        .as_ref()
        .map(|_| language_svg(lang_name, lang_color));
    let stars = (repo.star_count > 0)
        .then(|| stat_fragment(icons::STAR, "stargazers", repo.star_count));
    let forks = (repo.fork_count > 0)
        .then(|| stat_fragment(icons::FORK, "forkcount", repo.fork_count));

    let stats_x = if language.is_some() {
        STATS_X_WITH_LANGUAGE - shift
    } else {
        STATS_X_WITHOUT_LANGUAGE
    };
    let stats = flex_layout(&[stars, forks], STATS_GAP, FlexDirection::Row).join("");

    let mut svg = String::new();
    let h = fmt_num(height);
    svg.push_str(&format!(
        "<svg version=\"1.1\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" fill=\"none\" xmlns=\"http://www.w3.org/2000/svg\">",
        w = fmt_num(CARD_WIDTH),
    ));
    svg.push_str(&style_block(&colors));
    if let Background::Gradient { angle, start, end } = &colors.background {
        let (angle, start, end) = (escape_xml(angle), escape_xml(start), escape_xml(end));
        svg.push_str(&format!(
            "<defs><linearGradient id=\"gradient\" gradientTransform=\"rotate({angle})\"><stop offset=\"0%\" stop-color=\"#{start}\" /><stop offset=\"100%\" stop-color=\"#{end}\" /></linearGradient></defs>"
        ));
    }
    svg.push_str(&format!(
        "<rect data-testid=\"card-bg\" x=\"0.5\" y=\"0.5\" width=\"{}\" height=\"99%\" rx=\"4.5\" fill=\"{}\" stroke=\"#E4E2E2\"/>",
        fmt_num(CARD_WIDTH - 1.0),
        colors.background.fill()
    ));
    svg.push_str(&icons::icon_svg(icons::REPO, 25.0, 25.0));
    svg.push_str(&format!(
        "<text x=\"50\" y=\"38\" class=\"header\">{}</text>",
        escape_xml(header)
    ));
    if let Some(badge) = badge {
        svg.push_str(&badge);
    }

    svg.push_str("<text class=\"description\" x=\"25\" y=\"50\">");
    for line in &lines {
        svg.push_str(&format!(
            "<tspan dy=\"1.2em\" x=\"25\">{}</tspan>",
            encode_html(line)
        ));
    }
    svg.push_str("</text>");

    svg.push_str(&format!("<g transform=\"translate(0, {})\">", fmt_num(height - 20.0)));
    if let Some(language) = language {
        svg.push_str(&language);
    }
    svg.push_str(&format!(
        "<g data-testid=\"star-fork-group\" transform=\"translate({}, 0)\">{stats}</g>",
        fmt_num(stats_x)
    ));
    svg.push_str("</g>");

    svg.push_str("</svg>");
    svg
}

fn style_block(colors: &ResolvedTheme) -> String {
    format!(
        "<style>\
.header {{ font: 600 18px 'Segoe UI', Ubuntu, Sans-Serif; fill: {title} }}\
.description {{ font: 400 13px 'Segoe UI', Ubuntu, Sans-Serif; fill: {text} }}\
.gray {{ font: 400 12px 'Segoe UI', Ubuntu, Sans-Serif; fill: {text} }}\
.icon {{ fill: {icon} }}\
.badge {{ font: 600 11px 'Segoe UI', Ubuntu, Sans-Serif; }}\
.badge rect {{ opacity: 0.2 }}\
</style>",
        title = colors.title_color,
        text = colors.text_color,
        icon = colors.icon_color,
    )
}

fn badge_svg(label: &str, text_color: &str) -> String {
    format!(
        "<g data-testid=\"badge\" class=\"badge\" transform=\"translate(320, 38)\">\
<rect stroke=\"{text_color}\" stroke-width=\"1\" width=\"70\" height=\"20\" x=\"-12\" y=\"-14\" ry=\"10\" rx=\"10\"></rect>\
<text x=\"23\" y=\"-5\" alignment-baseline=\"central\" dominant-baseline=\"central\" text-anchor=\"middle\" fill=\"{text_color}\">{label}</text>\
</g>"
    )
}

fn language_svg(name: &str, color: &str) -> String {
    format!(
        "<g data-testid=\"primary-lang\" transform=\"translate(30, 0)\">\
<circle data-testid=\"lang-color\" cx=\"0\" cy=\"-5\" r=\"6\" fill=\"{}\" />\
<text data-testid=\"lang-name\" class=\"gray\" x=\"15\">{}</text>\
</g>",
        escape_xml(color),
        escape_xml(name)
    )
}

fn stat_fragment(icon: &str, test_id: &str, count: u64) -> Fragment {
    Fragment::new(format!(
        "{}<text data-testid=\"{test_id}\" class=\"gray\" x=\"25\">{}</text>",
        icons::icon_svg(icon, 0.0, -12.0),
        k_formatter(count)
    ))
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

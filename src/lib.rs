#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod emoji;
pub mod error;
pub mod flex;
pub mod icons;
pub mod model;
pub mod render;
pub mod text;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, load_config};
pub use error::CardError;
pub use model::{Language, RepositorySummary, StyleOptions};
pub use render::{render_repo_card, render_repo_card_with};
pub use text::WrapOptions;
pub use theme::{Background, ResolvedTheme, Theme, resolve_card_colors};

/// Parses repository JSON and renders its card in one step.
pub fn render_from_json(repo_json: &str, options: &StyleOptions) -> Result<String, CardError> {
    let repo: RepositorySummary = serde_json::from_str(repo_json)?;
    Ok(render_repo_card(&repo, options))
}

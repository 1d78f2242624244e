use crate::config::{Config, load_config};
use crate::model::RepositorySummary;
use crate::render::{render_repo_card_with, write_output_svg};
use crate::theme::Theme;
use anyhow::Result;
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rcard", version, about = "Render a repository summary card as SVG")]
pub struct Args {
    /// Repository JSON file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output SVG file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (theme, colors, wrap settings)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Theme name
    #[arg(short = 't', long = "theme")]
    pub theme: Option<String>,

    /// Title color (hex without '#')
    #[arg(long = "title-color")]
    pub title_color: Option<String>,

    /// Icon color (hex without '#')
    #[arg(long = "icon-color")]
    pub icon_color: Option<String>,

    /// Text color (hex without '#')
    #[arg(long = "text-color")]
    pub text_color: Option<String>,

    /// Background color, or a gradient as 'angle,start,end'
    #[arg(long = "bg-color")]
    pub bg_color: Option<String>,

    /// Show 'owner/name' in the header
    #[arg(long = "show-owner")]
    pub show_owner: bool,

    /// List the built-in themes and exit
    #[arg(long = "list-themes")]
    pub list_themes: bool,
}

pub fn run() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.list_themes {
        for name in Theme::builtin_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = merge_args(load_config(args.config.as_deref())?, &args);
    config.style.validate()?;

    let input = read_input(args.input.as_deref())?;
    let repo: RepositorySummary = serde_json::from_str(&input)?;
    let svg = render_repo_card_with(&repo, &config.style, config.wrap);
    write_output_svg(&svg, args.output.as_deref())?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "repo_card_renderer=warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn merge_args(mut config: Config, args: &Args) -> Config {
    if let Some(theme) = &args.theme {
        config.style.theme = theme.clone();
    }
    if args.title_color.is_some() {
        config.style.title_color = args.title_color.clone();
    }
    if args.icon_color.is_some() {
        config.style.icon_color = args.icon_color.clone();
    }
    if args.text_color.is_some() {
        config.style.text_color = args.text_color.clone();
    }
    if args.bg_color.is_some() {
        config.style.bg_color = args.bg_color.clone();
    }
    if args.show_owner {
        config.style.show_owner = true;
    }
    config
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

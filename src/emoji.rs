use once_cell::sync::Lazy;
use regex::Regex;

static EMOJI_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r":[A-Za-z0-9_]+:").unwrap());

/// Looks up the glyph for a gemoji shortcode without the surrounding colons.
pub fn emoji_for(name: &str) -> Option<&'static str> {
    emojis::get_by_shortcode(name).map(|emoji| emoji.as_str())
}

/// Replaces every `:name:` token with its glyph. Unknown names are dropped.
pub fn parse_emojis(text: &str) -> String {
    EMOJI_TOKEN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let token = &caps[0];
            let name = &token[1..token.len() - 1];
            emoji_for(name).unwrap_or_default()
        })
        .into_owned()
}

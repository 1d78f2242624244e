use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("malformed gradient `{spec}`: expected `angle,start_hex,end_hex`")]
    MalformedGradient { spec: String },
    #[error("invalid {channel} `{value}`: expected a 3, 4, 6 or 8 digit hex color")]
    InvalidColor { channel: &'static str, value: String },
    #[error("failed to parse repository data: {0}")]
    Repository(#[from] serde_json::Error),
}

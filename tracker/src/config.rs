use std::env;

/// How published snapshots are rendered to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFormat {
    #[default]
    Html,
    Markdown,
    Json,
}

impl std::fmt::Display for ViewFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewFormat::Html => write!(f, "html"),
            ViewFormat::Markdown => write!(f, "markdown"),
            ViewFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ViewFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(ViewFormat::Html),
            "markdown" | "md" | "text" => Ok(ViewFormat::Markdown),
            "json" => Ok(ViewFormat::Json),
            _ => Err(format!("Unknown view format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// First identifier handed out by the id generator
    pub id_origin: u64,
    pub view_format: ViewFormat,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("TRACKER_ID_ORIGIN").ok().as_deref(),
            env::var("TRACKER_VIEW").ok().as_deref(),
        )
    }

    /// Build a config from raw variable values, falling back to defaults
    /// for anything missing or malformed
    fn from_vars(id_origin: Option<&str>, view: Option<&str>) -> Self {
        let id_origin = id_origin
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or_default();

        let view_format = match view.map(str::parse::<ViewFormat>) {
            Some(Ok(format)) => format,
            Some(Err(e)) => {
                tracing::warn!("{}, falling back to html", e);
                ViewFormat::Html
            }
            None => ViewFormat::Html,
        };

        Self {
            id_origin,
            view_format,
        }
    }
}

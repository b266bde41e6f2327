use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use xdg::BaseDirectories;

/// Location of the menu shipped with the demo page
pub const DEFAULT_SOURCE: &str = "./data/menu.json";

/// Element the widget binds to by default
pub const DEFAULT_CONTAINER_ID: &str = "content_container";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// URL or path of the menu JSON document
    pub source: String,
    pub container_id: String,
    pub request_timeout_secs: u64,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub price_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            source: DEFAULT_SOURCE.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            request_timeout_secs: 10,
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            price_fg: Color::Green,
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color given by name, `#rrggbb`/`#rgb`, or `r,g,b`
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    if s.contains(',') {
        let channels = s
            .split(',')
            .map(|part| part.trim().parse::<u8>().ok())
            .collect::<Option<Vec<u8>>>()?;
        return match channels.as_slice() {
            [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
            _ => None,
        };
    }

    let named = match s.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        "orange" => Color::Rgb(255, 165, 0),
        _ => return None,
    };
    Some(named)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => Some(Color::Rgb(
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        _ => None,
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Read the config file, falling back to defaults when it is missing or invalid
pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    match fs::read_to_string(&config_path) {
        Ok(content) => parse(&content),
        Err(_) => Config::default(),
    }
}

fn parse(content: &str) -> Config {
    toml::from_str(content).unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid config file: {}", e);
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named_and_case() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("Cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("ORANGE"), Some(Color::Rgb(255, 165, 0)));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#GGGGGG"), None);
        assert_eq!(parse_color("#12345"), None);
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 165, 0"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("1,2"), None);
    }

    #[test]
    fn test_parse_color_invalid_name() {
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.source, DEFAULT_SOURCE);
        assert_eq!(config.container_id, DEFAULT_CONTAINER_ID);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn test_config_partial_toml_keeps_defaults() {
        let config = parse(
            r##"
source = "https://example.com/menu.json"

[theme]
price_fg = "#00FFFF"
"##,
        );
        assert_eq!(config.source, "https://example.com/menu.json");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.theme.price_fg, Color::Rgb(0, 255, 255));
        assert_eq!(config.theme.selection_fg, Color::Rgb(255, 165, 0));
    }

    #[test]
    fn test_config_invalid_toml_falls_back() {
        let config = parse("source = [");
        assert_eq!(config.source, DEFAULT_SOURCE);
    }

    #[test]
    fn test_config_invalid_color_falls_back() {
        let config = parse("[theme]\nselection_fg = \"nope\"\n");
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let config = parse("request_timeout_secs = 0");
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }
}

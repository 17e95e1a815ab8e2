use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(ColorChoice::Auto),
            "always" | "on" | "true" => Some(ColorChoice::Always),
            "never" | "off" | "false" => Some(ColorChoice::Never),
            _ => None,
        }
    }

    pub fn enabled(&self, is_tty: bool) -> bool {
        match self {
            ColorChoice::Auto => is_tty,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

fn default_prompt() -> String {
    "Tra từ gì? (vd: Flex, Trap...)".to_string()
}

fn default_show_tags() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub color: ColorChoice,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_show_tags")]
    pub show_tags: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::default(),
            prompt: default_prompt(),
            show_tags: default_show_tags(),
        }
    }
}

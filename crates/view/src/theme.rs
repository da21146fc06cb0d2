//! Theme capability. Renderers take a `&dyn ThemeProvider` and never decide
//! colours for the page chrome themselves.

/// Named style classes for the page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeClasses {
    pub bg: &'static str,
    pub card_bg: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub hover: &'static str,
    pub accent: &'static str,
}

pub trait ThemeProvider: Send + Sync {
    /// Value carried in the `theme` query parameter.
    fn name(&self) -> &'static str;
    fn classes(&self) -> ThemeClasses;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

const LIGHT: ThemeClasses = ThemeClasses {
    bg: "bg-gray-50",
    card_bg: "bg-white",
    text: "text-gray-900",
    text_secondary: "text-gray-600",
    border: "border-gray-200",
    hover: "hover:bg-gray-50",
    accent: "bg-gradient-to-r from-blue-600 to-purple-600",
};

const DARK: ThemeClasses = ThemeClasses {
    bg: "bg-gray-900",
    card_bg: "bg-gray-800",
    text: "text-white",
    text_secondary: "text-gray-400",
    border: "border-gray-700",
    hover: "hover:bg-gray-700",
    accent: "bg-gradient-to-r from-blue-500 to-purple-500",
};

impl ThemeProvider for ThemeMode {
    fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    fn classes(&self) -> ThemeClasses {
        match self {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }
}

//! # Appearance preferences
//!
//! Each user has one [`ThemePreferences`] record made of three independent
//! choices from fixed sets. The record is created with defaults the first
//! time it is read and only ever changes through a [`ThemePatch`], so a
//! settings screen that edits one field cannot clobber the other two.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Pink,
    Teal,
    Yellow,
    Indigo,
    Cyan,
    Slate,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 11] = [
        ColorTheme::Blue,
        ColorTheme::Green,
        ColorTheme::Purple,
        ColorTheme::Orange,
        ColorTheme::Red,
        ColorTheme::Pink,
        ColorTheme::Teal,
        ColorTheme::Yellow,
        ColorTheme::Indigo,
        ColorTheme::Cyan,
        ColorTheme::Slate,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ColorTheme::Blue => "blue",
            ColorTheme::Green => "green",
            ColorTheme::Purple => "purple",
            ColorTheme::Orange => "orange",
            ColorTheme::Red => "red",
            ColorTheme::Pink => "pink",
            ColorTheme::Teal => "teal",
            ColorTheme::Yellow => "yellow",
            ColorTheme::Indigo => "indigo",
            ColorTheme::Cyan => "cyan",
            ColorTheme::Slate => "slate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorTheme::Blue => "Ocean Blue",
            ColorTheme::Green => "Emerald",
            ColorTheme::Purple => "Royal Purple",
            ColorTheme::Orange => "Sunset",
            ColorTheme::Red => "Crimson",
            ColorTheme::Pink => "Blossom",
            ColorTheme::Teal => "Aqua",
            ColorTheme::Yellow => "Golden",
            ColorTheme::Indigo => "Deep Space",
            ColorTheme::Cyan => "Ice",
            ColorTheme::Slate => "Graphite",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontTheme {
    #[default]
    Inter,
    Roboto,
    Poppins,
    Geist,
    Catamaran,
    Mono,
}

impl FontTheme {
    pub const ALL: [FontTheme; 6] = [
        FontTheme::Inter,
        FontTheme::Roboto,
        FontTheme::Poppins,
        FontTheme::Geist,
        FontTheme::Catamaran,
        FontTheme::Mono,
    ];

    pub fn value(self) -> &'static str {
        match self {
            FontTheme::Inter => "inter",
            FontTheme::Roboto => "roboto",
            FontTheme::Poppins => "poppins",
            FontTheme::Geist => "geist",
            FontTheme::Catamaran => "catamaran",
            FontTheme::Mono => "mono",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontTheme::Inter => "Inter",
            FontTheme::Roboto => "Roboto",
            FontTheme::Poppins => "Poppins",
            FontTheme::Geist => "Geist",
            FontTheme::Catamaran => "Catamaran",
            FontTheme::Mono => "Monospace",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FontTheme::Inter => "Modern and clean",
            FontTheme::Roboto => "Google's classic",
            FontTheme::Poppins => "Geometric and elegant",
            FontTheme::Geist => "Vercel's modern font",
            FontTheme::Catamaran => "Warm and friendly",
            FontTheme::Mono => "Developer friendly",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    #[default]
    Light,
    Dark,
    Auto,
}

impl AppearanceMode {
    pub const ALL: [AppearanceMode; 3] = [AppearanceMode::Light, AppearanceMode::Dark, AppearanceMode::Auto];

    pub fn value(self) -> &'static str {
        match self {
            AppearanceMode::Light => "light",
            AppearanceMode::Dark => "dark",
            AppearanceMode::Auto => "auto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppearanceMode::Light => "Light",
            AppearanceMode::Dark => "Dark",
            AppearanceMode::Auto => "Auto",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AppearanceMode::Light => "Bright and clean",
            AppearanceMode::Dark => "Easy on the eyes",
            AppearanceMode::Auto => "System preference",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreferences {
    pub color_theme: ColorTheme,
    pub font_theme: FontTheme,
    pub appearance_mode: AppearanceMode,
}

impl ThemePreferences {
    pub fn apply(self, patch: ThemePatch) -> Self {
        Self {
            color_theme: patch.color_theme.unwrap_or(self.color_theme),
            font_theme: patch.font_theme.unwrap_or(self.font_theme),
            appearance_mode: patch.appearance_mode.unwrap_or(self.appearance_mode),
        }
    }

    /// Resolve the appearance mode against the platform's dark-mode preference.
    pub fn is_dark(&self, prefers_dark: bool) -> bool {
        match self.appearance_mode {
            AppearanceMode::Light => false,
            AppearanceMode::Dark => true,
            AppearanceMode::Auto => prefers_dark,
        }
    }
}

/// Partial update; `None` fields keep their current value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePatch {
    pub color_theme: Option<ColorTheme>,
    pub font_theme: Option<FontTheme>,
    pub appearance_mode: Option<AppearanceMode>,
}

impl ThemePatch {
    pub fn color(theme: ColorTheme) -> Self {
        Self {
            color_theme: Some(theme),
            ..Self::default()
        }
    }

    pub fn font(theme: FontTheme) -> Self {
        Self {
            font_theme: Some(theme),
            ..Self::default()
        }
    }

    pub fn appearance(mode: AppearanceMode) -> Self {
        Self {
            appearance_mode: Some(mode),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let prefs = ThemePreferences::default();
        assert_eq!(prefs.color_theme, ColorTheme::Blue);
        assert_eq!(prefs.font_theme, FontTheme::Inter);
        assert_eq!(prefs.appearance_mode, AppearanceMode::Light);
    }

    #[test]
    fn patch_touches_only_named_fields() {
        let prefs = ThemePreferences::default()
            .apply(ThemePatch::font(FontTheme::Mono))
            .apply(ThemePatch::appearance(AppearanceMode::Auto));
        assert_eq!(prefs.color_theme, ColorTheme::Blue);
        assert_eq!(prefs.font_theme, FontTheme::Mono);
        assert_eq!(prefs.appearance_mode, AppearanceMode::Auto);
    }

    #[test]
    fn auto_follows_platform() {
        let prefs = ThemePreferences::default().apply(ThemePatch::appearance(AppearanceMode::Auto));
        assert!(prefs.is_dark(true));
        assert!(!prefs.is_dark(false));
        let dark = prefs.apply(ThemePatch::appearance(AppearanceMode::Dark));
        assert!(dark.is_dark(false));
    }

    #[test]
    fn values_match_serde_names() {
        #[derive(Serialize)]
        struct Doc {
            color: ColorTheme,
            font: FontTheme,
            mode: AppearanceMode,
        }
        for color in ColorTheme::ALL {
            let doc = toml::to_string(&Doc {
                color,
                font: FontTheme::Geist,
                mode: AppearanceMode::Dark,
            })
            .unwrap();
            assert!(doc.contains(&format!("color = \"{}\"", color.value())));
            assert!(doc.contains("font = \"geist\""));
            assert!(doc.contains("mode = \"dark\""));
        }
    }
}

//! themes and the random theme generator
pub mod export;
pub mod generator;
pub mod naming;
pub mod palette;
pub mod store;
pub mod tokens;

use {
    crate::theme::{
        naming::NameStrategy,
        palette::Palette,
        tokens::{MiscTokens, RadiusTokens},
    },
    rand::{Rng, RngExt},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::fmt,
    tracing::warn,
};

/// a theme variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// light variant
    Light,
    /// dark variant
    Dark,
}

impl ThemeVariant {
    /// whether this is the dark variant
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// the css `color-scheme` value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// which variant a generated theme should be
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema, SmartDefault,
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    /// always light
    Light,

    /// always dark
    Dark,

    /// flip a coin on every generation
    #[default]
    #[serde(alias = "either")]
    #[cfg_attr(feature = "cli", value(alias = "either"))]
    Random,
}

impl ThemeType {
    /// parse a theme type, falling back to the default for anything unrecognized
    pub fn from_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            "random" | "either" | "any" => Self::Random,
            other => {
                if !other.is_empty() {
                    warn!(value = other, "unknown theme type, using the default");
                }
                Self::default()
            }
        }
    }

    /// settle on a concrete variant, drawing from `rng` for [`ThemeType::Random`]
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> ThemeVariant {
        match self {
            Self::Light => ThemeVariant::Light,
            Self::Dark => ThemeVariant::Dark,
            Self::Random if rng.random_bool(0.5) => ThemeVariant::Dark,
            Self::Random => ThemeVariant::Light,
        }
    }
}

/// options for a single generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// the variant to produce
    pub theme_type: ThemeType,
    /// how to name the theme
    pub name_strategy: NameStrategy,
}

impl GenerateOptions {
    /// make new options
    pub fn new(theme_type: ThemeType, name_strategy: NameStrategy) -> Self {
        Self {
            theme_type,
            name_strategy,
        }
    }

    /// build options from loosely typed strings, defaulting whatever is missing or unknown
    pub fn from_raw(theme_type: Option<&str>, name_strategy: Option<&str>) -> Self {
        Self {
            theme_type: theme_type.map(ThemeType::from_lenient).unwrap_or_default(),
            name_strategy: name_strategy
                .map(NameStrategy::from_lenient)
                .unwrap_or_default(),
        }
    }
}

/// a complete theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// the theme name
    pub name: String,
    /// a short id for ui keys
    pub id: String,
    /// the theme variant (dark/light)
    pub variant: ThemeVariant,
    /// the colors of the theme
    pub colors: Palette,
    /// corner radii
    pub radius: RadiusTokens,
    /// sizes, border and effects
    pub misc: MiscTokens,
}

impl Theme {
    /// overwrite everything generated with the contents of `next`, keeping `self` in place
    pub fn replace_with(&mut self, next: Theme) -> &mut Self {
        let Theme {
            name,
            id,
            variant,
            colors,
            radius,
            misc,
        } = next;

        self.colors = colors;
        self.radius = radius;
        self.misc = misc;
        self.name = name;
        self.id = id;
        self.variant = variant;
        self
    }

    /// convert the theme to CSS custom properties
    pub fn to_css_vars(&self) -> String {
        let mut vars = self.colors.to_css_vars();
        vars.push_str(&self.radius.to_css_vars());
        vars.push_str(&self.misc.to_css_vars());
        vars
    }

    /// convert the theme to a daisyUI `@plugin "daisyui/theme"` block
    pub fn to_daisyui_css(&self) -> String {
        let mut css = String::from("@plugin \"daisyui/theme\" {\n");

        css.push_str(&format!("  name: \"{}\";\n", self.name.replace('"', "'")));
        css.push_str("  default: false;\n");
        css.push_str(&format!("  prefersdark: {};\n", self.variant.is_dark()));
        css.push_str(&format!("  color-scheme: {};\n", self.variant));

        for line in self.to_css_vars().lines() {
            css.push_str("  ");
            css.push_str(line);
            css.push('\n');
        }

        css.push_str("}\n");
        css
    }
}

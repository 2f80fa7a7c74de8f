//! turning themes into something another program can read
use {
    crate::{error::Result, theme::Theme},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
};

/// an output format for generated themes
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema, SmartDefault,
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// one JSON object per theme, an array for several
    #[default]
    Json,

    /// a `[[themes]]` array of tables
    Toml,

    /// plain css custom properties scoped to `[data-theme]`
    Css,

    /// daisyUI `@plugin "daisyui/theme"` blocks
    Daisyui,
}

/// what gets serialized for TOML output
#[derive(Serialize)]
struct TomlDoc<'a> {
    /// every theme
    themes: &'a [Theme],
}

impl OutputFormat {
    /// render `themes` in this format
    ///
    /// # Errors
    ///
    /// returns an error if serializing to JSON or TOML fails
    pub fn render(self, themes: &[Theme]) -> Result<String> {
        Ok(match self {
            Self::Json => match themes {
                [theme] => serde_json::to_string_pretty(theme)?,
                _ => serde_json::to_string_pretty(themes)?,
            },
            Self::Toml => toml::to_string_pretty(&TomlDoc { themes })?,
            Self::Css => themes
                .iter()
                .map(scoped_css)
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Daisyui => themes
                .iter()
                .map(Theme::to_daisyui_css)
                .collect::<Vec<_>>()
                .join("\n"),
        })
    }
}

/// the theme's variables inside a `[data-theme="<name>"]` rule
fn scoped_css(theme: &Theme) -> String {
    let mut css = format!("[data-theme=\"{}\"] {{\n", theme.name.replace('"', "'"));
    css.push_str(&format!("  color-scheme: {};\n", theme.variant));

    for line in theme.to_css_vars().lines() {
        css.push_str("  ");
        css.push_str(line);
        css.push('\n');
    }

    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::theme::{GenerateOptions, generator::ThemeGenerator},
        rand::{SeedableRng, rngs::StdRng},
    };

    fn themes(n: usize) -> Vec<Theme> {
        let generator = ThemeGenerator::default();
        let mut rng = StdRng::seed_from_u64(99);
        (0..n)
            .map(|_| generator.generate(&GenerateOptions::default(), &mut rng))
            .collect()
    }

    #[test]
    fn test_json_single_and_many() {
        let one = OutputFormat::Json.render(&themes(1)).unwrap();
        assert!(serde_json::from_str::<Theme>(&one).is_ok());

        let many = OutputFormat::Json.render(&themes(3)).unwrap();
        let back: Vec<Theme> = serde_json::from_str(&many).unwrap();
        assert_eq!(back.len(), 3);
    }

    #[test]
    fn test_toml_output_parses_back() {
        let out = OutputFormat::Toml.render(&themes(2)).unwrap();
        let doc: toml::Table = toml::from_str(&out).unwrap();
        let list = doc["themes"].as_array().unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["colors"].as_table().unwrap().len(), 20);
        assert!(list[0]["misc"]["depth"].as_integer().is_some());
    }

    #[test]
    fn test_css_blocks() {
        let themes = themes(2);
        let css = OutputFormat::Css.render(&themes).unwrap();

        for theme in &themes {
            assert!(css.contains(&format!("[data-theme=\"{}\"] {{", theme.name)));
        }
        assert_eq!(css.matches("--color-primary:").count(), 2);
    }

    #[test]
    fn test_daisyui_blocks() {
        let css = OutputFormat::Daisyui.render(&themes(2)).unwrap();
        assert_eq!(css.matches("@plugin \"daisyui/theme\"").count(), 2);
    }
}

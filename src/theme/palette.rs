//! palette storage and the color roles every theme carries
use {
    crate::{color::Oklch, error::ThemeError},
    serde::{Deserialize, Serialize, Serializer, ser::SerializeMap},
    std::{
        collections::BTreeMap,
        fmt,
        ops::{Index, IndexMut},
        str::FromStr,
    },
};

/// declares [`ColorRole`] along with its string tokens
macro_rules! color_roles {
    ($($variant:ident => $token:literal, $doc:literal;)*) => {
        /// a named slot in a theme's palette
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ColorRole {
            $(
                #[doc = $doc]
                $variant,
            )*
        }

        impl ColorRole {
            /// every role, in palette order
            pub const ALL: [ColorRole; ROLE_COUNT] = [$(ColorRole::$variant),*];

            /// the token used for this role (`base-100`, `primary-content`, ...)
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $token,)*
                }
            }
        }
    };
}

/// how many color roles a palette has
pub const ROLE_COUNT: usize = 20;

color_roles! {
    Base100 => "base-100", "main surface";
    Base200 => "base-200", "slightly elevated surface";
    Base300 => "base-300", "most elevated surface";
    BaseContent => "base-content", "text on the base surfaces";
    Primary => "primary", "main brand color";
    PrimaryContent => "primary-content", "text on primary";
    Secondary => "secondary", "secondary brand color";
    SecondaryContent => "secondary-content", "text on secondary";
    Accent => "accent", "the loud color";
    AccentContent => "accent-content", "text on accent";
    Neutral => "neutral", "muted, low chroma color";
    NeutralContent => "neutral-content", "text on neutral";
    Error => "error", "errors, red-ish";
    ErrorContent => "error-content", "text on error";
    Warning => "warning", "warnings, amber";
    WarningContent => "warning-content", "text on warning";
    Success => "success", "success, green";
    SuccessContent => "success-content", "text on success";
    Info => "info", "information, blue";
    InfoContent => "info-content", "text on info";
}

impl ColorRole {
    /// every background role paired with its content role
    pub const CONTENT_PAIRS: [(ColorRole, ColorRole); 9] = [
        (ColorRole::Base200, ColorRole::BaseContent),
        (ColorRole::Primary, ColorRole::PrimaryContent),
        (ColorRole::Secondary, ColorRole::SecondaryContent),
        (ColorRole::Accent, ColorRole::AccentContent),
        (ColorRole::Neutral, ColorRole::NeutralContent),
        (ColorRole::Error, ColorRole::ErrorContent),
        (ColorRole::Warning, ColorRole::WarningContent),
        (ColorRole::Success, ColorRole::SuccessContent),
        (ColorRole::Info, ColorRole::InfoContent),
    ];

    /// the semantic roles, each tied to a fixed hue band
    pub const SEMANTIC: [ColorRole; 4] = [
        ColorRole::Error,
        ColorRole::Warning,
        ColorRole::Success,
        ColorRole::Info,
    ];

    /// the content role drawn on top of this one, if any
    pub fn content(self) -> Option<ColorRole> {
        Self::CONTENT_PAIRS
            .iter()
            .find(|(bg, _)| *bg == self)
            .map(|(_, fg)| *fg)
    }

    /// whether this role is a foreground
    pub fn is_content(self) -> bool {
        self.as_str().ends_with("-content")
    }

    /// the css custom property for this role
    pub fn css_var(self) -> String {
        format!("--color-{}", self.as_str())
    }

    /// position of the role in [`ColorRole::ALL`]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorRole {
    type Err = ThemeError;

    /// accepts both `primary` and the css form `--color-primary`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.strip_prefix("--color-").unwrap_or(s);

        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == token)
            .ok_or_else(|| ThemeError::UnknownRole(s.to_string()))
    }
}

/// a complete theme palette, one color per [`ColorRole`]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Oklch>")]
pub struct Palette {
    /// colors indexed by role
    colors: [Oklch; ROLE_COUNT],
}

impl Palette {
    /// a palette with every role set to `fill`
    pub fn filled(fill: Oklch) -> Self {
        Self {
            colors: [fill; ROLE_COUNT],
        }
    }

    /// get the color of a role
    pub fn get(&self, role: ColorRole) -> Oklch {
        self.colors[role.index()]
    }

    /// set the color of a role
    pub fn set(&mut self, role: ColorRole, color: Oklch) {
        self.colors[role.index()] = color;
    }

    /// iterate over every role and its color
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Oklch)> + '_ {
        ColorRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// convert the palette to CSS
    pub fn to_css_vars(&self) -> String {
        let mut vars = String::new();

        for (role, color) in self.iter() {
            vars.push_str(&format!("{}: {};\n", role.css_var(), color));
        }

        vars
    }
}

impl Index<ColorRole> for Palette {
    type Output = Oklch;

    fn index(&self, role: ColorRole) -> &Self::Output {
        &self.colors[role.index()]
    }
}

impl IndexMut<ColorRole> for Palette {
    fn index_mut(&mut self, role: ColorRole) -> &mut Self::Output {
        &mut self.colors[role.index()]
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ROLE_COUNT))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.as_str(), &color)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, Oklch>> for Palette {
    type Error = ThemeError;

    fn try_from(raw: BTreeMap<String, Oklch>) -> Result<Self, Self::Error> {
        let mut seen = [None; ROLE_COUNT];

        for (key, color) in raw {
            let role: ColorRole = key.parse()?;
            seen[role.index()] = Some(color);
        }

        let mut colors = [Oklch::BLACK; ROLE_COUNT];
        for role in ColorRole::ALL {
            colors[role.index()] = seen[role.index()].ok_or(ThemeError::MissingRole(role.as_str()))?;
        }

        Ok(Self { colors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_are_in_declaration_order() {
        for (i, role) in ColorRole::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
        assert_eq!(ColorRole::ALL.len(), 20);
    }

    #[test]
    fn test_every_content_role_is_paired() {
        let paired: Vec<ColorRole> = ColorRole::CONTENT_PAIRS.iter().map(|(_, fg)| *fg).collect();
        for role in ColorRole::ALL.into_iter().filter(|r| r.is_content()) {
            assert!(paired.contains(&role), "{role} has no background");
        }

        assert_eq!(ColorRole::Primary.content(), Some(ColorRole::PrimaryContent));
        assert_eq!(ColorRole::Base100.content(), None);
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("base-200".parse::<ColorRole>().unwrap(), ColorRole::Base200);
        assert_eq!(
            "--color-info-content".parse::<ColorRole>().unwrap(),
            ColorRole::InfoContent
        );
        assert!("tertiary".parse::<ColorRole>().is_err());
    }

    #[test]
    fn test_serialized_keys_follow_role_order() {
        let mut palette = Palette::filled(Oklch::gray(0.5));
        palette[ColorRole::Accent] = Oklch::new(0.7, 0.2, 300.0);

        let json = serde_json::to_value(palette).unwrap();
        let map = json.as_object().unwrap();

        assert_eq!(map.len(), ROLE_COUNT);
        assert_eq!(map["accent"], "oklch(0.7 0.2 300)");
        assert_eq!(map["base-100"], "oklch(0.5 0 0)");

        let back: Palette = serde_json::from_value(json).unwrap();
        assert_eq!(back.get(ColorRole::Accent), Oklch::new(0.7, 0.2, 300.0));
    }

    #[test]
    fn test_missing_role_is_rejected() {
        let mut raw: serde_json::Map<String, serde_json::Value> = ColorRole::ALL
            .iter()
            .map(|r| (r.as_str().to_string(), "oklch(0.5 0 0)".into()))
            .collect();
        raw.remove("warning");

        let err = serde_json::from_value::<Palette>(raw.into()).unwrap_err();
        assert!(err.to_string().contains("warning"), "{err}");
    }

    #[test]
    fn test_css_vars() {
        let css = Palette::filled(Oklch::WHITE).to_css_vars();
        assert!(css.starts_with("--color-base-100: oklch(1 0 0);\n"));
        assert_eq!(css.lines().count(), ROLE_COUNT);
    }
}

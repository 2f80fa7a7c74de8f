//! radius and sizing tokens
use {
    crate::{
        color::{rand_between, rand_int},
        error::ThemeError,
    },
    rand::Rng,
    serde::{Deserialize, Deserializer, Serialize, Serializer},
    std::{fmt, str::FromStr},
};

/// largest radius a box can get, in rem
pub const MAX_BOX_RADIUS: f64 = 3.0;

/// a css length
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// root em units, kept to two decimals
    Rem(f64),
    /// whole pixels
    Px(u32),
}

impl Length {
    /// a rem length rounded to two decimals
    pub fn rem(value: f64) -> Self {
        Self::Rem((value * 100.0).round() / 100.0)
    }

    /// the numeric part of the length
    pub fn value(&self) -> f64 {
        match self {
            Self::Rem(v) => *v,
            Self::Px(v) => f64::from(*v),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rem(v) => write!(f, "{v:.2}rem"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

impl FromStr for Length {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ThemeError::ParseLength(s.to_string());

        if let Some(rem) = s.strip_suffix("rem") {
            let v: f64 = rem.parse().map_err(|_| err())?;
            if !v.is_finite() || v < 0.0 {
                return Err(err());
            }
            Ok(Self::rem(v))
        } else if let Some(px) = s.strip_suffix("px") {
            px.parse().map(Self::Px).map_err(|_| err())
        } else {
            Err(err())
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// (de)serialize a bool as the integers `0`/`1`
mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    /// write the flag as an integer
    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    /// read the flag from an integer
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(serde::de::Error::custom(format!(
                "expected 0 or 1, got {other}"
            ))),
        }
    }
}

/// corner radius tokens
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    /// radius of small selectors (checkboxes, toggles, badges)
    pub selector: Length,
    /// radius of fields (buttons, inputs, tabs)
    pub field: Length,
    /// radius of boxes (cards, modals, alerts)
    #[serde(rename = "box")]
    pub box_: Length,
}

impl RadiusTokens {
    /// draw a set of radii around one shared base
    ///
    /// fields tend to be tighter and boxes rounder than selectors, but that's a tendency only
    /// since all three are rounded independently.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let base = rand_between(rng, 0.0, 2.5);
        let field = (base - rand_between(rng, 0.0, 0.6)).max(0.0);
        let box_ = (base + rand_between(rng, 0.0, 0.8)).min(MAX_BOX_RADIUS);

        Self {
            selector: Length::rem(base),
            field: Length::rem(field),
            box_: Length::rem(box_),
        }
    }

    /// convert the radii to CSS
    pub fn to_css_vars(&self) -> String {
        format!(
            "--radius-selector: {};\n--radius-field: {};\n--radius-box: {};\n",
            self.selector, self.field, self.box_
        )
    }
}

/// sizing, border and effect tokens
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiscTokens {
    /// base size of selectors
    #[serde(rename = "size-selector")]
    pub size_selector: Length,
    /// base size of fields
    #[serde(rename = "size-field")]
    pub size_field: Length,
    /// border width
    pub border: Length,
    /// 3d depth effect on/off
    #[serde(with = "flag")]
    pub depth: bool,
    /// noise texture on/off
    #[serde(with = "flag")]
    pub noise: bool,
}

impl MiscTokens {
    /// draw every token independently
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_selector: Length::rem(rand_between(rng, 0.25, 0.35)),
            size_field: Length::rem(rand_between(rng, 0.3, 0.38)),
            border: Length::Px(rand_int(rng, 1, 4)),
            depth: rand_int(rng, 0, 1) == 1,
            noise: rand_int(rng, 0, 1) == 1,
        }
    }

    /// convert the tokens to CSS
    pub fn to_css_vars(&self) -> String {
        format!(
            "--size-selector: {};\n--size-field: {};\n--border: {};\n--depth: {};\n--noise: {};\n",
            self.size_selector,
            self.size_field,
            self.border,
            u8::from(self.depth),
            u8::from(self.noise)
        )
    }
}

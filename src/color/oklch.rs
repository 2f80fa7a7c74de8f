//! oklch colors and conversion to srgb
use {
    crate::error::ThemeError,
    palette::{Clamp, convert::IntoColorUnclamped, LinSrgb, OklabHue, Srgb},
    serde::{Deserialize, Deserializer, Serialize, Serializer},
    std::{fmt, str::FromStr},
};

/// slack allowed on each linear srgb channel before a color counts as out of gamut
const GAMUT_EPSILON: f64 = 1e-6;

/// bisection steps used by [`Oklch::to_gamut`]
const GAMUT_STEPS: usize = 24;

/// decimals kept for lightness and chroma when printed
const LC_PLACES: i32 = 4;

/// decimals kept for hue when printed
const HUE_PLACES: i32 = 2;

/// a color in the oklch space
///
/// `l` is perceptual lightness in `[0, 1]`, `c` is chroma (0 is gray, ~0.4 is as loud as
/// displays get) and `h` is the hue angle in degrees, kept in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// lightness
    pub l: f64,
    /// chroma
    pub c: f64,
    /// hue in degrees
    pub h: f64,
}

impl Oklch {
    /// pure white
    pub const WHITE: Self = Self::gray(1.0);

    /// pure black
    pub const BLACK: Self = Self::gray(0.0);

    /// make a new color, clamping lightness and chroma and wrapping the hue
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            c: c.max(0.0),
            h: normalize_hue(h),
        }
    }

    /// an achromatic color with the given lightness
    pub const fn gray(l: f64) -> Self {
        Self { l, c: 0.0, h: 0.0 }
    }

    /// the same color as a [`palette::Oklch`]
    pub fn to_palette(&self) -> palette::Oklch<f64> {
        palette::Oklch::new(self.l, self.c, OklabHue::from_degrees(self.h))
    }

    /// convert to linear srgb, channels unclamped
    pub fn to_linear_rgb(&self) -> LinSrgb<f64> {
        self.to_palette().into_color_unclamped()
    }

    /// convert to srgb, clipping out of gamut channels
    ///
    /// this is what a display ends up showing, so contrast is measured on it.
    pub fn to_srgb(&self) -> Srgb<f64> {
        Srgb::from_linear(self.to_linear_rgb().clamp())
    }

    /// convert to 8-bit srgb, clipping out of gamut channels
    pub fn to_srgb8(&self) -> [u8; 3] {
        let rgb: Srgb<u8> = self.to_srgb().into_format();
        [rgb.red, rgb.green, rgb.blue]
    }

    /// the `#rrggbb` form of this color
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_srgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// whether this color fits in srgb without clipping
    pub fn in_gamut(&self) -> bool {
        let rgb = self.to_linear_rgb();
        [rgb.red, rgb.green, rgb.blue]
            .iter()
            .all(|v| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(v))
    }

    /// pull chroma down until the color fits in srgb
    ///
    /// lightness and hue are left alone, so hue bands and lightness ranges survive mapping.
    pub fn to_gamut(self) -> Self {
        if self.in_gamut() {
            return self;
        }

        let (mut lo, mut hi) = (0.0, self.c);
        for _ in 0..GAMUT_STEPS {
            let mid = (lo + hi) / 2.0;
            let candidate = Self { c: mid, ..self };
            if candidate.in_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..self }
    }

    /// the color exactly as [`Display`](fmt::Display) writes it
    ///
    /// parsing the printed form gives back this value bit for bit, so anything measured on
    /// a rounded color still holds after serializing.
    pub fn rounded(self) -> Self {
        let h = round_to(self.h, HUE_PLACES);

        Self {
            l: round_to(self.l, LC_PLACES),
            c: round_to(self.c, LC_PLACES),
            h: if h >= 360.0 { 0.0 } else { h },
        }
    }
}

/// round `v` to `places` decimals
fn round_to(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round() / scale
}

/// wrap a hue angle into `[0, 360)`
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// format a channel value with at most `places` decimals and no trailing zeros
fn fmt_channel(v: f64, places: usize) -> String {
    let s = format!("{v:.places$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };

    if s == "-0" { "0".to_string() } else { s.to_string() }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { l, c, h } = self.rounded();

        write!(
            f,
            "oklch({} {} {})",
            fmt_channel(l, LC_PLACES as usize),
            fmt_channel(c, LC_PLACES as usize),
            fmt_channel(h, HUE_PLACES as usize)
        )
    }
}

impl FromStr for Oklch {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ThemeError::ParseColor {
            input: s.to_string(),
            reason,
        };

        let inner = s
            .trim()
            .strip_prefix("oklch(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| err("expected oklch(<l> <c> <h>)"))?;

        let parts: Vec<&str> = inner.split_whitespace().collect();
        let [l, c, h] = parts.as_slice() else {
            return Err(err("expected exactly three channels"));
        };

        let l = match l.strip_suffix('%') {
            Some(pct) => pct.parse::<f64>().map(|v| v / 100.0),
            None => l.parse::<f64>(),
        }
        .map_err(|_| err("lightness is not a number"))?;

        let c = if *c == "none" {
            0.0
        } else {
            c.parse::<f64>().map_err(|_| err("chroma is not a number"))?
        };

        let h = if *h == "none" {
            0.0
        } else {
            h.trim_end_matches("deg")
                .parse::<f64>()
                .map_err(|_| err("hue is not a number"))?
        };

        if !(l.is_finite() && c.is_finite() && h.is_finite()) {
            return Err(err("channels must be finite"));
        }

        Ok(Self::new(l, c, h))
    }
}

impl Serialize for Oklch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Oklch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

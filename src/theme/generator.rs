//! the random theme generator
//!
//! every theme is built in one pass: resolve light/dark, lay down three related base
//! surfaces, derive primary/secondary/accent from one another, draw a neutral and four
//! semantic colors from fixed hue bands, then give every background a content color that
//! clears its contrast target. radius, sizing, name and id come last.
use {
    crate::{
        color::{
            AAA_NORMAL, ChannelRanges, Oklch, content_color_for, fit_background, rand_between,
            random::Span, random_color,
        },
        theme::{
            GenerateOptions, Theme, ThemeVariant,
            naming::{WordLists, generate_name, simple_id},
            palette::{ColorRole, Palette},
            tokens::{MiscTokens, RadiusTokens},
        },
    },
    rand::{Rng, RngExt},
    smart_default::SmartDefault,
    tracing::{debug, trace, warn},
};

/// contrast base-content needs against base-200 on dark themes
pub const BASE_CONTENT_TARGET_DARK: f64 = 8.0;

/// contrast base-content needs against base-200 on light themes
pub const BASE_CONTENT_TARGET_LIGHT: f64 = 10.0;

/// width of the lightness window brand colors are drawn from
const L_WINDOW: f64 = 0.08;

/// largest chroma shared by the base surfaces
const BASE_CHROMA_MAX: f64 = 0.08;

/// base surfaces with the share of the base chroma each one gets
const BASE_TIERS: [(ColorRole, f64); 3] = [
    (ColorRole::Base100, 0.3),
    (ColorRole::Base200, 0.6),
    (ColorRole::Base300, 1.0),
];

/// base surface lightness on dark themes, darkest first
const DARK_BASE_L: [Span; 3] = [(0.08, 0.14), (0.15, 0.21), (0.22, 0.30)];

/// base surface lightness on light themes, lightest first
const LIGHT_BASE_L: [Span; 3] = [(0.94, 0.98), (0.87, 0.93), (0.80, 0.86)];

/// how far secondary's hue sits from primary's, always positive
const SECONDARY_HUE_OFFSET: Span = (90.0, 150.0);

/// how far accent's hue may drift from primary's, either direction
const ACCENT_HUE_DRIFT: f64 = 90.0;

/// a hue range in degrees, wrapping through 0 when `low > high`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueBand {
    /// first angle of the band
    pub low: f64,
    /// last angle of the band
    pub high: f64,
    /// for wrapping bands, the share of draws landing in `[low, 360)`; uniform when unset
    pub wrap_share: Option<f64>,
}

impl HueBand {
    /// make a new band, sampled uniformly
    pub const fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            wrap_share: None,
        }
    }

    /// make a wrapping band that puts `share` of its draws before 360
    pub const fn wrapping(low: f64, high: f64, share: f64) -> Self {
        Self {
            low,
            high,
            wrap_share: Some(share),
        }
    }

    /// the band's width in degrees
    pub fn width(&self) -> f64 {
        (self.high - self.low).rem_euclid(360.0)
    }

    /// whether `hue` falls in the band
    pub fn contains(&self, hue: f64) -> bool {
        if self.low <= self.high {
            (self.low..=self.high).contains(&hue)
        } else {
            hue >= self.low || hue <= self.high
        }
    }

    /// a hue from the band
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self.wrap_share {
            Some(share) if self.low > self.high => {
                if rng.random_bool(share.clamp(0.0, 1.0)) {
                    rand_between(rng, self.low, 360.0)
                } else {
                    rand_between(rng, 0.0, self.high)
                }
            }
            _ => (self.low + rand_between(rng, 0.0, self.width())).rem_euclid(360.0),
        }
    }
}

/// a semantic role's hue band and channel ranges
#[derive(Debug, Clone, Copy)]
struct SemanticSpec {
    /// the background role
    role: ColorRole,
    /// allowed hues
    hues: HueBand,
    /// chroma range
    chroma: Span,
    /// lightness on dark themes
    dark_l: Span,
    /// lightness on light themes
    light_l: Span,
}

/// semantic lightness shared by error, success and info on dark themes
const SEMANTIC_DARK_L: Span = (0.55, 0.72);

/// semantic lightness shared by error, success and info on light themes
const SEMANTIC_LIGHT_L: Span = (0.50, 0.68);

/// the four semantic colors
const SEMANTIC_SPECS: [SemanticSpec; 4] = [
    SemanticSpec {
        role: ColorRole::Error,
        hues: HueBand::wrapping(350.0, 25.0, 0.3),
        chroma: (0.18, 0.40),
        dark_l: SEMANTIC_DARK_L,
        light_l: SEMANTIC_LIGHT_L,
    },
    SemanticSpec {
        role: ColorRole::Warning,
        hues: HueBand::new(35.0, 75.0),
        chroma: (0.18, 0.40),
        dark_l: (0.68, 0.82),
        light_l: (0.58, 0.78),
    },
    SemanticSpec {
        role: ColorRole::Success,
        hues: HueBand::new(120.0, 155.0),
        chroma: (0.15, 0.32),
        dark_l: SEMANTIC_DARK_L,
        light_l: SEMANTIC_LIGHT_L,
    },
    SemanticSpec {
        role: ColorRole::Info,
        hues: HueBand::new(195.0, 235.0),
        chroma: (0.15, 0.35),
        dark_l: SEMANTIC_DARK_L,
        light_l: SEMANTIC_LIGHT_L,
    },
];

/// the hue band a semantic role is confined to
pub fn hue_band(role: ColorRole) -> Option<HueBand> {
    SEMANTIC_SPECS
        .iter()
        .find(|spec| spec.role == role)
        .map(|spec| spec.hues)
}

/// the contrast a background role's content color must reach
pub fn contrast_target(role: ColorRole, variant: ThemeVariant) -> f64 {
    match (role, variant) {
        (ColorRole::Base200, ThemeVariant::Dark) => BASE_CONTENT_TARGET_DARK,
        (ColorRole::Base200, ThemeVariant::Light) => BASE_CONTENT_TARGET_LIGHT,
        _ => AAA_NORMAL,
    }
}

/// a lightness window of width [`L_WINDOW`] starting somewhere in `start`
fn lightness_window<R: Rng + ?Sized>(rng: &mut R, start: Span) -> Span {
    let from = rand_between(rng, start.0, start.1);
    (from, from + L_WINDOW)
}

/// pick the dark or light variant of a range
fn by_variant(dark: bool, dark_span: Span, light_span: Span) -> Span {
    if dark { dark_span } else { light_span }
}

/// generates random themes
#[derive(Debug, Clone, SmartDefault)]
pub struct ThemeGenerator {
    /// words for adjective-noun names
    words: WordLists,

    /// nudge backgrounds until their content color reaches the target, instead of settling
    /// for the best available content color
    #[default(true)]
    enforce_contrast: bool,
}

impl ThemeGenerator {
    /// make a new generator
    pub fn new(words: WordLists, enforce_contrast: bool) -> Self {
        Self {
            words,
            enforce_contrast,
        }
    }

    /// the word lists used for names
    pub fn words(&self) -> &WordLists {
        &self.words
    }

    /// whether contrast targets are enforced
    pub fn enforces_contrast(&self) -> bool {
        self.enforce_contrast
    }

    /// generate a theme, drawing every random value from `rng`
    pub fn generate<R: Rng + ?Sized>(&self, options: &GenerateOptions, rng: &mut R) -> Theme {
        let variant = options.theme_type.resolve(rng);
        let colors = self.generate_colors(variant, rng);
        let radius = RadiusTokens::random(rng);
        let misc = MiscTokens::random(rng);
        let name = generate_name(options.name_strategy, &self.words, rng);
        let id = simple_id(rng);

        debug!(%name, %id, %variant, "generated theme");

        Theme {
            name,
            id,
            variant,
            colors,
            radius,
            misc,
        }
    }

    /// generate a theme from the thread-local random source
    pub fn generate_random(&self, options: &GenerateOptions) -> Theme {
        self.generate(options, &mut rand::rng())
    }

    /// regenerate `theme` with default options, keeping the value in place
    pub fn randomize_in_place<'a, R: Rng + ?Sized>(
        &self,
        theme: &'a mut Theme,
        rng: &mut R,
    ) -> &'a mut Theme {
        let next = self.generate(&GenerateOptions::default(), rng);
        theme.replace_with(next)
    }

    /// generate a full palette for `variant`
    pub fn generate_colors<R: Rng + ?Sized>(&self, variant: ThemeVariant, rng: &mut R) -> Palette {
        let dark = variant.is_dark();
        let mut palette = Palette::filled(Oklch::BLACK);

        let base_hue = rand_between(rng, 0.0, 360.0);
        let base_chroma = rand_between(rng, 0.0, BASE_CHROMA_MAX);
        let base_l = if dark { DARK_BASE_L } else { LIGHT_BASE_L };

        for ((role, share), (lo, hi)) in BASE_TIERS.into_iter().zip(base_l) {
            let l = rand_between(rng, lo, hi);
            palette[role] = Oklch::new(l, base_chroma * share, base_hue)
                .to_gamut()
                .rounded();
        }

        let base_200 = palette[ColorRole::Base200];
        self.place(&mut palette, variant, ColorRole::Base200, base_200);

        let primary_l = lightness_window(rng, by_variant(dark, (0.58, 0.72), (0.45, 0.65)));
        let primary = random_color(
            rng,
            ChannelRanges::default()
                .lightness(primary_l.0, primary_l.1)
                .chroma(0.15, 0.40),
        );
        self.place(&mut palette, variant, ColorRole::Primary, primary);

        let secondary_hue =
            primary.h + rand_between(rng, SECONDARY_HUE_OFFSET.0, SECONDARY_HUE_OFFSET.1);
        let secondary_l = lightness_window(rng, by_variant(dark, (0.52, 0.68), (0.40, 0.60)));
        let secondary = random_color(
            rng,
            ChannelRanges::default()
                .lightness(secondary_l.0, secondary_l.1)
                .chroma(0.12, 0.35)
                .hue(secondary_hue),
        );
        self.place(&mut palette, variant, ColorRole::Secondary, secondary);

        let accent_hue = primary.h + rand_between(rng, -ACCENT_HUE_DRIFT, ACCENT_HUE_DRIFT);
        let accent_l = lightness_window(rng, by_variant(dark, (0.62, 0.78), (0.50, 0.70)));
        let accent = random_color(
            rng,
            ChannelRanges::default()
                .lightness(accent_l.0, accent_l.1)
                .chroma(0.20, 0.45)
                .hue(accent_hue),
        );
        self.place(&mut palette, variant, ColorRole::Accent, accent);

        let neutral_l = lightness_window(rng, by_variant(dark, (0.38, 0.52), (0.35, 0.50)));
        let neutral = random_color(
            rng,
            ChannelRanges::default()
                .lightness(neutral_l.0, neutral_l.1)
                .chroma(0.03, 0.12),
        );
        self.place(&mut palette, variant, ColorRole::Neutral, neutral);

        for spec in SEMANTIC_SPECS {
            let l = by_variant(dark, spec.dark_l, spec.light_l);
            let hue = spec.hues.sample(rng);
            let color = random_color(
                rng,
                ChannelRanges::default()
                    .lightness(l.0, l.1)
                    .chroma(spec.chroma.0, spec.chroma.1)
                    .hue(hue),
            );
            self.place(&mut palette, variant, spec.role, color);
        }

        palette
    }

    /// store a background and its content color
    ///
    /// colors are stored [rounded](Oklch::rounded), so contrast is measured on what gets printed
    fn place(&self, palette: &mut Palette, variant: ThemeVariant, role: ColorRole, color: Oklch) {
        let background = color.to_gamut().rounded();
        let Some(content_role) = role.content() else {
            palette[role] = background;
            return;
        };

        let target = contrast_target(role, variant);

        let (background, pick) = if self.enforce_contrast {
            fit_background(background, target)
        } else {
            let pick = content_color_for(background, target);
            if !pick.meets(target) {
                warn!(
                    %role,
                    %background,
                    ratio = pick.ratio,
                    wanted = target,
                    "no content color reaches the contrast target, using the best one"
                );
            }
            (background, pick)
        };

        trace!(%role, %background, content = %pick.color, ratio = pick.ratio, "placed color");

        palette[role] = background;
        palette[content_role] = pick.color;
    }
}

/// generate a theme with the default generator and the thread-local random source
pub fn generate_random_theme(options: &GenerateOptions) -> Theme {
    ThemeGenerator::default().generate_random(options)
}

/// regenerate `theme` in place with the default generator and options
pub fn randomize_in_place(theme: &mut Theme) -> &mut Theme {
    ThemeGenerator::default().randomize_in_place(theme, &mut rand::rng())
}

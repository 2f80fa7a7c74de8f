//! color science: oklch colors, wcag contrast, constrained sampling
pub mod contrast;
pub mod oklch;
pub mod random;

pub use {
    contrast::{
        AAA_NORMAL, ContentPick, content_color_for, contrast_ratio, fit_background,
        relative_luminance,
    },
    oklch::{Oklch, normalize_hue},
    random::{ChannelRanges, rand_between, rand_int, random_color},
};

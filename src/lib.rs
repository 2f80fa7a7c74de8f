//! themegen generates random daisyUI themes
//!
//! every theme gets three related base surfaces, a primary/secondary/accent triad, a neutral,
//! four semantic colors that stay recognizable (red-ish errors, amber warnings, green success,
//! blue info) and a content color for every background that reaches WCAG AAA contrast.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use themegen::{GenerateOptions, ThemeGenerator, ThemeType, color::contrast_ratio};
//! use themegen::theme::{naming::NameStrategy, palette::ColorRole};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let options = GenerateOptions::new(ThemeType::Dark, NameStrategy::AdjectiveNoun);
//! let theme = ThemeGenerator::default().generate(&options, &mut rng);
//!
//! let ratio = contrast_ratio(theme.colors[ColorRole::Primary], theme.colors[ColorRole::PrimaryContent]);
//! assert!(ratio >= 7.0);
//! ```
#![forbid(
    clippy::missing_docs_in_private_items,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]

#[cfg(feature = "cli")]
pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod macros;
pub mod theme;
pub mod utils;

pub use {
    error::{Result, ThemeError},
    theme::{
        GenerateOptions, Theme, ThemeType, ThemeVariant,
        generator::{ThemeGenerator, generate_random_theme, randomize_in_place},
        store::{ActiveTheme, ThemeStore},
    },
};

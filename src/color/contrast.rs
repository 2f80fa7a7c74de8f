//! wcag contrast and content color selection
use {
    crate::color::Oklch,
    palette::color_difference::Wcag21RelativeContrast,
    tracing::trace,
};

/// WCAG AAA contrast for normal text, used for brand and semantic roles
pub const AAA_NORMAL: f64 = 7.0;

/// achromatic lightness values tried when neither white nor black reaches the target
pub const CONTENT_LADDER: [f64; 6] = [0.08, 0.18, 0.28, 0.72, 0.85, 0.95];

/// lightness step used when nudging a background towards readability
const FIT_STEP: f64 = 0.01;

/// chroma kept per fitting step
const FIT_CHROMA_DECAY: f64 = 0.97;

/// give up nudging after this many steps and jump to an extreme
const FIT_MAX_STEPS: usize = 100;

/// the relative luminance of a color as defined by WCAG 2.x
///
/// out of gamut channels are clipped first, which is what a display ends up showing.
pub fn relative_luminance(color: Oklch) -> f64 {
    color.to_srgb().relative_luminance().luma
}

/// the WCAG contrast ratio between two colors, in `[1, 21]`
pub fn contrast_ratio(a: Oklch, b: Oklch) -> f64 {
    a.to_srgb().relative_contrast(b.to_srgb())
}

/// a content color picked for some background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentPick {
    /// the foreground color
    pub color: Oklch,
    /// its contrast against the background
    pub ratio: f64,
}

impl ContentPick {
    /// whether the pick reaches `target`
    pub fn meets(&self, target: f64) -> bool {
        self.ratio >= target
    }
}

/// find a foreground color with at least `target` contrast against `background`
///
/// white and black are tried first, then a ladder of grays. when nothing reaches the target
/// the best candidate seen is returned, so this never fails; check [`ContentPick::meets`] to
/// find out whether the target was actually reached.
pub fn content_color_for(background: Oklch, target: f64) -> ContentPick {
    let white = ContentPick {
        color: Oklch::WHITE,
        ratio: contrast_ratio(Oklch::WHITE, background),
    };
    if white.meets(target) {
        return white;
    }

    let black = ContentPick {
        color: Oklch::BLACK,
        ratio: contrast_ratio(Oklch::BLACK, background),
    };
    if black.meets(target) {
        return black;
    }

    let mut best = if white.ratio > black.ratio { white } else { black };

    for l in CONTENT_LADDER {
        let gray = Oklch::gray(l);
        let candidate = ContentPick {
            color: gray,
            ratio: contrast_ratio(gray, background),
        };

        if candidate.meets(target) {
            return candidate;
        }

        if candidate.ratio > best.ratio {
            best = candidate;
        }
    }

    best
}

/// nudge `background` until some content color reaches `target` against it
///
/// lightness moves away from the best content candidate (lighter under dark text, darker
/// under light text) while chroma slowly drains, re-mapping into gamut at every step. hue is
/// never touched. every candidate is [rounded](Oklch::rounded) before it is measured, so the
/// returned pair still reaches `target` once printed. returns the fitted background together
/// with its content pick.
pub fn fit_background(background: Oklch, target: f64) -> (Oklch, ContentPick) {
    let background = background.rounded();
    let pick = content_color_for(background, target);
    if pick.meets(target) {
        return (background, pick);
    }

    let direction = if relative_luminance(pick.color) < relative_luminance(background) {
        1.0
    } else {
        -1.0
    };

    let mut l = background.l;
    let mut c = background.c;

    for step in 1..=FIT_MAX_STEPS {
        l = (l + direction * FIT_STEP).clamp(0.0, 1.0);
        c *= FIT_CHROMA_DECAY;

        let candidate = Oklch::new(l, c, background.h).to_gamut().rounded();
        let pick = content_color_for(candidate, target);
        if pick.meets(target) {
            trace!(
                from = %background,
                to = %candidate,
                steps = step,
                ratio = pick.ratio,
                "fitted background for contrast"
            );
            return (candidate, pick);
        }
    }

    let extreme = Oklch {
        l: if direction > 0.0 { 1.0 } else { 0.0 },
        c: 0.0,
        h: background.h,
    };

    (extreme, content_color_for(extreme, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        let ratio = contrast_ratio(Oklch::WHITE, Oklch::BLACK);
        assert!((ratio - 21.0).abs() < 1e-3, "ratio = {ratio}");
        assert!((contrast_ratio(Oklch::WHITE, Oklch::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        let a = Oklch::new(0.4, 0.1, 30.0);
        let b = Oklch::new(0.9, 0.02, 200.0);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn test_gray_luminance_is_cubed_lightness() {
        let y = relative_luminance(Oklch::gray(0.6));
        assert!((y - 0.216).abs() < 1e-4, "y = {y}");
    }

    #[test]
    fn test_dark_background_gets_white() {
        let pick = content_color_for(Oklch::new(0.15, 0.02, 250.0), 8.0);
        assert_eq!(pick.color, Oklch::WHITE);
        assert!(pick.meets(8.0));
    }

    #[test]
    fn test_light_background_gets_black() {
        let pick = content_color_for(Oklch::new(0.95, 0.01, 80.0), 10.0);
        assert_eq!(pick.color, Oklch::BLACK);
        assert!(pick.meets(10.0));
    }

    #[test]
    fn test_unreachable_target_returns_best_effort() {
        // a mid gray can't reach 7:1 with anything
        let bg = Oklch::gray(0.6);
        let pick = content_color_for(bg, AAA_NORMAL);

        assert!(!pick.meets(AAA_NORMAL));
        assert_eq!(pick.color, Oklch::BLACK);
        assert!((pick.ratio - contrast_ratio(Oklch::BLACK, bg)).abs() < 1e-12);
    }

    #[test]
    fn test_low_targets_stop_at_white() {
        let pick = content_color_for(Oklch::gray(0.5), 1.0);
        assert_eq!(pick.color, Oklch::WHITE);
    }

    #[test]
    fn test_fit_background_reaches_target() {
        for h in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0] {
            for l in [0.5, 0.55, 0.6, 0.65] {
                let bg = Oklch::new(l, 0.2, h).to_gamut();
                let (fitted, pick) = fit_background(bg, AAA_NORMAL);

                assert!(pick.meets(AAA_NORMAL), "{bg} -> {fitted}: {}", pick.ratio);
                assert_eq!(fitted.h, bg.h);
                assert!((contrast_ratio(fitted, pick.color) - pick.ratio).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_fit_background_gives_up_at_an_extreme() {
        // nothing reaches 22:1, so every step fails
        let bg = Oklch::new(0.6, 0.1, 200.0);
        let (fitted, pick) = fit_background(bg, 22.0);

        assert_eq!(fitted, Oklch { l: 1.0, c: 0.0, h: 200.0 });
        assert_eq!(pick.color, Oklch::BLACK);
        assert!(!pick.meets(22.0));
        assert!(pick.ratio > 20.0);
    }

    #[test]
    fn test_fit_background_measures_the_printed_color() {
        for h in (0..360).step_by(7) {
            let bg = Oklch::new(0.653_249, 0.25, f64::from(h)).to_gamut();
            let (fitted, pick) = fit_background(bg, AAA_NORMAL);
            let printed: Oklch = fitted.to_string().parse().unwrap();

            assert_eq!(printed, fitted);
            assert!(contrast_ratio(printed, pick.color) >= AAA_NORMAL, "{printed}");
        }
    }

    #[test]
    fn test_fit_background_keeps_passing_colors() {
        let bg = Oklch::new(0.2, 0.05, 10.0);
        let (fitted, pick) = fit_background(bg, AAA_NORMAL);
        assert_eq!(fitted, bg);
        assert_eq!(pick.color, Oklch::WHITE);
    }
}

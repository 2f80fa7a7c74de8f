//! constrained random colors
use {
    crate::color::Oklch,
    rand::{Rng, RngExt},
};

/// a closed-open range `[min, max)` for one channel
pub type Span = (f64, f64);

/// per-channel constraints for [`random_color`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRanges {
    /// lightness range
    pub l: Span,
    /// chroma range
    pub c: Span,
    /// hue range in degrees
    pub h: Span,
}

impl Default for ChannelRanges {
    fn default() -> Self {
        Self {
            l: (0.3, 0.85),
            c: (0.05, 0.37),
            h: (0.0, 360.0),
        }
    }
}

impl ChannelRanges {
    /// constrain lightness
    pub fn lightness(mut self, min: f64, max: f64) -> Self {
        self.l = (min, max);
        self
    }

    /// constrain chroma
    pub fn chroma(mut self, min: f64, max: f64) -> Self {
        self.c = (min, max);
        self
    }

    /// pin the hue to a single angle
    pub fn hue(mut self, h: f64) -> Self {
        self.h = (h, h);
        self
    }
}

/// a uniform draw from `[min, max)`, or `min` when the range is empty
pub fn rand_between<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

/// an inclusive integer draw from `[min, max]`
pub fn rand_int<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    if max > min {
        rng.random_range(min..=max)
    } else {
        min
    }
}

/// a random color with every channel drawn uniformly from its range
pub fn random_color<R: Rng + ?Sized>(rng: &mut R, ranges: ChannelRanges) -> Oklch {
    let l = rand_between(rng, ranges.l.0, ranges.l.1);
    let c = rand_between(rng, ranges.c.0, ranges.c.1);
    let h = rand_between(rng, ranges.h.0, ranges.h.1);

    Oklch::new(l, c, h)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        rand::{SeedableRng, rngs::StdRng},
    };

    #[test]
    fn test_channels_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let ranges = ChannelRanges::default().lightness(0.2, 0.4).chroma(0.1, 0.2);

        for _ in 0..500 {
            let c = random_color(&mut rng, ranges);
            assert!((0.2..0.4).contains(&c.l));
            assert!((0.1..0.2).contains(&c.c));
            assert!((0.0..360.0).contains(&c.h));
        }
    }

    #[test]
    fn test_pinned_hue() {
        let mut rng = StdRng::seed_from_u64(1);
        let c = random_color(&mut rng, ChannelRanges::default().hue(42.0));
        assert_eq!(c.h, 42.0);
    }

    #[test]
    fn test_empty_ranges_collapse() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(rand_between(&mut rng, 0.5, 0.5), 0.5);
        assert_eq!(rand_int(&mut rng, 4, 4), 4);

        for _ in 0..100 {
            assert!((1..=4).contains(&rand_int(&mut rng, 1, 4)));
        }
    }
}

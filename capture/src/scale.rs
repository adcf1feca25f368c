//! Bounded-dimension scale planning.
//!
//! A scale plan is the pure half of the downscaler: given source dimensions
//! and a bound, it fixes the uniform factor and the rounded output size.
//! Rendering the plan onto a surface happens in [`crate::raster`].

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

/// Pixel dimensions of an image surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The larger of the two sides.
    #[must_use]
    pub fn max_side(&self) -> u32 {
        self.width.max(self.height)
    }
}

/// How a source surface maps onto its bounded-dimension output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePlan {
    /// Uniform scale factor, `min(1, bound / max(W, H))`.
    pub factor: f64,
    /// Output size after applying `factor`, rounded per side.
    pub target: Dimensions,
}

impl ScalePlan {
    /// True when the source exceeds the bound and must be redrawn smaller.
    #[must_use]
    pub fn needs_resize(&self) -> bool {
        self.factor < 1.0
    }
}

/// Plan the downscale of `source` so its larger side fits within `max_side`.
///
/// Sources already within the bound yield an identity plan: factor 1 and a
/// target equal to the source, so no resize-induced re-render happens. A
/// degenerate zero-sized source is treated the same way.
#[must_use]
pub fn fit_within(source: Dimensions, max_side: u32) -> ScalePlan {
    let longest = source.max_side();
    if longest == 0 || longest <= max_side {
        return ScalePlan { factor: 1.0, target: source };
    }
    let factor = f64::from(max_side) / f64::from(longest);
    let target = Dimensions {
        width: scaled_side(source.width, factor),
        height: scaled_side(source.height, factor),
    };
    ScalePlan { factor, target }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_side(side: u32, factor: f64) -> u32 {
    (f64::from(side) * factor).round() as u32
}

// Maps [from_lo, from_hi] onto [to_lo, to_hi], extrapolating outside the source range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTransform {
    scale: f32,
    offset: f32,
}

impl LinearTransform {
    pub fn new(from_lo: f32, from_hi: f32, to_lo: f32, to_hi: f32) -> Self {
        let span = from_hi - from_lo;
        // A single-point source range has no slope; pin everything to `to_lo`.
        if span == 0.0 {
            return Self {
                scale: 0.0,
                offset: to_lo,
            };
        }
        let scale = (to_hi - to_lo) / span;
        Self {
            scale,
            offset: to_lo - from_lo * scale,
        }
    }

    #[inline]
    pub fn evaluate(&self, x: f32) -> f32 {
        x * self.scale + self.offset
    }
}

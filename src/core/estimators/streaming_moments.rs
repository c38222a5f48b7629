use serde::{Deserialize, Serialize};

/// Rounding error allowed per accumulated sample when deciding that the `x`
/// values carry no variance.
const X_VARIANCE_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Online simple-linear-regression accumulator.
///
/// Keeps the six sufficient statistics (`n`, Σx, Σy, Σx², Σxy, Σy²) of a
/// stream of `(x, y)` pairs and derives the ordinary-least-squares slope,
/// intercept, R² and standard errors from them. No samples are retained, so
/// memory is constant and each [`add`](Self::add) is O(1).
///
/// Degenerate inputs never panic: too few samples yield 0. When the `x`
/// values carry no variance (always the case for a single sample) the slope
/// falls back to the line through the origin, `Σy / Σx`, with intercept 0.
/// That fallback is left unguarded, so an `x` of 0 produces an infinite or
/// NaN slope. Variance within summation rounding error of zero counts as none.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreamingMoments {
    n: f64,
    sx: f64,
    sy: f64,
    sxx: f64,
    sxy: f64,
    syy: f64,
}

impl StreamingMoments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Incorporates one sample. Non-finite values propagate into every statistic.
    #[inline]
    pub fn add(&mut self, x: f64, y: f64) {
        self.n += 1.0;
        self.sx += x;
        self.sy += y;
        self.sxx += x * x;
        self.sxy += x * y;
        self.syy += y * y;
    }

    /// Folds another accumulator into this one, as if its samples had been added here.
    pub fn merge(&mut self, other: &Self) {
        self.n += other.n;
        self.sx += other.sx;
        self.sy += other.sy;
        self.sxx += other.sxx;
        self.sxy += other.sxy;
        self.syy += other.syy;
    }

    #[inline]
    pub fn count(&self) -> f64 {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0.0
    }

    pub fn slope(&self) -> f64 {
        if self.n == 0.0 {
            return 0.0;
        }
        if self.n == 1.0 || self.x_is_constant() {
            return self.sy / self.sx;
        }
        self.ss_xy() / self.ss_xx()
    }

    pub fn intercept(&self) -> f64 {
        if self.n < 2.0 || self.x_is_constant() {
            return 0.0;
        }
        (self.sy - self.slope() * self.sx) / self.n
    }

    /// Squared Pearson correlation of the accumulated pairs.
    pub fn rsq(&self) -> f64 {
        if self.n < 2.0 {
            return 0.0;
        }
        let ss_xy = self.ss_xy();
        ss_xy * ss_xy / self.ss_xx() / self.ss_yy()
    }

    pub fn slope_stderr(&self) -> f64 {
        if self.n <= 2.0 {
            return 0.0;
        }
        self.residual_stddev() / self.ss_xx().sqrt()
    }

    pub fn intercept_stderr(&self) -> f64 {
        if self.n <= 2.0 {
            return 0.0;
        }
        let mean_x = self.sx / self.n;
        self.residual_stddev() * (1.0 / self.n + mean_x * mean_x / self.ss_xx()).sqrt()
    }

    /// `slope / slope_stderr`; infinite or NaN while the standard error is 0.
    pub fn slope_t_stat(&self) -> f64 {
        self.slope() / self.slope_stderr()
    }

    /// `|intercept / intercept_stderr|`; infinite or NaN while the standard error is 0.
    pub fn intercept_t_stat(&self) -> f64 {
        (self.intercept() / self.intercept_stderr()).abs()
    }

    // n-scaled sums of squares. The residual variance is built from these
    // directly, so `intercept_stderr` carries the extra factor of n.
    #[inline]
    fn ss_xy(&self) -> f64 {
        self.n * self.sxy - self.sx * self.sy
    }

    #[inline]
    fn ss_xx(&self) -> f64 {
        self.n * self.sxx - self.sx * self.sx
    }

    #[inline]
    fn ss_yy(&self) -> f64 {
        self.n * self.syy - self.sy * self.sy
    }

    /// `n·Σx² − (Σx)²` cancels to rounding residue, possibly negative, when
    /// every `x` is the same. The residue grows with `n` and with `Σx²`.
    #[inline]
    fn x_is_constant(&self) -> bool {
        self.ss_xx() <= self.n * self.n * self.sxx * X_VARIANCE_TOLERANCE
    }

    #[inline]
    fn residual_stddev(&self) -> f64 {
        let ss_xy = self.ss_xy();
        ((self.ss_yy() - ss_xy * ss_xy / self.ss_xx()) / (self.n - 2.0)).sqrt()
    }
}

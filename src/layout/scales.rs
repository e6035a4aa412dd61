//! Linear and point scales mapping data values to pixels.

/// Continuous linear map from a time domain onto a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to pixels
    ///
    /// A zero-width domain maps everything to the middle of the range
    /// instead of dividing by zero.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Map a pixel position back to the domain
    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (pixel - r0) / span };
        d0 + t * (d1 - d0)
    }

    /// Same domain, output range transformed by `k * px + x`
    pub fn with_affine_range(&self, k: f64, x: f64) -> Self {
        Self {
            domain: self.domain,
            range: (k * self.range.0 + x, k * self.range.1 + x),
        }
    }

    /// Roughly `count` evenly spaced round values inside the domain
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let step = tick_step(lo, hi, count);
        if step <= 0.0 || !step.is_finite() {
            return vec![lo];
        }

        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Pick a 1/2/5 x 10^n step giving about `count` ticks over `[lo, hi]`
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let span = hi - lo;
    if span <= 0.0 || count == 0 {
        return 0.0;
    }
    let raw = span / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual >= 7.07 {
        10.0
    } else if residual >= 3.16 {
        5.0
    } else if residual >= 1.41 {
        2.0
    } else {
        1.0
    };
    nice * magnitude
}

/// Discrete scale spreading ordered keys evenly over a pixel range
///
/// Key `i` of `n` sits at `start + extent * (i + 0.5) / n`, so adjacent
/// keys are one step apart and half a step of padding surrounds them.
#[derive(Debug, Clone, PartialEq)]
pub struct PointScale<K> {
    keys: Vec<K>,
    range: (f64, f64),
}

impl<K: PartialEq> PointScale<K> {
    pub fn new(keys: Vec<K>, range: (f64, f64)) -> Self {
        Self { keys, range }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Distance between adjacent keys
    pub fn step(&self) -> f64 {
        if self.keys.is_empty() {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.keys.len() as f64
    }

    /// Position of the key at `index`
    pub fn position_at(&self, index: usize) -> f64 {
        self.range.0 + self.step() * (index as f64 + 0.5)
    }

    /// Position of `key`, `None` if it is not in the domain
    pub fn position(&self, key: &K) -> Option<f64> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|index| self.position_at(index))
    }

    /// Keys with their positions, in domain order
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.keys
            .iter()
            .enumerate()
            .map(move |(index, key)| (key, self.position_at(index)))
    }
}

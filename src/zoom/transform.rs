//! Anchor-preserving zoom and pan over a horizontal scale.
//!
//! The transform knows nothing about traces. It maps base pixel
//! positions `px` to `scale_factor * px + translate_x`.

use crate::layout::LinearScale;
use crate::utils::config::{DEFAULT_PLOT_WIDTH, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, WHEEL_SENSITIVITY};
use log::debug;

/// Zoom limits and the viewport the transform applies to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,

    /// Viewport width in pixels; also the width of the unzoomed data
    pub width: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_ZOOM_SCALE,
            max_scale: MAX_ZOOM_SCALE,
            width: DEFAULT_PLOT_WIDTH,
        }
    }
}

impl ZoomConfig {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn with_scale_bounds(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }
}

/// A recognized interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Wheel movement in pixels at a pointer position; negative zooms in
    Wheel { delta_y: f64, anchor_x: f64 },

    /// Multiply the zoom level by `factor` around a pointer position
    Scale { factor: f64, anchor_x: f64 },

    /// Drag by a horizontal pixel delta
    Drag { dx: f64 },

    /// Back to the identity transform
    Reset,
}

/// Current view transform of one open timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    scale_factor: f64,
    translate_x: f64,
    config: ZoomConfig,
}

impl ZoomTransform {
    /// Identity transform
    pub fn new(config: ZoomConfig) -> Self {
        let (min_scale, max_scale) = if config.min_scale <= config.max_scale {
            (config.min_scale, config.max_scale)
        } else {
            (config.max_scale, config.min_scale)
        };
        let config = ZoomConfig {
            min_scale: min_scale.max(f64::MIN_POSITIVE),
            max_scale: max_scale.max(f64::MIN_POSITIVE),
            ..config
        };

        let mut transform = Self {
            scale_factor: 1.0,
            translate_x: 0.0,
            config,
        };
        transform.reset();
        transform
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn translate_x(&self) -> f64 {
        self.translate_x
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn is_identity(&self) -> bool {
        self.scale_factor == 1.0 && self.translate_x == 0.0
    }

    /// Reset to the identity, or the closest allowed zoom level
    pub fn reset(&mut self) {
        self.scale_factor = self.clamp_scale(1.0);
        self.translate_x = 0.0;
        self.translate_x = self.clamp_translate(0.0);
    }

    /// Map a base pixel position to its transformed position
    pub fn apply_x(&self, x: f64) -> f64 {
        self.scale_factor * x + self.translate_x
    }

    /// Map a transformed pixel position back to the base position
    pub fn invert_x(&self, x: f64) -> f64 {
        (x - self.translate_x) / self.scale_factor
    }

    /// Compose the transform with a base scale
    ///
    /// The result satisfies `rescaled.apply(t) == k * base.apply(t) + x`.
    pub fn rescale(&self, base: &LinearScale) -> LinearScale {
        base.with_affine_range(self.scale_factor, self.translate_x)
    }

    /// Domain interval currently visible in the viewport
    pub fn visible_domain(&self, base: &LinearScale) -> (f64, f64) {
        let rescaled = self.rescale(base);
        (rescaled.invert(0.0), rescaled.invert(self.config.width))
    }

    /// Apply one interaction; returns whether the transform changed
    pub fn update(&mut self, gesture: Gesture) -> bool {
        let before = (self.scale_factor, self.translate_x);

        match gesture {
            Gesture::Wheel { delta_y, anchor_x } => {
                let factor = (-delta_y * WHEEL_SENSITIVITY).exp2();
                self.zoom_around(factor, anchor_x);
            }
            Gesture::Scale { factor, anchor_x } => self.zoom_around(factor, anchor_x),
            Gesture::Drag { dx } => self.pan_by(dx),
            Gesture::Reset => self.reset(),
        }

        let changed = before != (self.scale_factor, self.translate_x);
        if changed {
            debug!(
                "Zoom transform: k={:.4} x={:.2} after {:?}",
                self.scale_factor, self.translate_x, gesture
            );
        }
        changed
    }

    /// Zoom by `factor` keeping the point under `anchor_x` fixed
    pub fn zoom_around(&mut self, factor: f64, anchor_x: f64) {
        if !factor.is_finite() || factor <= 0.0 || !anchor_x.is_finite() {
            return;
        }

        let new_scale = self.clamp_scale(self.scale_factor * factor);
        let anchor_base = self.invert_x(anchor_x);
        let new_translate = anchor_x - anchor_base * new_scale;

        self.scale_factor = new_scale;
        self.translate_x = self.clamp_translate(new_translate);
    }

    /// Pan by a horizontal pixel delta
    pub fn pan_by(&mut self, dx: f64) {
        if !dx.is_finite() {
            return;
        }
        self.translate_x = self.clamp_translate(self.translate_x + dx);
    }

    fn clamp_scale(&self, k: f64) -> f64 {
        k.clamp(self.config.min_scale, self.config.max_scale)
    }

    /// Keep the zoomed data `[0, width]` covering the viewport
    ///
    /// When zoomed out below 1 the data is narrower than the viewport
    /// and is kept inside it instead.
    fn clamp_translate(&self, x: f64) -> f64 {
        let overflow = self.config.width * (1.0 - self.scale_factor);
        let (lo, hi) = if overflow <= 0.0 {
            (overflow, 0.0)
        } else {
            (0.0, overflow)
        };
        x.clamp(lo, hi)
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

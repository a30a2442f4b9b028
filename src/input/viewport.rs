//! Screen-to-grid mapping: pan offset and zoom factor.

use serde::Serialize;

/// A position in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise offset from `origin` to `self`.
    pub fn delta_from(self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Where the grid sits on screen.
///
/// `pan` is the screen position of grid cell `(0, 0)`'s top-left corner and
/// `scale` is the edge length of one grid pixel in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub pan: Point,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Viewport {
    /// A viewport at the origin with the given zoom factor.
    ///
    /// A non-finite or non-positive factor falls back to 1.
    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Self {
            pan: Point::ORIGIN,
            scale,
        }
    }

    /// Grid cell under a screen position. May lie outside the grid.
    pub fn screen_to_pixel(&self, point: Point) -> (i32, i32) {
        let px = ((point.x - self.pan.x) / self.scale).floor();
        let py = ((point.y - self.pan.y) / self.scale).floor();
        // `as` saturates, so far-off pointers map to far-off cells.
        (px as i32, py as i32)
    }

    /// Screen position of a cell's top-left corner.
    pub fn pixel_to_screen(&self, x: i32, y: i32) -> Point {
        Point::new(
            self.pan.x + f64::from(x) * self.scale,
            self.pan.y + f64::from(y) * self.scale,
        )
    }

    /// Largest integer zoom that fits a `width`×`height` grid inside the
    /// surface (never below 1), centred on whole screen pixels.
    pub fn fit(width: usize, height: usize, surface_width: f64, surface_height: f64) -> Self {
        let scale = (surface_width / width.max(1) as f64)
            .min(surface_height / height.max(1) as f64)
            .floor();
        Self::centred(width, height, surface_width, surface_height, sanitize_scale(scale))
    }

    /// Places a `width`×`height` grid at `scale` in the middle of a surface.
    /// The pan is rounded so cell edges land on whole screen pixels.
    pub fn centred(
        width: usize,
        height: usize,
        surface_width: f64,
        surface_height: f64,
        scale: f64,
    ) -> Self {
        let (w, h) = (width.max(1) as f64, height.max(1) as f64);
        Self {
            pan: Point::new(
                ((surface_width - w * scale) / 2.0).round(),
                ((surface_height - h * scale) / 2.0).round(),
            ),
            scale,
        }
    }

    /// Fixed-size preview placement: integer scale `floor(size / max(W, H))`
    /// (at least 1), centred in a `size`×`size` square.
    pub fn preview(width: usize, height: usize, size: u32) -> Self {
        let size = f64::from(size);
        let longest = width.max(height).max(1) as f64;
        let scale = sanitize_scale((size / longest).floor());
        Self {
            pan: Point::new(
                (size - width as f64 * scale) / 2.0,
                (size - height as f64 * scale) / 2.0,
            ),
            scale,
        }
    }

    /// Scales by `factor`, keeping the grid point under `anchor` fixed.
    ///
    /// The resulting scale is clamped to `[min_scale, max_scale]`. A
    /// non-positive or non-finite factor leaves the viewport unchanged, as do
    /// unusable bounds.
    pub fn zoom_about(&self, factor: f64, anchor: Point, min_scale: f64, max_scale: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return *self;
        }
        let scale = clamp_scale(self.scale * factor, min_scale, max_scale);
        if !scale.is_finite() {
            return *self;
        }
        let grid_x = (anchor.x - self.pan.x) / self.scale;
        let grid_y = (anchor.y - self.pan.y) / self.scale;
        Self {
            pan: Point::new(anchor.x - grid_x * scale, anchor.y - grid_y * scale),
            scale,
        }
    }
}

/// Clamps `scale` to `[min_scale, max_scale]`, `min_scale` winning when the
/// bounds cross. NaN bounds are ignored; a bound that would leave a
/// non-positive scale keeps `scale` as is.
pub fn clamp_scale(scale: f64, min_scale: f64, max_scale: f64) -> f64 {
    let clamped = scale.min(max_scale).max(min_scale);
    if clamped.is_finite() && clamped > 0.0 {
        clamped
    } else {
        scale
    }
}

fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale >= 1.0 {
        scale
    } else {
        1.0
    }
}

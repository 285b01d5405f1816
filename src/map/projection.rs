use std::f64::consts::PI;

const MAX_LAT: f64 = 85.0;
const MIN_ZOOM: f64 = 0.5;
const MAX_ZOOM: f64 = 40.0;

/// Web Mercator x in [0, 1)
#[inline(always)]
fn mercator_x(lon: f64) -> f64 {
    (lon + 180.0) / 360.0
}

/// Web Mercator y in [0, 1], north at 0
#[inline(always)]
fn mercator_y(lat: f64) -> f64 {
    let lat_rad = lat.clamp(-MAX_LAT, MAX_LAT) * PI / 180.0;
    (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0
}

/// Visible map area in braille pixels
#[derive(Clone, Debug)]
pub struct Viewport {
    /// Center longitude (-180 to 180)
    pub center_lon: f64,
    /// Center latitude (-85 to 85)
    pub center_lat: f64,
    /// 1.0 shows the whole world across the width
    pub zoom: f64,
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(center_lon: f64, center_lat: f64, zoom: f64, width: usize, height: usize) -> Self {
        Self {
            center_lon,
            center_lat,
            zoom,
            width,
            height,
        }
    }

    /// Whole-world view
    pub fn world(width: usize, height: usize) -> Self {
        Self::new(0.0, 20.0, 1.0, width, height)
    }

    /// Center on a lon/lat box and zoom until it fills the canvas
    pub fn fit_bounds(&mut self, min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) {
        if self.width == 0 || self.height == 0 || min_lon > max_lon || min_lat > max_lat {
            return;
        }

        let span_x = (mercator_x(max_lon) - mercator_x(min_lon)).max(1e-6);
        let span_y = (mercator_y(min_lat) - mercator_y(max_lat)).max(1e-6);
        let zoom_x = 1.0 / span_x;
        // Projected y is scaled by width, not height
        let zoom_y = self.height as f64 / (self.width as f64 * span_y);

        self.zoom = (zoom_x.min(zoom_y) * 0.95).clamp(MIN_ZOOM, MAX_ZOOM);
        self.center_lon = (min_lon + max_lon) / 2.0;

        let mid_y = (mercator_y(min_lat) + mercator_y(max_lat)) / 2.0;
        self.center_lat = (PI * (1.0 - 2.0 * mid_y)).sinh().atan().to_degrees();
    }

    /// Pan by a pixel delta
    pub fn pan(&mut self, dx: i32, dy: i32) {
        let scale = 360.0 / (self.zoom * self.width.max(1) as f64);
        self.center_lon += dx as f64 * scale;
        self.center_lat -= dy as f64 * scale * 0.5;

        if self.center_lon > 180.0 {
            self.center_lon -= 360.0;
        } else if self.center_lon < -180.0 {
            self.center_lon += 360.0;
        }
        self.center_lat = self.center_lat.clamp(-MAX_LAT, MAX_LAT);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * 1.5).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / 1.5).max(MIN_ZOOM);
    }

    /// Zoom in keeping the point under (px, py) fixed
    pub fn zoom_in_at(&mut self, px: i32, py: i32) {
        self.zoom_at(px, py, 1.5);
    }

    pub fn zoom_out_at(&mut self, px: i32, py: i32) {
        self.zoom_at(px, py, 1.0 / 1.5);
    }

    fn zoom_at(&mut self, px: i32, py: i32, factor: f64) {
        let (lon, lat) = self.unproject(px, py);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let (new_px, new_py) = self.project(lon, lat);
        self.pan(new_px - px, new_py - py);
    }

    /// Pixel -> (lon, lat)
    pub fn unproject(&self, px: i32, py: i32) -> (f64, f64) {
        let scale = self.zoom * self.width.max(1) as f64;
        let x = (px as f64 - self.width as f64 / 2.0) / scale + mercator_x(self.center_lon);
        let y = (py as f64 - self.height as f64 / 2.0) / scale + mercator_y(self.center_lat);

        let lon = x * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * y)).sinh().atan() * 180.0 / PI;
        (lon, lat)
    }

    /// (lon, lat) -> pixel
    pub fn project(&self, lon: f64, lat: f64) -> (i32, i32) {
        let (x, y) = self.project_f(lon, lat);
        (x as i32, y as i32)
    }

    /// Sub-pixel projection, used by the polygon rasterizer
    pub fn project_f(&self, lon: f64, lat: f64) -> (f64, f64) {
        let scale = self.zoom * self.width as f64;
        let px = (mercator_x(lon) - mercator_x(self.center_lon)) * scale + self.width as f64 / 2.0;
        let py = (mercator_y(lat) - mercator_y(self.center_lat)) * scale + self.height as f64 / 2.0;
        (px, py)
    }

    /// Rough bounding box check for a segment
    pub fn line_might_be_visible(&self, p1: (i32, i32), p2: (i32, i32)) -> bool {
        let min_x = p1.0.min(p2.0);
        let max_x = p1.0.max(p2.0);
        let min_y = p1.1.min(p2.1);
        let max_y = p1.1.max(p2.1);

        max_x >= 0 && min_x < self.width as i32 && max_y >= 0 && min_y < self.height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_center() {
        let vp = Viewport::new(0.0, 0.0, 1.0, 100, 100);
        assert_eq!(vp.project(0.0, 0.0), (50, 50));
    }

    #[test]
    fn test_unproject_inverts_project() {
        let vp = Viewport::new(10.0, 45.0, 3.0, 200, 120);
        let (px, py) = vp.project(12.5, 41.9);
        let (lon, lat) = vp.unproject(px, py);
        assert!((lon - 12.5).abs() < 1.0);
        assert!((lat - 41.9).abs() < 1.0);
    }

    #[test]
    fn test_pan() {
        let mut vp = Viewport::new(0.0, 0.0, 1.0, 100, 100);
        vp.pan(10, 0);
        assert!(vp.center_lon > 0.0);
    }

    #[test]
    fn test_fit_bounds_keeps_box_on_screen() {
        let mut vp = Viewport::world(200, 100);
        // Roughly Europe
        vp.fit_bounds(-10.0, 36.0, 20.0, 56.0);
        assert!(vp.zoom > 1.0);
        for (lon, lat) in [(-10.0, 36.0), (20.0, 56.0), (-10.0, 56.0), (20.0, 36.0)] {
            let (px, py) = vp.project(lon, lat);
            assert!((0..=200).contains(&px), "x {px} for {lon},{lat}");
            assert!((0..=100).contains(&py), "y {py} for {lon},{lat}");
        }
    }

    #[test]
    fn test_fit_bounds_ignores_empty_box() {
        let mut vp = Viewport::world(200, 100);
        vp.fit_bounds(10.0, 0.0, -10.0, 5.0);
        assert_eq!(vp.zoom, 1.0);
    }
}

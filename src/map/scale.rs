use ratatui::style::Color;

/// Sequential red scale used for title counts, light to dark
pub const WIN_STOPS: [(u8, u8, u8); 5] = [
    (0xfe, 0xe5, 0xd9),
    (0xfc, 0xae, 0x91),
    (0xfb, 0x6a, 0x4a),
    (0xde, 0x2d, 0x26),
    (0xa5, 0x0f, 0x15),
];

/// Continuous color scale over a fixed value range
#[derive(Clone, Debug)]
pub struct ColorScale {
    stops: Vec<(u8, u8, u8)>,
    min: f64,
    max: f64,
}

impl ColorScale {
    pub fn new(stops: &[(u8, u8, u8)], min: f64, max: f64) -> Self {
        Self {
            stops: stops.to_vec(),
            min,
            max,
        }
    }

    /// Scale for title counts, 1 to 5
    pub fn wins() -> Self {
        Self::new(&WIN_STOPS, 1.0, 5.0)
    }

    /// Legend tick values (integers across the range)
    pub fn ticks(&self) -> Vec<u32> {
        (self.min.ceil() as u32..=self.max.floor() as u32).collect()
    }

    /// Interpolated color; values outside the range are clamped
    pub fn color(&self, value: f64) -> Color {
        let (r, g, b) = self.rgb(value);
        Color::Rgb(r, g, b)
    }

    pub fn rgb(&self, value: f64) -> (u8, u8, u8) {
        match self.stops.len() {
            0 => (0, 0, 0),
            1 => self.stops[0],
            n => {
                let span = (self.max - self.min).max(f64::EPSILON);
                let t = ((value - self.min) / span).clamp(0.0, 1.0) * (n - 1) as f64;
                let idx = (t.floor() as usize).min(n - 2);
                let frac = t - idx as f64;
                let (a, b) = (self.stops[idx], self.stops[idx + 1]);
                (lerp(a.0, b.0, frac), lerp(a.1, b.1, frac), lerp(a.2, b.2, frac))
            }
        }
    }
}

#[inline(always)]
fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let scale = ColorScale::wins();
        assert_eq!(scale.rgb(1.0), WIN_STOPS[0]);
        assert_eq!(scale.rgb(5.0), WIN_STOPS[4]);
    }

    #[test]
    fn test_integer_counts_hit_stops() {
        let scale = ColorScale::wins();
        for (i, stop) in WIN_STOPS.iter().enumerate() {
            assert_eq!(scale.rgb(i as f64 + 1.0), *stop);
        }
    }

    #[test]
    fn test_clamps_out_of_range() {
        let scale = ColorScale::wins();
        assert_eq!(scale.rgb(0.0), WIN_STOPS[0]);
        assert_eq!(scale.rgb(9.0), WIN_STOPS[4]);
        assert_eq!(scale.color(9.0), Color::Rgb(0xa5, 0x0f, 0x15));
    }

    #[test]
    fn test_midpoint_interpolates() {
        let scale = ColorScale::new(&[(0, 0, 0), (200, 100, 50)], 0.0, 1.0);
        assert_eq!(scale.rgb(0.5), (100, 50, 25));
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ColorScale::wins().ticks(), vec![1, 2, 3, 4, 5]);
    }
}

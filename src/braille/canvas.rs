/// Braille dot canvas. Each terminal cell holds a 2x4 dot grid,
/// encoded as the low byte of a U+2800..U+28FF code point.
#[derive(Clone)]
pub struct BrailleCanvas {
    width: usize,  // Cells
    height: usize, // Cells
    cells: Vec<u8>,
}

/// Dot bit for (x % 2, y % 4):
/// ```text
/// 0x01 0x08
/// 0x02 0x10
/// 0x04 0x20
/// 0x40 0x80
/// ```
#[inline(always)]
fn dot_bit(x: usize, y: usize) -> u8 {
    const BITS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];
    BITS[x % 2][y % 4]
}

impl BrailleCanvas {
    /// Canvas of `width` x `height` cells, i.e. `width*2` x `height*4` dots
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0u8; width * height],
        }
    }

    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }

    pub fn set_pixel(&mut self, x: usize, y: usize) {
        let (cx, cy) = (x / 2, y / 4);
        if cx >= self.width || cy >= self.height {
            return;
        }
        self.cells[cy * self.width + cx] |= dot_bit(x, y);
    }

    /// Set a pixel using signed coordinates (ignores negative values)
    pub fn set_pixel_signed(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 {
            self.set_pixel(x as usize, y as usize);
        }
    }

    /// Set every dot on row `y` between `x0` and `x1` inclusive, clipped to the canvas
    pub fn fill_span(&mut self, y: i32, x0: i32, x1: i32) {
        if y < 0 || y as usize >= self.pixel_height() {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(self.pixel_width() as i32 - 1);
        for x in start..=end {
            self.set_pixel(x as usize, y as usize);
        }
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        let (cx, cy) = (x / 2, y / 4);
        cx < self.width && cy < self.height && self.cells[cy * self.width + cx] & dot_bit(x, y) != 0
    }

    /// Number of dots set
    pub fn dot_count(&self) -> u32 {
        self.cells.iter().map(|b| b.count_ones()).sum()
    }

    /// Glyph for a cell, `None` when it has no dots
    pub fn glyph(&self, cx: usize, cy: usize) -> Option<char> {
        if cx >= self.width || cy >= self.height {
            return None;
        }
        match self.cells[cy * self.width + cx] {
            0 => None,
            bits => char::from_u32(0x2800 + bits as u32),
        }
    }

    /// Convert the canvas to a string of Braille characters
    #[cfg(test)]
    pub fn to_string(&self) -> String {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| {
                row.iter()
                    .map(|&b| char::from_u32(0x2800 + b as u32).unwrap_or(' '))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.set_pixel(0, 0);
        assert_eq!(canvas.to_string(), "⠁");
    }

    #[test]
    fn test_full_cell() {
        let mut canvas = BrailleCanvas::new(1, 1);
        for y in 0..4 {
            canvas.fill_span(y, 0, 1);
        }
        assert_eq!(canvas.to_string(), "⣿");
        assert_eq!(canvas.dot_count(), 8);
    }

    #[test]
    fn test_fill_span_clips() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.fill_span(0, -10, 100);
        canvas.fill_span(-1, 0, 3);
        canvas.fill_span(4, 0, 3);
        assert_eq!(canvas.dot_count(), 4);
        assert!(canvas.is_set(3, 0));
        assert!(!canvas.is_set(3, 1));
    }

    #[test]
    fn test_glyph_empty_cell() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.set_pixel(1, 1);
        assert_eq!(canvas.glyph(0, 0), Some('⠐'));
        assert_eq!(canvas.glyph(1, 0), None);
        assert_eq!(canvas.glyph(5, 5), None);
    }
}

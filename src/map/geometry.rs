use crate::braille::BrailleCanvas;

/// Closed ring of (x, y) points; the closing edge is implicit
pub type Ring = Vec<(f64, f64)>;

/// Horizontal run of filled pixels: (y, x_start, x_end), inclusive
pub type Span = (i32, i32, i32);

/// Draw a line using Bresenham's algorithm
pub fn draw_line(canvas: &mut BrailleCanvas, x0: i32, y0: i32, x1: i32, y1: i32) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        canvas.set_pixel_signed(x, y);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;

        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }

        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Scanline fill of a polygon with holes (even-odd rule), sampled at pixel
/// centers and clipped to rows `0..height`.
pub fn polygon_spans(rings: &[Ring], height: usize) -> Vec<Span> {
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in rings.iter().flatten() {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if !min_y.is_finite() || max_y < 0.0 || min_y >= height as f64 {
        return Vec::new();
    }

    let first_row = min_y.floor().max(0.0) as i32;
    let last_row = max_y.ceil().min(height as f64 - 1.0) as i32;

    let mut spans = Vec::new();
    let mut crossings = Vec::new();

    for row in first_row..=last_row {
        let sample_y = row as f64 + 0.5;
        crossings.clear();

        for ring in rings {
            if ring.len() < 3 {
                continue;
            }
            let mut prev = ring[ring.len() - 1];
            for &point in ring {
                let (x0, y0) = prev;
                let (x1, y1) = point;
                // Half-open test so shared vertices are counted once
                if (y0 <= sample_y) != (y1 <= sample_y) {
                    crossings.push(x0 + (sample_y - y0) * (x1 - x0) / (y1 - y0));
                }
                prev = point;
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil() as i32;
            let end = (pair[1] - 0.5).floor() as i32;
            if end >= start {
                spans.push((row, start, end));
            }
        }
    }

    spans
}

/// Even-odd containment test over all rings
pub fn point_in_rings(x: f64, y: f64, rings: &[Ring]) -> bool {
    let mut inside = false;
    for ring in rings {
        if ring.len() < 3 {
            continue;
        }
        let mut prev = ring[ring.len() - 1];
        for &point in ring {
            let (x0, y0) = prev;
            let (x1, y1) = point;
            if (y0 <= y) != (y1 <= y) && x < x0 + (y - y0) * (x1 - x0) / (y1 - y0) {
                inside = !inside;
            }
            prev = point;
        }
    }
    inside
}

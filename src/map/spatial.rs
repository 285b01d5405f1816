use std::collections::HashMap;

/// Bounding box in degrees: (min_lon, min_lat, max_lon, max_lat)
pub type BBox = (f64, f64, f64, f64);

/// Spatial index over feature bounding boxes.
/// Each feature is stored in every cell its bbox overlaps, so lookups
/// never miss a feature but may return ones whose shape does not contain
/// the point; callers run the exact test afterwards.
pub struct FeatureGrid {
    cells: HashMap<(i32, i32), Vec<usize>>,
    cell_size: f64,
}

impl FeatureGrid {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cells: HashMap::new(),
            cell_size,
        }
    }

    #[inline(always)]
    fn to_cell(&self, lon: f64, lat: f64) -> (i32, i32) {
        let x = (lon / self.cell_size).floor() as i32;
        let y = (lat / self.cell_size).floor() as i32;
        (x, y)
    }

    /// Index features by position in `bboxes`
    pub fn build(bboxes: impl Iterator<Item = BBox>, cell_size: f64) -> Self {
        let mut grid = Self::new(cell_size);
        for (idx, (min_lon, min_lat, max_lon, max_lat)) in bboxes.enumerate() {
            let min_cell = grid.to_cell(min_lon, min_lat);
            let max_cell = grid.to_cell(max_lon, max_lat);
            for y in min_cell.1..=max_cell.1 {
                for x in min_cell.0..=max_cell.0 {
                    grid.cells.entry((x, y)).or_default().push(idx);
                }
            }
        }
        grid
    }

    /// Candidate features at a point
    pub fn query_point(&self, lon: f64, lat: f64) -> &[usize] {
        self.cells
            .get(&self.to_cell(lon, lat))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> FeatureGrid {
        let boxes = vec![
            (-10.0, 35.0, 5.0, 44.0),  // Iberia-ish
            (5.0, 47.0, 15.0, 55.0),   // Central Europe-ish
            (-75.0, -35.0, -35.0, 5.0), // Brazil-ish
        ];
        FeatureGrid::build(boxes.into_iter(), 10.0)
    }

    #[test]
    fn test_query_point_hits_overlapping_box() {
        let grid = grid();
        assert!(grid.query_point(-3.0, 40.0).contains(&0));
        assert!(grid.query_point(-50.0, -15.0).contains(&2));
        assert!(grid.query_point(150.0, -30.0).is_empty());
    }

    #[test]
    fn test_feature_indexed_in_every_overlapping_cell() {
        let grid = grid();
        for (lon, lat) in [(-74.0, -34.0), (-36.0, 4.0), (-55.0, -10.0)] {
            assert_eq!(grid.query_point(lon, lat), &[2]);
        }
    }
}

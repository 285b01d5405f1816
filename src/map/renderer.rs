use std::collections::BTreeMap;

use ratatui::style::Color;
use rayon::prelude::*;

use crate::braille::BrailleCanvas;
use crate::map::geometry::{draw_line, point_in_rings, polygon_spans, Ring, Span};
use crate::map::projection::Viewport;
use crate::map::scale::ColorScale;
use crate::map::spatial::{BBox, FeatureGrid};

/// A geographic line (sequence of lon/lat coordinates)
pub type LineString = Vec<(f64, f64)>;

/// Exterior ring followed by holes, in lon/lat
pub type Polygon = Vec<Ring>;

/// Grid cell size for hover lookups, in degrees
const GRID_CELL_DEGREES: f64 = 10.0;

/// One admin-0 country outline
#[derive(Clone, Debug)]
pub struct CountryShape {
    pub name: String,
    pub polygons: Vec<Polygon>,
    pub bbox: BBox,
}

impl CountryShape {
    pub fn new(name: &str, polygons: Vec<Polygon>) -> Self {
        let bbox = polygons
            .iter()
            .flat_map(|p| p.first())
            .flatten()
            .fold(
                (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
                |(a, b, c, d), &(lon, lat)| (a.min(lon), b.min(lat), c.max(lon), d.max(lat)),
            );
        Self {
            name: name.to_string(),
            polygons,
            bbox,
        }
    }

    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        let (min_lon, min_lat, max_lon, max_lat) = self.bbox;
        if lon < min_lon || lon > max_lon || lat < min_lat || lat > max_lat {
            return false;
        }
        self.polygons.iter().any(|rings| point_in_rings(lon, lat, rings))
    }

    /// Center of the largest polygon's bbox, used to anchor labels
    fn label_anchor(&self) -> Option<(f64, f64)> {
        self.polygons
            .iter()
            .filter_map(|rings| rings.first())
            .map(|ring| ring_bbox(ring))
            .max_by(|a, b| bbox_area(a).total_cmp(&bbox_area(b)))
            .map(|(x0, y0, x1, y1)| ((x0 + x1) / 2.0, (y0 + y1) / 2.0))
    }
}

fn ring_bbox(ring: &Ring) -> BBox {
    ring.iter().fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(a, b, c, d), &(x, y)| (a.min(x), b.min(y), c.max(x), d.max(y)),
    )
}

fn bbox_area(b: &BBox) -> f64 {
    (b.2 - b.0) * (b.3 - b.1)
}

/// Value per country driving the fill color
#[derive(Clone, Debug)]
pub struct Shading {
    pub values: BTreeMap<String, u32>,
    pub scale: ColorScale,
}

/// Display settings for map layers
#[derive(Clone)]
pub struct DisplaySettings {
    pub show_coastlines: bool,
    pub show_borders: bool,
    pub show_labels: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_coastlines: true,
            show_borders: true,
            show_labels: true,
        }
    }
}

/// Rendered layers, back to front
pub struct MapLayers {
    pub outlines: BrailleCanvas,
    /// One canvas per distinct value, already colored
    pub fills: Vec<(Color, BrailleCanvas)>,
    /// (column, row, text) in cell coordinates
    pub labels: Vec<(u16, u16, String)>,
}

/// Choropleth map: country shapes, outline geometry and hover index
pub struct MapRenderer {
    pub coastlines: Vec<LineString>,
    pub countries: Vec<CountryShape>,
    pub settings: DisplaySettings,
    grid: FeatureGrid,
}

impl MapRenderer {
    pub fn new() -> Self {
        Self {
            coastlines: Vec::new(),
            countries: Vec::new(),
            settings: DisplaySettings::default(),
            grid: FeatureGrid::new(GRID_CELL_DEGREES),
        }
    }

    pub fn add_coastline(&mut self, line: LineString) {
        if line.len() >= 2 {
            self.coastlines.push(line);
        }
    }

    /// Add a country; polygons for a name already present are merged into it
    pub fn add_country(&mut self, name: &str, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        match self.countries.iter_mut().find(|c| c.name == name) {
            Some(existing) => {
                let mut merged = std::mem::take(&mut existing.polygons);
                merged.extend(polygons);
                *existing = CountryShape::new(name, merged);
            }
            None => self.countries.push(CountryShape::new(name, polygons)),
        }
    }

    /// Rebuild the hover index; call after loading shapes
    pub fn reindex(&mut self) {
        self.grid = FeatureGrid::build(self.countries.iter().map(|c| c.bbox), GRID_CELL_DEGREES);
    }

    pub fn has_data(&self) -> bool {
        !self.countries.is_empty()
    }

    pub fn has_country(&self, name: &str) -> bool {
        self.countries.iter().any(|c| c.name == name)
    }

    /// Country whose shape contains the point
    pub fn country_at(&self, lon: f64, lat: f64) -> Option<&str> {
        self.grid
            .query_point(lon, lat)
            .iter()
            .filter_map(|&idx| self.countries.get(idx))
            .find(|c| c.contains(lon, lat))
            .map(|c| c.name.as_str())
    }

    /// Combined bbox of the named countries
    pub fn bounds_of<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Option<BBox> {
        let mut bounds: Option<BBox> = None;
        for name in names {
            if let Some(shape) = self.countries.iter().find(|c| c.name == name) {
                let (a, b, c, d) = shape.bbox;
                bounds = Some(match bounds {
                    Some((w, s, e, n)) => (w.min(a), s.min(b), e.max(c), n.max(d)),
                    None => shape.bbox,
                });
            }
        }
        bounds
    }

    /// Render all layers for a `width` x `height` cell area
    pub fn render(&self, width: usize, height: usize, viewport: &Viewport, shading: &Shading) -> MapLayers {
        let mut outlines = BrailleCanvas::new(width, height);

        if self.settings.show_coastlines {
            for line in &self.coastlines {
                draw_linestring(&mut outlines, line, viewport);
            }
        }
        if self.settings.show_borders {
            for ring in self.countries.iter().flat_map(|c| &c.polygons).flatten() {
                draw_ring(&mut outlines, ring, viewport);
            }
        }

        let fills = self.render_fills(width, height, viewport, shading);
        let labels = if self.settings.show_labels {
            self.labels(viewport, shading)
        } else {
            Vec::new()
        };

        MapLayers {
            outlines,
            fills,
            labels,
        }
    }

    /// Rasterize shaded countries in parallel, then paint one canvas per value
    fn render_fills(
        &self,
        width: usize,
        height: usize,
        viewport: &Viewport,
        shading: &Shading,
    ) -> Vec<(Color, BrailleCanvas)> {
        let pixel_height = height * 4;
        let spans: Vec<(u32, Vec<Span>)> = self
            .countries
            .par_iter()
            .filter_map(|country| {
                let value = *shading.values.get(&country.name)?;
                let mut spans = Vec::new();
                for rings in &country.polygons {
                    let projected: Vec<Ring> = rings
                        .iter()
                        .map(|ring| ring.iter().map(|&(lon, lat)| viewport.project_f(lon, lat)).collect())
                        .collect();
                    spans.extend(polygon_spans(&projected, pixel_height));
                }
                Some((value, spans))
            })
            .collect();

        let mut by_value: BTreeMap<u32, BrailleCanvas> = BTreeMap::new();
        for (value, country_spans) in spans {
            let canvas = by_value
                .entry(value)
                .or_insert_with(|| BrailleCanvas::new(width, height));
            for (y, x0, x1) in country_spans {
                canvas.fill_span(y, x0, x1);
            }
        }

        by_value
            .into_iter()
            .map(|(value, canvas)| (shading.scale.color(value as f64), canvas))
            .collect()
    }

    fn labels(&self, viewport: &Viewport, shading: &Shading) -> Vec<(u16, u16, String)> {
        let mut labels = Vec::new();
        for country in &self.countries {
            let Some(value) = shading.values.get(&country.name) else {
                continue;
            };
            let Some((lon, lat)) = country.label_anchor() else {
                continue;
            };
            let (px, py) = viewport.project(lon, lat);
            if px < 0 || py < 0 || px >= viewport.width as i32 || py >= viewport.height as i32 {
                continue;
            }
            let text = format!("{} {}", country.name, value);
            let col = ((px / 2) as u16).saturating_sub(text.chars().count() as u16 / 2);
            labels.push((col, (py / 4) as u16, text));
        }
        labels
    }

    pub fn toggle_borders(&mut self) {
        self.settings.show_borders = !self.settings.show_borders;
    }

    pub fn toggle_coastlines(&mut self) {
        self.settings.show_coastlines = !self.settings.show_coastlines;
    }

    pub fn toggle_labels(&mut self) {
        self.settings.show_labels = !self.settings.show_labels;
    }
}

impl Default for MapRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw a linestring, skipping off-screen and wrap-around segments
fn draw_linestring(canvas: &mut BrailleCanvas, line: &[(f64, f64)], viewport: &Viewport) {
    let mut prev: Option<(i32, i32)> = None;
    for &(lon, lat) in line {
        let (px, py) = viewport.project(lon, lat);
        if let Some((prev_x, prev_y)) = prev {
            let dist = ((px - prev_x).abs() + (py - prev_y).abs()) as usize;
            if dist < viewport.width && viewport.line_might_be_visible((prev_x, prev_y), (px, py)) {
                draw_line(canvas, prev_x, prev_y, px, py);
            }
        }
        prev = Some((px, py));
    }
}

fn draw_ring(canvas: &mut BrailleCanvas, ring: &Ring, viewport: &Viewport) {
    if ring.len() < 2 {
        return;
    }
    draw_linestring(canvas, ring, viewport);
    if ring.first() != ring.last() {
        if let (Some(&last), Some(&first)) = (ring.last(), ring.first()) {
            draw_linestring(canvas, &[last, first], viewport);
        }
    }
}

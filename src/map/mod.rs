mod geometry;
mod projection;
mod renderer;
mod scale;
mod spatial;

pub use geometry::{point_in_rings, polygon_spans, Ring, Span};
pub use projection::Viewport;
pub use renderer::{CountryShape, DisplaySettings, LineString, MapLayers, MapRenderer, Polygon, Shading};
pub use scale::{ColorScale, WIN_STOPS};
pub use spatial::{BBox, FeatureGrid};

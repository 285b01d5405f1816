mod fallback;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use geojson::{GeoJson, Geometry, JsonObject, Value};
use tracing::{debug, info, warn};

use crate::map::{MapRenderer, Polygon};

pub use fallback::generate_simple_world;

/// Admin-0 files, most detailed first; the first readable one wins
const COUNTRY_FILES: [&str; 2] = ["ne_50m_admin_0_countries.json", "ne_110m_admin_0_countries.json"];

const COASTLINE_FILE: &str = "ne_110m_coastline.json";

/// Properties holding the country name, in lookup order
const NAME_PROPERTIES: [&str; 5] = ["ADMIN", "NAME", "NAME_LONG", "admin", "name"];

/// Geodata spellings mapped to the names the results table uses
const GEOCODE_ALIASES: [(&str, &str); 4] = [
    ("Czechia", "Czech Republic"),
    ("United States of America", "United States"),
    ("Republic of Serbia", "Serbia"),
    ("England", "United Kingdom"),
];

/// Name used on the map for a geodata country name
pub fn canonical_country_name(raw: &str) -> &str {
    let raw = raw.trim();
    GEOCODE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == raw)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(raw)
}

/// Load Natural Earth country shapes and coastlines from `data_dir`.
/// Unreadable files are logged and skipped; the caller decides on fallback.
pub fn load_all_geojson(renderer: &mut MapRenderer, data_dir: &Path) -> Result<()> {
    for filename in COUNTRY_FILES {
        let path = data_dir.join(filename);
        if !path.exists() {
            continue;
        }
        match load_countries(renderer, &path) {
            Ok(count) => {
                info!(file = filename, countries = count, "loaded country shapes");
                break;
            }
            Err(e) => warn!(file = filename, error = %e, "failed to load country shapes"),
        }
    }

    let coast_path = data_dir.join(COASTLINE_FILE);
    if coast_path.exists() {
        if let Err(e) = load_coastlines(renderer, &coast_path) {
            warn!(file = COASTLINE_FILE, error = %e, "failed to load coastlines");
        }
    }

    renderer.reindex();
    Ok(())
}

/// Parse a GeoJSON file with simd-json
fn read_geojson(path: &Path) -> Result<GeoJson> {
    let mut bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let value: serde_json::Value = simd_json::serde::from_slice(&mut bytes)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(GeoJson::from_json_value(value)?)
}

/// Load admin-0 polygons, returns how many named features were added
fn load_countries(renderer: &mut MapRenderer, path: &Path) -> Result<usize> {
    let GeoJson::FeatureCollection(fc) = read_geojson(path)? else {
        anyhow::bail!("{} is not a FeatureCollection", path.display());
    };

    let mut added = 0;
    for feature in fc.features {
        let Some(name) = feature.properties.as_ref().and_then(feature_name) else {
            debug!("skipping unnamed feature");
            continue;
        };
        let Some(geometry) = feature.geometry else {
            continue;
        };
        let polygons = geometry_polygons(&geometry);
        if !polygons.is_empty() {
            renderer.add_country(canonical_country_name(name), polygons);
            added += 1;
        }
    }
    Ok(added)
}

fn feature_name(props: &JsonObject) -> Option<&str> {
    NAME_PROPERTIES
        .iter()
        .find_map(|key| props.get(*key).and_then(|v| v.as_str()))
        .filter(|name| !name.trim().is_empty())
}

/// Load coastline GeoJSON data
fn load_coastlines(renderer: &mut MapRenderer, path: &Path) -> Result<()> {
    let geojson = read_geojson(path)?;
    process_geojson_lines(&geojson, |line| renderer.add_coastline(line));
    Ok(())
}

fn to_ring(coords: &[Vec<f64>]) -> Vec<(f64, f64)> {
    coords
        .iter()
        .filter(|c| c.len() >= 2)
        .map(|c| (c[0], c[1]))
        .collect()
}

/// Polygons with holes, flattened out of any geometry type
fn geometry_polygons(geometry: &Geometry) -> Vec<Polygon> {
    match &geometry.value {
        Value::Polygon(rings) => vec![rings.iter().map(|r| to_ring(r)).collect()],
        Value::MultiPolygon(polygons) => polygons
            .iter()
            .map(|rings| rings.iter().map(|r| to_ring(r)).collect())
            .collect(),
        Value::GeometryCollection(geometries) => {
            geometries.iter().flat_map(geometry_polygons).collect()
        }
        _ => Vec::new(),
    }
}

/// Process GeoJSON and extract line features
fn process_geojson_lines<F>(geojson: &GeoJson, mut add_line: F)
where
    F: FnMut(Vec<(f64, f64)>),
{
    match geojson {
        GeoJson::FeatureCollection(fc) => {
            for feature in &fc.features {
                if let Some(ref geometry) = feature.geometry {
                    process_geometry_lines(geometry, &mut add_line);
                }
            }
        }
        GeoJson::Feature(f) => {
            if let Some(ref geometry) = f.geometry {
                process_geometry_lines(geometry, &mut add_line);
            }
        }
        GeoJson::Geometry(geometry) => {
            process_geometry_lines(geometry, &mut add_line);
        }
    }
}

fn process_geometry_lines<F>(geometry: &Geometry, add_line: &mut F)
where
    F: FnMut(Vec<(f64, f64)>),
{
    match &geometry.value {
        Value::LineString(coords) => add_line(to_ring(coords)),
        Value::MultiLineString(lines) => {
            for coords in lines {
                add_line(to_ring(coords));
            }
        }
        Value::GeometryCollection(geometries) => {
            for g in geometries {
                process_geometry_lines(g, add_line);
            }
        }
        _ => {}
    }
}

use crate::map::MapRenderer;

/// Coarse continent outlines, drawn when no coastline file is available
const CONTINENTS: [&[(f64, f64)]; 6] = [
    // North America
    &[
        (-168.0, 65.0), (-166.0, 60.0), (-141.0, 60.0), (-130.0, 55.0), (-125.0, 48.0),
        (-124.0, 40.0), (-117.0, 32.0), (-110.0, 25.0), (-97.0, 25.0), (-97.0, 28.0),
        (-82.0, 24.0), (-80.0, 25.0), (-81.0, 31.0), (-75.0, 35.0), (-70.0, 41.0),
        (-65.0, 47.0), (-55.0, 47.0), (-58.0, 55.0), (-64.0, 60.0), (-80.0, 63.0),
        (-95.0, 62.0), (-110.0, 68.0), (-145.0, 70.0), (-168.0, 65.0),
    ],
    // South America
    &[
        (-80.0, 10.0), (-70.0, 12.0), (-60.0, 8.0), (-50.0, 0.0), (-35.0, -5.0),
        (-39.0, -15.0), (-41.0, -22.0), (-48.0, -26.0), (-55.0, -34.0), (-58.0, -38.0),
        (-65.0, -42.0), (-68.0, -50.0), (-70.0, -55.0), (-75.0, -50.0), (-73.0, -40.0),
        (-72.0, -30.0), (-70.0, -18.0), (-76.0, -14.0), (-81.0, -5.0), (-80.0, 0.0),
        (-78.0, 7.0), (-80.0, 10.0),
    ],
    // Europe
    &[
        (-9.5, 37.0), (-5.0, 36.0), (0.0, 38.5), (3.5, 43.3), (8.5, 44.3), (12.5, 44.0),
        (16.0, 41.5), (18.5, 40.0), (20.0, 39.5), (23.5, 38.0), (26.0, 40.5), (29.0, 41.0),
        (40.0, 43.0), (40.0, 55.0), (30.0, 60.0), (25.0, 65.0), (20.0, 70.0), (10.0, 64.0),
        (5.0, 58.0), (8.0, 57.0), (8.5, 54.0), (4.0, 51.5), (1.5, 50.5), (-2.0, 48.8),
        (-4.5, 48.0), (-1.5, 46.0), (-1.8, 43.4), (-9.0, 43.0), (-9.5, 37.0),
    ],
    // Africa
    &[
        (-17.0, 15.0), (-17.0, 21.0), (-13.0, 28.0), (-6.0, 35.8), (10.0, 37.0),
        (20.0, 32.5), (32.0, 31.5), (35.0, 28.0), (43.0, 12.0), (51.0, 11.5), (40.0, -3.0),
        (40.5, -15.0), (35.0, -24.0), (32.0, -29.0), (20.0, -35.0), (18.0, -32.0),
        (12.0, -17.0), (13.0, -6.0), (9.0, 4.0), (-4.0, 5.0), (-8.0, 4.5), (-13.0, 8.0),
        (-17.0, 15.0),
    ],
    // Asia
    &[
        (29.0, 41.0), (36.0, 36.5), (35.0, 31.0), (43.0, 13.0), (52.0, 16.0), (57.0, 23.0),
        (62.0, 25.0), (67.0, 24.0), (73.0, 20.0), (77.5, 8.0), (80.0, 15.0), (87.0, 21.5),
        (92.0, 22.0), (98.0, 16.0), (100.0, 13.5), (105.0, 9.0), (109.0, 12.0), (108.0, 21.5),
        (117.0, 23.0), (122.0, 30.0), (121.0, 37.0), (126.0, 38.0), (129.5, 42.5),
        (141.0, 53.0), (160.0, 61.0), (180.0, 68.0), (140.0, 72.0), (110.0, 77.0),
        (80.0, 73.0), (68.0, 69.0), (55.0, 68.0), (44.0, 67.0), (40.0, 55.0), (40.0, 43.0),
        (29.0, 41.0),
    ],
    // Australia
    &[
        (114.0, -22.0), (122.0, -18.0), (130.0, -12.0), (136.5, -12.0), (142.0, -10.7),
        (146.0, -18.5), (153.0, -25.0), (153.5, -29.0), (150.0, -37.5), (146.0, -39.0),
        (140.0, -38.0), (135.0, -34.5), (131.0, -31.5), (124.0, -33.8), (115.0, -34.5),
        (113.5, -26.0), (114.0, -22.0),
    ],
];

/// Simplified outlines of every country that has won a final
const COUNTRIES: [(&str, &[&[(f64, f64)]]); 8] = [
    (
        "Uruguay",
        &[&[
            (-58.4, -33.9), (-57.6, -30.2), (-56.0, -30.1), (-53.4, -33.7), (-54.9, -34.9),
            (-56.3, -34.9), (-57.8, -34.4),
        ]],
    ),
    (
        "Argentina",
        &[&[
            (-65.7, -22.1), (-62.8, -22.0), (-57.6, -25.3), (-53.7, -26.1), (-55.8, -28.0),
            (-57.6, -30.2), (-58.4, -33.9), (-57.5, -36.3), (-56.7, -36.5), (-57.7, -38.2),
            (-62.3, -38.8), (-62.1, -40.7), (-65.1, -41.1), (-63.8, -42.1), (-65.3, -45.0),
            (-67.6, -46.3), (-65.8, -47.8), (-69.1, -50.7), (-68.4, -52.3), (-71.9, -52.0),
            (-72.3, -50.7), (-73.5, -49.3), (-71.7, -46.7), (-71.7, -43.4), (-71.9, -40.0),
            (-70.8, -36.4), (-70.0, -33.1), (-70.5, -29.0), (-68.5, -27.1), (-67.0, -23.0),
        ]],
    ),
    (
        "Brazil",
        &[&[
            (-60.0, 5.2), (-51.0, 4.0), (-50.0, 1.8), (-48.6, -1.2), (-44.6, -2.6), (-39.9, -2.9),
            (-35.2, -5.4), (-34.8, -7.4), (-37.0, -11.0), (-39.0, -13.8), (-39.2, -17.7),
            (-40.9, -21.9), (-44.6, -23.4), (-48.5, -25.9), (-48.6, -28.5), (-53.4, -33.7),
            (-56.0, -30.1), (-57.6, -30.2), (-55.8, -28.0), (-53.7, -26.1), (-54.6, -25.6),
            (-55.4, -24.0), (-58.0, -20.0), (-58.2, -16.3), (-60.2, -13.5), (-65.0, -11.0),
            (-69.9, -11.0), (-73.0, -9.0), (-73.9, -7.3), (-70.0, -4.2), (-69.4, 1.1),
            (-67.0, 1.6), (-63.4, 3.0), (-64.0, 4.0),
        ]],
    ),
    (
        "Italy",
        &[
            &[
                (7.0, 43.8), (7.7, 45.9), (10.5, 46.9), (12.4, 47.1), (13.7, 46.5), (13.6, 45.8),
                (12.3, 45.3), (12.6, 44.1), (13.7, 43.5), (16.0, 41.9), (18.5, 40.2), (16.9, 40.4),
                (16.6, 38.9), (15.6, 38.0), (15.9, 39.5), (15.0, 40.1), (12.9, 41.3), (10.5, 42.9),
                (10.2, 43.9), (8.7, 44.4),
            ],
            // Sicily
            &[(12.4, 37.8), (15.1, 36.6), (15.6, 38.2), (12.4, 38.1)],
            // Sardinia
            &[(8.4, 39.0), (9.6, 39.1), (9.8, 41.0), (8.2, 40.9)],
        ],
    ),
    (
        "Germany",
        &[&[
            (6.0, 50.8), (6.1, 51.9), (7.0, 52.2), (7.0, 53.5), (8.7, 53.9), (9.9, 54.9),
            (11.0, 54.4), (12.5, 54.5), (14.1, 53.9), (14.4, 53.3), (14.6, 51.7), (15.0, 51.1),
            (12.2, 50.3), (13.8, 48.8), (13.0, 47.6), (10.5, 47.6), (9.6, 47.5), (7.6, 47.6),
            (8.2, 49.0), (6.4, 49.5), (6.2, 50.1),
        ]],
    ),
    (
        "France",
        &[
            &[
                (-1.9, 43.4), (-1.4, 46.0), (-2.2, 47.1), (-4.5, 47.9), (-4.6, 48.6), (-1.6, 48.6),
                (-1.9, 49.7), (0.1, 49.5), (1.6, 50.9), (2.5, 51.1), (4.2, 50.0), (5.9, 49.4),
                (8.2, 49.0), (7.6, 47.6), (6.0, 46.3), (7.0, 45.3), (7.5, 43.8), (6.2, 43.1),
                (3.1, 43.1), (3.0, 42.5), (0.7, 42.8),
            ],
            // Corsica
            &[(8.6, 41.4), (9.4, 41.4), (9.5, 43.0), (8.7, 42.6)],
        ],
    ),
    (
        "Spain",
        &[&[
            (-9.3, 43.0), (-7.9, 43.8), (-1.8, 43.4), (0.7, 42.8), (3.0, 42.5), (3.2, 41.9),
            (0.8, 41.0), (0.0, 39.9), (-0.3, 38.9), (-2.1, 36.7), (-5.4, 36.0), (-6.3, 36.9),
            (-7.5, 37.2), (-7.0, 38.0), (-7.4, 39.6), (-6.9, 41.0), (-8.2, 42.0), (-9.0, 41.9),
        ]],
    ),
    (
        "United Kingdom",
        &[
            &[
                (-5.7, 50.0), (1.4, 51.2), (1.7, 52.7), (0.2, 53.3), (-0.1, 54.5), (-1.6, 55.6),
                (-2.1, 57.1), (-1.8, 57.6), (-4.0, 57.6), (-3.0, 58.6), (-5.0, 58.6), (-6.2, 56.8),
                (-5.6, 55.3), (-4.8, 54.8), (-3.0, 54.0), (-4.2, 53.2), (-4.8, 52.8), (-4.2, 51.6),
                (-5.3, 51.7),
            ],
            // Northern Ireland
            &[(-5.6, 54.7), (-6.2, 55.3), (-7.6, 55.1), (-7.4, 54.1), (-6.3, 54.0)],
        ],
    ),
];

/// Load the built-in coarse world used when no Natural Earth files are present
pub fn generate_simple_world(renderer: &mut MapRenderer) {
    for outline in CONTINENTS {
        renderer.add_coastline(outline.to_vec());
    }
    for (name, polygons) in COUNTRIES {
        let polygons = polygons.iter().map(|ring| vec![ring.to_vec()]).collect();
        renderer.add_country(name, polygons);
    }
    renderer.reindex();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ResultsStore;

    #[test]
    fn test_every_winner_has_a_shape() {
        let mut renderer = MapRenderer::new();
        generate_simple_world(&mut renderer);
        let store = ResultsStore::load().unwrap();
        for country in store.all_countries() {
            assert!(renderer.has_country(&country), "missing outline for {country}");
        }
    }

    #[test]
    fn test_interior_points_resolve_to_their_country() {
        let mut renderer = MapRenderer::new();
        generate_simple_world(&mut renderer);
        let points = [
            ("Uruguay", -56.0, -32.5),
            ("Argentina", -64.0, -34.6),
            ("Brazil", -47.9, -15.8),
            ("Italy", 12.5, 41.9),
            ("Germany", 10.0, 51.0),
            ("France", 2.35, 46.5),
            ("Spain", -3.7, 40.4),
            ("United Kingdom", -1.5, 52.5),
        ];
        for (country, lon, lat) in points {
            assert_eq!(renderer.country_at(lon, lat), Some(country), "{country}");
        }
    }
}

use tile_cover::{Geometry, LatLng, LatLngBounds, OfflineRegionDefinition, SourceType};

fn san_francisco() -> LatLngBounds {
    LatLngBounds::hull(LatLng::new(37.6609, -122.5744), LatLng::new(37.8271, -122.3204))
}

fn san_francisco_wrapped() -> LatLngBounds {
    LatLngBounds::hull(LatLng::new(37.6609, 238.5744), LatLng::new(37.8271, 238.3204))
}

fn cover_tuples(region: &OfflineRegionDefinition, source: SourceType, tile_size: u16, range: (u8, u8)) -> Vec<(u8, u32, u32)> {
    region
        .tile_cover(source, tile_size, range)
        .into_iter()
        .map(|t| (t.z, t.x, t.y))
        .collect()
}

#[test]
fn tile_cover_empty() {
    let region = OfflineRegionDefinition::from_bounds("", LatLngBounds::empty(), 0.0, 20.0, 1.0).unwrap();
    assert_eq!(cover_tuples(&region, SourceType::Vector, 512, (0, 22)), vec![]);
}

#[test]
fn tile_cover_zoom_intersection() {
    let region = OfflineRegionDefinition::from_bounds("", san_francisco(), 2.0, 2.0, 1.0).unwrap();
    assert_eq!(cover_tuples(&region, SourceType::Vector, 512, (0, 22)), vec![(2, 0, 1)]);
    assert_eq!(cover_tuples(&region, SourceType::Vector, 512, (3, 22)), vec![]);
}

#[test]
fn tile_cover_tile_size() {
    let region = OfflineRegionDefinition::from_bounds("", LatLngBounds::world(), 0.0, 0.0, 1.0).unwrap();
    assert_eq!(cover_tuples(&region, SourceType::Vector, 512, (0, 22)), vec![(0, 0, 0)]);
    assert_eq!(
        cover_tuples(&region, SourceType::Vector, 256, (0, 22)),
        vec![(1, 0, 0), (1, 1, 0), (1, 0, 1), (1, 1, 1)]
    );
}

#[test]
fn tile_cover_zoom_rounding() {
    let region = OfflineRegionDefinition::from_bounds("", san_francisco(), 0.6, 0.7, 1.0).unwrap();
    assert_eq!(cover_tuples(&region, SourceType::Vector, 512, (0, 22)), vec![(0, 0, 0)]);
    assert_eq!(cover_tuples(&region, SourceType::Raster, 512, (0, 22)), vec![(1, 0, 0)]);
}

#[test]
fn tile_cover_wrapped() {
    let region = OfflineRegionDefinition::from_bounds("", san_francisco_wrapped(), 0.0, 0.0, 1.0).unwrap();
    assert_eq!(cover_tuples(&region, SourceType::Vector, 512, (0, 22)), vec![(0, 0, 0)]);
}

#[test]
fn tile_count() {
    let region = OfflineRegionDefinition::from_bounds("", san_francisco_wrapped(), 0.0, 22.0, 1.0).unwrap();
    assert_eq!(region.tile_count(SourceType::Vector, 512, (10, 18)), 38424);
    assert_eq!(region.tile_count(SourceType::Vector, 512, (3, 22)), 9_675_240);
}

#[test]
fn point() {
    let region = OfflineRegionDefinition::new(
        "",
        Geometry::Point(LatLng::new(37.6609, -122.5744)),
        0.0,
        2.0,
        1.0,
    )
    .unwrap();
    assert_eq!(
        cover_tuples(&region, SourceType::Vector, 512, (0, 22)),
        vec![(0, 0, 0), (1, 0, 0), (2, 0, 1)]
    );
}

#[test]
fn multi_point() {
    let region = OfflineRegionDefinition::new(
        "",
        Geometry::MultiPoint(vec![LatLng::new(37.76, -122.5), LatLng::new(37.76, -122.4)]),
        19.0,
        20.0,
        1.0,
    )
    .unwrap();
    assert_eq!(
        cover_tuples(&region, SourceType::Vector, 512, (0, 22)),
        vec![(19, 83740, 202675), (19, 83886, 202675), (20, 167480, 405351), (20, 167772, 405351)]
    );
}

#[test]
fn line_string() {
    let region = OfflineRegionDefinition::new(
        "",
        Geometry::LineString(vec![LatLng::new(37.76, -122.5), LatLng::new(37.76, -122.4)]),
        11.0,
        14.0,
        1.0,
    )
    .unwrap();
    assert_eq!(
        cover_tuples(&region, SourceType::Vector, 512, (0, 22)),
        vec![
            (11, 327, 791),
            (12, 654, 1583),
            (12, 655, 1583),
            (13, 1308, 3166),
            (13, 1309, 3166),
            (13, 1310, 3166),
            (14, 2616, 6333),
            (14, 2617, 6333),
            (14, 2618, 6333),
            (14, 2619, 6333),
            (14, 2620, 6333),
            (14, 2621, 6333),
        ]
    );
}

#[test]
fn multi_line_string() {
    let region = OfflineRegionDefinition::new(
        "",
        Geometry::MultiLineString(vec![
            vec![LatLng::new(37.76, -122.5), LatLng::new(37.76, -122.4)],
            vec![LatLng::new(37.72, -122.5), LatLng::new(37.72, -122.4)],
        ]),
        13.0,
        14.0,
        1.0,
    )
    .unwrap();
    assert_eq!(
        cover_tuples(&region, SourceType::Vector, 512, (0, 22)),
        vec![
            (13, 1308, 3166),
            (13, 1309, 3166),
            (13, 1310, 3166),
            (13, 1308, 3167),
            (13, 1309, 3167),
            (13, 1310, 3167),
            (14, 2616, 6333),
            (14, 2617, 6333),
            (14, 2618, 6333),
            (14, 2619, 6333),
            (14, 2620, 6333),
            (14, 2621, 6333),
            (14, 2616, 6335),
            (14, 2617, 6335),
            (14, 2618, 6335),
            (14, 2619, 6335),
            (14, 2620, 6335),
            (14, 2621, 6335),
        ]
    );
}

#[test]
fn decode_bounds_legacy() {
    let json = r#"{
        "style_url": "mapbox://styles/mapbox/streets-v11",
        "bounds": [37.6609, -122.5744, 37.8271, -122.3204],
        "min_zoom": 0,
        "max_zoom": 14,
        "pixel_ratio": 1.0
    }"#;
    let region = OfflineRegionDefinition::decode(json).unwrap();
    assert_eq!(region.style_url, "mapbox://styles/mapbox/streets-v11");
    assert_eq!(region.min_zoom, 0.0);
    assert_eq!(region.max_zoom, 14.0);
    assert!(matches!(region.geometry, Geometry::Polygon(_)));
}

#[test]
fn decode_rejects_malformed_bounds_length() {
    let json = r#"{
        "style_url": "x",
        "bounds": [1.0, 2.0, 3.0],
        "min_zoom": 0,
        "pixel_ratio": 1.0
    }"#;
    assert!(OfflineRegionDefinition::decode(json).is_err());
}

#[test]
fn decode_geometry_object() {
    let json = r#"{
        "style_url": "x",
        "geometry": {"type": "Point", "coordinates": [-122.5744, 37.6609]},
        "min_zoom": 0,
        "max_zoom": 10,
        "pixel_ratio": 2.0
    }"#;
    let region = OfflineRegionDefinition::decode(json).unwrap();
    assert_eq!(region.geometry, Geometry::Point(LatLng::new(37.6609, -122.5744)));
    assert_eq!(region.pixel_ratio, 2.0);
}

#[test]
fn encode_decode_round_trip() {
    let region =
        OfflineRegionDefinition::from_bounds("x", san_francisco(), 0.0, 14.0, 1.0).unwrap();
    let decoded = OfflineRegionDefinition::decode(&region.encode()).unwrap();
    assert_eq!(region, decoded);
}

#[test]
fn invalid_definition_rejected() {
    assert!(OfflineRegionDefinition::from_bounds("x", san_francisco(), -1.0, 10.0, 1.0).is_err());
    assert!(OfflineRegionDefinition::from_bounds("x", san_francisco(), 10.0, 5.0, 1.0).is_err());
    assert!(OfflineRegionDefinition::from_bounds("x", san_francisco(), 0.0, 10.0, -1.0).is_err());
}

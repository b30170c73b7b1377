//! Tests for URL hash parsing and configuration building.

use std::collections::HashSet;

use earth_common::DeviceClass;
use hash_config::{build_configuration, parse, Configuration, HashParser};
use test_utils::fixtures::{hashes, OVERLAYS, PROJECTIONS};

const TOPOLOGY: &str = "/data/earth-topo.json?v2";

fn parse_known(hash: &str) -> Option<Configuration> {
    parse(hash, PROJECTIONS, OVERLAYS, TOPOLOGY)
}

// ============================================================================
// Date part tests
// ============================================================================

#[test]
fn test_parse_current() {
    let config = parse_known(hashes::CURRENT).unwrap();
    assert_eq!(config.date(), Some("current"));
    assert_eq!(config.hour(), Some(""));
    assert_eq!(config.param(), Some("wind"));
    assert_eq!(config.surface(), Some("surface"));
    assert_eq!(config.level(), Some("level"));
    assert_eq!(config.projection, "orthographic");
    assert_eq!(config.orientation, "");
    assert_eq!(config.overlay_type, "default");
    assert!(!config.show_grid_points);
    assert_eq!(config.topology, TOPOLOGY);
}

#[test]
fn test_parse_current_with_any_words() {
    for (param, surface, level) in [("temp", "isobaric", "850hPa"), ("a_b", "x1", "Z9")] {
        let hash = format!("current/{}/{}/{}", param, surface, level);
        let config = parse_known(&hash).unwrap();
        assert_eq!(config.param(), Some(param));
        assert_eq!(config.surface(), Some(surface));
        assert_eq!(config.level(), Some(level));
    }
}

#[test]
fn test_parse_full_example() {
    let config = parse_known(hashes::FULL).unwrap();
    assert_eq!(config.date(), Some("2013/11/14"));
    assert_eq!(config.hour(), Some("0900"));
    assert_eq!(config.param(), Some("wind"));
    assert_eq!(config.surface(), Some("isobaric"));
    assert_eq!(config.level(), Some("1000hPa"));
    assert_eq!(config.projection, "orthographic");
    assert_eq!(config.orientation, "26.50,-153.00,1430");
    assert_eq!(config.overlay_type, "off");
    assert!(!config.show_grid_points);
}

#[test]
fn test_parse_repads_date_and_hour() {
    let config = parse_known(hashes::UNPADDED).unwrap();
    assert_eq!(config.date(), Some("2014/01/02"));
    assert_eq!(config.hour(), Some("0300"));
}

#[test]
fn test_parse_malformed_returns_none() {
    for hash in hashes::MALFORMED {
        assert_eq!(parse_known(hash), None, "hash {:?} should not match", hash);
    }
}

// ============================================================================
// Option tests
// ============================================================================

#[test]
fn test_parse_all_options() {
    let config = parse_known(hashes::CURRENT_ALL_OPTIONS).unwrap();
    assert_eq!(config.projection, "waterman");
    assert_eq!(config.orientation, "-90.00,0.00,250");
    assert_eq!(config.overlay_type, "temp");
    assert!(config.show_grid_points);
}

#[test]
fn test_grid_only_on_shows_points() {
    assert!(parse_known("current/wind/surface/level/grid=on").unwrap().show_grid_points);
    assert!(!parse_known("current/wind/surface/level/grid=off").unwrap().show_grid_points);
    assert!(!parse_known("current/wind/surface/level/grid=ON").unwrap().show_grid_points);
    assert!(!parse_known("current/wind/surface/level").unwrap().show_grid_points);
}

#[test]
fn test_unknown_projection_is_ignored() {
    let config = parse_known("current/wind/surface/level/mercator=1,2,3").unwrap();
    assert_eq!(config.projection, "orthographic");
    assert_eq!(config.orientation, "");
}

#[test]
fn test_projection_without_orientation_clears_it() {
    let config = parse_known("current/wind/surface/level/waterman=1,2,3/stereographic").unwrap();
    assert_eq!(config.projection, "stereographic");
    assert_eq!(config.orientation, "");
}

#[test]
fn test_orientation_content_is_not_validated() {
    let config = parse_known("current/wind/surface/level/winkel3=,,--..").unwrap();
    assert_eq!(config.projection, "winkel3");
    assert_eq!(config.orientation, ",,--..");
}

#[test]
fn test_orientation_with_letters_is_ignored() {
    let config = parse_known("current/wind/surface/level/winkel3=north").unwrap();
    assert_eq!(config.projection, "orthographic");
}

#[test]
fn test_unknown_overlay_is_ignored() {
    let config = parse_known("current/wind/surface/level/overlay=sst").unwrap();
    assert_eq!(config.overlay_type, "default");
}

#[test]
fn test_default_overlay_always_accepted() {
    let config = parse("current/wind/surface/level/overlay=default", PROJECTIONS, &[] as &[&str], TOPOLOGY)
        .unwrap();
    assert_eq!(config.overlay_type, "default");
    let config = parse_known("current/wind/surface/level/overlay=temp/overlay=default").unwrap();
    assert_eq!(config.overlay_type, "default");
}

#[test]
fn test_later_options_override_earlier() {
    let config =
        parse_known("current/wind/surface/level/overlay=temp/atlantis=1,2,3/overlay=off/waterman")
            .unwrap();
    assert_eq!(config.overlay_type, "off");
    assert_eq!(config.projection, "waterman");
    assert_eq!(config.orientation, "");
}

#[test]
fn test_numeric_overlay_value_is_a_projection_option() {
    // fits the projection form first, so it is never considered as an overlay
    let config = parse("current/wind/surface/level/overlay=123", PROJECTIONS, &["123"], TOPOLOGY)
        .unwrap();
    assert_eq!(config.overlay_type, "default");
    assert_eq!(config.projection, "orthographic");
}

#[test]
fn test_unrecognized_options_are_ignored() {
    let config = parse_known("current/wind/surface/level/foo=bar/overlay=te-mp//grid=on").unwrap();
    assert_eq!(config.projection, "orthographic");
    assert_eq!(config.overlay_type, "default");
    assert!(config.show_grid_points);
}

#[test]
fn test_text_after_level_without_slash_is_ignored() {
    let config = parse_known("current/wind/surface/level?x/grid=on").unwrap();
    assert_eq!(config.level(), Some("level"));
    assert!(!config.show_grid_points);
}

#[test]
fn test_trailing_slash() {
    let config = parse_known("current/wind/surface/level/").unwrap();
    assert_eq!(config.level(), Some("level"));
    assert_eq!(config.projection, "orthographic");
}

#[test]
fn test_options_stop_at_line_break() {
    let config = parse_known("current/wind/surface/level/overlay=temp\n/grid=on").unwrap();
    assert_eq!(config.overlay_type, "temp");
    assert!(!config.show_grid_points);
}

#[test]
fn test_known_sets_as_hash_sets() {
    let projections: HashSet<String> = ["orthographic".to_string()].into_iter().collect();
    let overlays: HashSet<&str> = ["off"].into_iter().collect();
    let config = parse(hashes::FULL, &projections, &overlays, TOPOLOGY).unwrap();
    assert_eq!(config.overlay_type, "off");
    assert_eq!(config.orientation, "26.50,-153.00,1430");
}

#[test]
fn test_parse_does_not_depend_on_call_order() {
    let first = parse_known(hashes::FULL);
    parse_known(hashes::CURRENT_ALL_OPTIONS);
    assert_eq!(parse_known(hashes::FULL), first);
}

// ============================================================================
// build_configuration tests
// ============================================================================

#[test]
fn test_build_configuration_defaults() {
    let config = build_configuration(PROJECTIONS, OVERLAYS, TOPOLOGY);
    assert_eq!(config.selection, None);
    assert_eq!(config.date(), None);
    assert_eq!(config.projection, "orthographic");
    assert_eq!(config.orientation, "0,0,0");
    assert_eq!(config.overlay_type, "default");
    assert!(!config.show_grid_points);
    assert_eq!(config.topology, TOPOLOGY);
}

#[test]
fn test_build_configuration_is_idempotent() {
    let a = build_configuration(PROJECTIONS, OVERLAYS, TOPOLOGY);
    let b = build_configuration(PROJECTIONS, OVERLAYS, TOPOLOGY);
    assert_eq!(a, b);
}

#[test]
fn test_build_configuration_ignores_known_sets() {
    let empty: &[&str] = &[];
    assert_eq!(
        build_configuration(empty, empty, TOPOLOGY),
        build_configuration(PROJECTIONS, OVERLAYS, TOPOLOGY)
    );
}

// ============================================================================
// HashParser tests
// ============================================================================

#[test]
fn test_hash_parser_uses_device_topology() {
    let parser = HashParser::new(PROJECTIONS.iter().copied(), OVERLAYS.iter().copied(), DeviceClass::Mobile);
    assert_eq!(parser.topology(), "/data/earth-topo-mobile.json?v2");
    assert_eq!(parser.parse(hashes::CURRENT).unwrap().topology, parser.topology());
    assert_eq!(parser.build_configuration().topology, parser.topology());
}

#[test]
fn test_hash_parser_matches_free_functions() {
    let parser = HashParser::new(PROJECTIONS.iter().copied(), OVERLAYS.iter().copied(), DeviceClass::Desktop);
    assert_eq!(parser.parse(hashes::FULL), parse_known(hashes::FULL));
    assert_eq!(
        parser.build_configuration(),
        build_configuration(PROJECTIONS, OVERLAYS, TOPOLOGY)
    );
}

#[test]
fn test_hash_parser_with_topology() {
    let parser = HashParser::new(["orthographic"], ["off"], DeviceClass::Desktop)
        .with_topology("/data/custom.json");
    assert_eq!(parser.build_configuration().topology, "/data/custom.json");
    assert!(parser.projections().contains("orthographic"));
    assert!(parser.overlays().contains("off"));
}

use cyclegraph_planner::zones::{canonical_zones, zone_for, Zone, ZoneTable};
use cyclegraph_planner::PlanError;

#[test]
fn canonical_table_is_ordered_and_non_overlapping() {
    let table = canonical_zones().expect("kanonisk tabell");
    assert_eq!(table.zones().len(), 7);
    for pair in table.zones().windows(2) {
        assert!(pair[0].min_pct < pair[0].max_pct);
        assert!(pair[0].max_pct < pair[1].min_pct, "{} overlapper {}", pair[0].name, pair[1].name);
    }
}

#[test]
fn zone_for_finds_expected_zones() {
    assert_eq!(zone_for(113.0).unwrap().name, "Z5");
    assert_eq!(zone_for(56.0).unwrap().name, "Z2");
    assert_eq!(zone_for(75.0).unwrap().name, "Z2");
    assert_eq!(zone_for(100.0).unwrap().name, "Z4");
}

#[test]
fn gaps_and_out_of_range_fail_instead_of_clamping() {
    // 55.5 % ligger i hullet mellom Z1 og Z2
    assert!(matches!(zone_for(55.5), Err(PlanError::UnknownZone(_))));
    assert!(matches!(zone_for(20.0), Err(PlanError::UnknownZone(_))));
    assert!(matches!(zone_for(400.0), Err(PlanError::UnknownZone(_))));
}

#[test]
fn lookup_by_name() {
    let table = canonical_zones().unwrap();
    let z5 = table.get("Z5").unwrap();
    assert_eq!((z5.min_pct, z5.max_pct), (106.0, 120.0));
    assert!(matches!(table.get("Z9"), Err(PlanError::UnknownZone(_))));
}

#[test]
fn invalid_bounds_are_rejected() {
    assert!(matches!(
        Zone::new("X", "x", 80.0, 70.0),
        Err(PlanError::InvalidZoneBounds { .. })
    ));
    assert!(matches!(
        Zone::new("X", "x", 0.0, 70.0),
        Err(PlanError::InvalidZoneBounds { .. })
    ));
}

#[test]
fn custom_table_with_gap_is_valid() {
    let table = ZoneTable::from_zones(vec![
        Zone::new("A", "a", 40.0, 50.0).unwrap(),
        Zone::new("B", "b", 60.0, 70.0).unwrap(),
    ])
    .expect("hull er lovlig");
    assert!(table.zone_for(55.0).is_err());
    assert_eq!(table.zone_for(65.0).unwrap().name, "B");
}

#[test]
fn derived_zones_keep_expected_bounds() {
    let table = canonical_zones().unwrap();
    let z1 = table.get("Z1").unwrap();
    let z2 = table.get("Z2").unwrap();

    let span = Zone::span(z1, z2).unwrap();
    assert_eq!((span.min_pct, span.max_pct), (45.0, 75.0));

    let eased = Zone::eased(z1, 0.8).unwrap();
    assert!((eased.min_pct - 36.0).abs() < 1e-9);
    assert_eq!(eased.max_pct, 55.0);

    let scaled = Zone::scaled(z1, 0.9).unwrap();
    assert!((scaled.min_pct - 40.5).abs() < 1e-9);
    assert!((scaled.max_pct - 49.5).abs() < 1e-9);
}

use cyclegraph_planner::segment::{build_segment, power_range};
use cyclegraph_planner::zones::canonical_zones;
use cyclegraph_planner::{PlanError, SegmentKind, Zone};

#[test]
fn work_segment_watts_for_320w_ftp() {
    let z5 = canonical_zones().unwrap().get("Z5").unwrap();
    let seg = build_segment(SegmentKind::Work, z5, 4, 100, 320).expect("segment");
    assert_eq!(seg.power.min_watts, 339);
    assert_eq!(seg.power.max_watts, 384);
    assert_eq!(seg.cadence_rpm, 100);
    assert_eq!(seg.zone.name, "Z5");
    assert!(seg.description.contains("VO2max"));
    assert!(!seg.rationale.is_empty());
}

#[test]
fn rest_segment_watts_for_320w_ftp() {
    let z2 = canonical_zones().unwrap().get("Z2").unwrap();
    let seg = build_segment(SegmentKind::Rest, z2, 3, 85, 320).unwrap();
    assert_eq!((seg.power.min_watts, seg.power.max_watts), (179, 240));
}

#[test]
fn zero_duration_fails() {
    let z2 = canonical_zones().unwrap().get("Z2").unwrap();
    let err = build_segment(SegmentKind::Warmup, z2, 0, 85, 320).unwrap_err();
    assert_eq!(
        err,
        PlanError::InvalidDuration { kind: SegmentKind::Warmup, minutes: 0 }
    );
}

#[test]
fn zero_cadence_fails() {
    let z2 = canonical_zones().unwrap().get("Z2").unwrap();
    assert!(matches!(
        build_segment(SegmentKind::SteadyState, z2, 10, 0, 320),
        Err(PlanError::InvalidCadence { .. })
    ));
}

#[test]
fn watt_bounds_are_ordered_for_many_ftps() {
    let zones = canonical_zones().unwrap();
    for ftp in [1u32, 99, 150, 245, 320, 417, 550] {
        for z in zones.zones() {
            let p = power_range(z, ftp);
            assert!(p.min_watts <= p.max_watts, "FTP {ftp} {}: {:?}", z.name, p);
        }
    }
}

#[test]
fn text_is_deterministic_per_kind_and_zone() {
    let z5 = canonical_zones().unwrap().get("Z5").unwrap();
    let a = build_segment(SegmentKind::Work, z5, 4, 100, 320).unwrap();
    let b = build_segment(SegmentKind::Work, z5, 3, 95, 250).unwrap();
    assert_eq!(a.description, b.description);
    assert_eq!(a.rationale, b.rationale);

    let custom = Zone::new("Z5", "VO2max", 110.0, 115.0).unwrap();
    let c = build_segment(SegmentKind::Work, &custom, 4, 100, 320).unwrap();
    assert_eq!(a.description, c.description);
}

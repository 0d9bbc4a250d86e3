use super::*;

#[test]
fn grid_points_cover_both_endpoints_of_every_segment() {
    let g = ThreadGroup::drawable(
        "red",
        vec![PathSegment::new((0, 1), (2, 3)), PathSegment::new((4, 5), (6, 7))],
    );
    let pts: Vec<GridPoint> = g.grid_points().collect();
    assert_eq!(
        pts,
        vec![
            GridPoint::new(0, 1),
            GridPoint::new(2, 3),
            GridPoint::new(4, 5),
            GridPoint::new(6, 7),
        ]
    );
    assert!(!g.is_erase_region());
}

#[test]
fn erase_region_points_are_reported_as_is() {
    let g = ThreadGroup::EraseRegion {
        points: vec![GridPoint::new(9, 1)],
    };
    assert!(g.is_erase_region());
    assert_eq!(g.grid_points().collect::<Vec<_>>(), vec![GridPoint::new(9, 1)]);
}

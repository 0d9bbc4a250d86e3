use super::*;
use crate::{
    foundation::core::GridPoint,
    threads::model::{PathSegment, ThreadGroup},
};

#[test]
fn no_threads_gives_default_square() {
    assert_eq!(grid_extent(&[], None), GridSpec::square(40));
}

#[test]
fn explicit_size_forces_square_even_if_threads_exceed_it() {
    let groups = vec![ThreadGroup::drawable(
        "red",
        vec![PathSegment::new((0, 0), (90, 3))],
    )];
    assert_eq!(grid_extent(&groups, Some(10)), GridSpec::square(10));
    assert_eq!(grid_extent(&[], Some(7)), GridSpec::square(7));
}

#[test]
fn auto_extent_is_max_coordinate_plus_one_per_axis() {
    let groups = vec![
        ThreadGroup::drawable("red", vec![PathSegment::new((0, 1), (1, 0))]),
        ThreadGroup::drawable(
            "blue",
            vec![
                PathSegment::new((4, 2), (0, 0)),
                PathSegment::new((1, 6), (2, 2)),
            ],
        ),
    ];
    assert_eq!(
        grid_extent(&groups, None),
        GridSpec {
            width: 5,
            height: 7
        }
    );
}

#[test]
fn skip_regions_count_toward_extent() {
    let groups = vec![
        ThreadGroup::drawable("red", vec![PathSegment::new((0, 0), (1, 1))]),
        ThreadGroup::EraseRegion {
            points: vec![GridPoint::new(9, 3)],
        },
    ];
    assert_eq!(
        grid_extent(&groups, None),
        GridSpec {
            width: 10,
            height: 4
        }
    );
}

#[test]
fn extent_never_drops_below_one_cell() {
    let origin_only = vec![ThreadGroup::drawable(
        "red",
        vec![PathSegment::new((0, 0), (0, 0))],
    )];
    assert_eq!(grid_extent(&origin_only, None), GridSpec::square(1));

    let negative = vec![ThreadGroup::drawable(
        "red",
        vec![PathSegment::new((-5, -3), (-1, -2))],
    )];
    assert_eq!(grid_extent(&negative, None), GridSpec::square(1));

    let empty_region = vec![ThreadGroup::EraseRegion { points: vec![] }];
    assert_eq!(grid_extent(&empty_region, None), GridSpec::square(1));
}

use super::*;

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn rect(left: u32, top: u32, right: u32, bottom: u32) -> PixelRect {
    PixelRect {
        left,
        top,
        right,
        bottom,
    }
}

#[test]
fn new_raster_is_filled_with_background() {
    let r = Raster::new(4, 3, Rgba8::WHITE).unwrap();
    assert_eq!((r.width(), r.height()), (4, 3));
    assert_eq!(r.data().len(), 4 * 3 * 4);
    assert!(r.data().chunks_exact(4).all(|px| px == WHITE));
    assert_eq!(r.pixel(4, 0), None);
}

#[test]
fn oversized_canvas_is_a_render_error() {
    let err = Raster::new(70_000, 10, Rgba8::WHITE).err().unwrap();
    assert!(err.to_string().contains("render error:"));
}

#[test]
fn fill_rect_is_inclusive_and_clipped() {
    let mut r = Raster::new(10, 10, Rgba8::WHITE).unwrap();
    r.fill_rect(rect(2, 3, 4, 5), Rgba8::BLACK);
    assert_eq!(r.pixel(2, 3), Some([0, 0, 0, 255]));
    assert_eq!(r.pixel(4, 5), Some([0, 0, 0, 255]));
    assert_eq!(r.pixel(5, 5), Some(WHITE));
    assert_eq!(r.pixel(4, 6), Some(WHITE));
    assert_eq!(r.pixel(1, 3), Some(WHITE));

    r.fill_rect(rect(8, 8, 50, 50), Rgba8::RED);
    assert_eq!(r.pixel(9, 9), Some([255, 0, 0, 255]));

    r.fill_rect(rect(20, 20, 30, 30), Rgba8::RED);
    r.fill_rect(rect(5, 5, 4, 4), Rgba8::RED);
    assert_eq!(r.pixel(5, 5), Some(WHITE));
}

#[test]
fn inset_stroke_paints_only_the_border_band() {
    let mut r = Raster::new(20, 20, Rgba8::WHITE).unwrap();
    r.stroke_rect_inset(rect(2, 2, 12, 12), Rgba8::RED, 2);

    let red = Some([255, 0, 0, 255]);
    assert_eq!(r.pixel(2, 2), red);
    assert_eq!(r.pixel(3, 7), red);
    assert_eq!(r.pixel(12, 12), red);
    assert_eq!(r.pixel(11, 7), red);
    assert_eq!(r.pixel(7, 3), red);
    assert_eq!(r.pixel(4, 4), Some(WHITE));
    assert_eq!(r.pixel(7, 7), Some(WHITE));
    assert_eq!(r.pixel(1, 7), Some(WHITE));
    assert_eq!(r.pixel(13, 7), Some(WHITE));
}

#[test]
fn layer_line_lights_the_named_column() {
    let mut r = Raster::new(12, 12, Rgba8::WHITE).unwrap();
    r.paint_layer(|l| {
        l.line(
            Point::new(5.0, 2.0),
            Point::new(5.0, 9.0),
            1.0,
            Cap::Square,
            Rgba8::BLACK,
        )
    })
    .unwrap();

    let on = r.pixel(5, 6).unwrap();
    assert!(on[0] < 32 && on[3] == 255, "got {on:?}");
    assert_eq!(r.pixel(7, 6), Some(WHITE));
    assert_eq!(r.pixel(5, 11), Some(WHITE));
}

#[test]
fn layer_dot_covers_its_center_and_stays_local() {
    let mut r = Raster::new(16, 16, Rgba8::WHITE).unwrap();
    r.paint_layer(|l| l.dot(Point::new(8.0, 8.0), 2.0, Rgba8::RED))
        .unwrap();

    let c = r.pixel(8, 8).unwrap();
    assert!(c[0] > 230 && c[1] < 32 && c[2] < 32, "got {c:?}");
    assert_eq!(r.pixel(8, 13), Some(WHITE));
    assert_eq!(r.pixel(2, 8), Some(WHITE));
}

#[test]
fn empty_layer_leaves_raster_untouched() {
    let mut r = Raster::new(5, 5, Rgba8::WHITE).unwrap();
    let before = r.data().to_vec();
    r.paint_layer(|_| {}).unwrap();
    assert_eq!(r.data(), before.as_slice());
}

#[test]
fn over_blends_premultiplied_source() {
    assert_eq!(over(WHITE, [0, 0, 0, 0]), WHITE);
    assert_eq!(over(WHITE, [10, 20, 30, 255]), [10, 20, 30, 255]);
    assert_eq!(over(WHITE, [0, 0, 0, 128]), [127, 127, 127, 255]);
}

#[test]
fn rgb_export_drops_alpha() {
    let r = Raster::new(2, 1, Rgba8::opaque(1, 2, 3)).unwrap();
    assert_eq!(r.to_rgb8(), vec![1, 2, 3, 1, 2, 3]);
}

#[test]
fn clip_segment_keeps_inside_lines_and_cuts_outside_parts() {
    let inside = clip_segment(
        Point::new(1.0, 1.0),
        Point::new(5.0, 5.0),
        (0.0, 0.0),
        (10.0, 10.0),
    );
    assert_eq!(inside, Some((Point::new(1.0, 1.0), Point::new(5.0, 5.0))));

    let (a, b) = clip_segment(
        Point::new(5.0, 5.0),
        Point::new(1.0e20, 5.0),
        (0.0, 0.0),
        (10.0, 10.0),
    )
    .unwrap();
    assert_eq!(a, Point::new(5.0, 5.0));
    assert!((b.x - 10.0).abs() < 1e-6 && (b.y - 5.0).abs() < 1e-6);

    assert_eq!(
        clip_segment(
            Point::new(-50.0, -5.0),
            Point::new(50.0, -5.0),
            (0.0, 0.0),
            (10.0, 10.0)
        ),
        None
    );
    assert_eq!(
        clip_segment(
            Point::new(f64::NAN, 0.0),
            Point::new(1.0, 1.0),
            (0.0, 0.0),
            (10.0, 10.0)
        ),
        None
    );
}

#[test]
fn line_to_a_far_away_point_still_draws_the_visible_part() {
    let mut r = Raster::new(20, 20, Rgba8::WHITE).unwrap();
    r.paint_layer(|l| {
        l.line(
            Point::new(2.0, 10.0),
            Point::new(1.8e20, 10.0),
            1.0,
            Cap::Butt,
            Rgba8::BLACK,
        )
    })
    .unwrap();
    let on = r.pixel(15, 10).unwrap();
    assert!(on[0] < 32, "got {on:?}");
    assert_eq!(r.pixel(15, 12), Some(WHITE));
}

use star_paint::*;

fn pipeline(config: &StarConfig) -> (StarGeometry, BorderSet) {
    let geometry = StarGeometry::new(config);
    let border = BorderSet::rasterize(&geometry.edges(), config.bounds());
    (geometry, border)
}

#[test]
fn every_pixel_gets_one_region() {
    for (width, height) in [(10, 10), (64, 64), (101, 101), (300, 200), (200, 300)] {
        let plan = render(&StarConfig::new(width, height)).unwrap();
        let pixels = plan.iter().map(|(p, _)| p).collect::<Vec<_>>();

        assert_eq!(pixels.len(), width * height);
        let mut unique = pixels.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), width * height, "{}x{}", width, height);
        assert!(pixels.iter().all(|&p| plan.bounds().contains(p)));
    }
}

#[test]
fn border_pixels_are_exactly_the_rasterized_outline() {
    let config = StarConfig::default();
    let (_, border) = pipeline(&config);
    let plan = render(&config).unwrap();

    assert_eq!(plan.count(Region::Border), border.len());
    for &pixel in border.pixels() {
        assert_eq!(plan.region(pixel), Some(Region::Border), "{:?}", pixel);
    }
}

#[test]
fn segments_never_touch() {
    let config = StarConfig::default();
    let (geometry, border) = pipeline(&config);
    let filler = RegionFiller::new(&config, &geometry, &border);

    for x in 0..config.width {
        let segments = filler.segments(x);
        assert!(segments.len() <= 4, "column {}: {:?}", x, segments);
        for pair in segments.windows(2) {
            assert!(pair[0].to_y + 1 < pair[1].from_y, "column {}: {:?}", x, pair);
        }
    }
}

#[test]
fn center_column_crosses_the_body() {
    let config = StarConfig::default();
    let (geometry, border) = pipeline(&config);
    let filler = RegionFiller::new(&config, &geometry, &border);
    let plan = filler.fill().unwrap();

    let x = geometry.center.x.round() as usize;
    let segments = filler.segments(x);
    assert_eq!(segments.len(), 2, "{:?}", segments);

    let column = plan.column(x).unwrap();
    let interior = &column[segments[0].to_y + 1..segments[1].from_y];
    assert!(!interior.is_empty());
    assert!(interior.iter().all(|&r| r == Region::Fill));
    assert!(column[..segments[0].from_y].iter().all(|&r| r == Region::Background));
    assert!(column[segments[1].to_y + 1..].iter().all(|&r| r == Region::Background));
}

#[test]
fn notch_column_has_three_runs_with_fill_between() {
    let config = StarConfig::default();
    let (geometry, border) = pipeline(&config);
    let filler = RegionFiller::new(&config, &geometry, &border);
    let plan = filler.fill().unwrap();

    // The leftmost inner vertex lies on the horizontal axis of symmetry.
    let x = geometry.inner[2].x.round() as usize;
    let segments = filler.segments(x);
    assert_eq!(segments.len(), 3, "{:?}", segments);

    let column = plan.column(x).unwrap();
    for pair in segments.windows(2) {
        let gap = &column[pair[0].to_y + 1..pair[1].from_y];
        assert!(!gap.is_empty());
        assert!(gap.iter().all(|&r| r == Region::Fill));
    }
}

#[test]
fn four_run_columns_leave_the_outside_between_two_points() {
    let config = StarConfig::default();
    let (geometry, border) = pipeline(&config);
    let filler = RegionFiller::new(&config, &geometry, &border);
    let plan = filler.fill().unwrap();

    let mut four_run_columns = 0;
    for x in 0..config.width {
        let segments = filler.segments(x);
        if segments.len() != 4 {
            continue;
        }
        four_run_columns += 1;
        let column = plan.column(x).unwrap();
        let gap = |i: usize| &column[segments[i].to_y + 1..segments[i + 1].from_y];

        assert!(!gap(1).is_empty(), "column {}: {:?}", x, segments);
        assert!(gap(1).iter().all(|&r| r == Region::Background), "column {}", x);
        for i in [0, 2] {
            assert!(gap(i).iter().all(|&r| r == Region::Fill), "column {}", x);
        }
    }
    // The two left points overlap a few columns before the notch.
    assert!(four_run_columns > 0);
}

#[test]
fn columns_without_runs_are_background() {
    let config = StarConfig::default();
    let (geometry, border) = pipeline(&config);
    let filler = RegionFiller::new(&config, &geometry, &border);
    let plan = filler.fill().unwrap();

    let mut empty_columns = 0;
    for x in 0..config.width {
        let column = plan.column(x).unwrap();
        match filler.segments(x).len() {
            0 => {
                empty_columns += 1;
                assert!(column.iter().all(|&r| r == Region::Background), "column {}", x);
            }
            1 => assert!(!column.contains(&Region::Fill), "column {}", x),
            _ => {}
        }
    }
    // Everything left of the two left tips.
    assert!(empty_columns >= 90, "{}", empty_columns);
}

#[test]
fn column_crossings_match_even_odd_fill() {
    for size in [200, 1000] {
        let config = StarConfig::new(size, size);
        let columns = render(&config).unwrap();
        let even_odd = render(&config.with_fill_rule(FillRule::EvenOdd)).unwrap();

        let mismatches = columns
            .iter()
            .filter(|&(pixel, region)| even_odd.region(pixel) != Some(region))
            .count();
        assert_eq!(mismatches, 0, "{}x{}", size, size);
    }
}

#[test]
fn palette_resolves_regions() {
    let palette = Palette {
        background: Rgba::new(1, 2, 3, 255),
        border: Rgba::new(4, 5, 6, 255),
        fill: Rgba::new(7, 8, 9, 255),
    };
    let plan = render(&StarConfig::new(100, 100).with_palette(palette)).unwrap();

    let mut canvas = RgbaCanvas::new(100, 100);
    plan.paint(&mut canvas).unwrap();
    assert_eq!(canvas.get(Pixel::new(50, 50)), Some(palette.fill));
    assert_eq!(canvas.get(Pixel::new(0, 0)), Some(palette.background));
    for (pixel, region) in plan.iter() {
        assert_eq!(canvas.get(pixel), Some(palette.color(region)));
    }
}

#[test]
fn painting_onto_the_wrong_size_fails() {
    let plan = render(&StarConfig::new(40, 40)).unwrap();
    let mut canvas = RgbaCanvas::new(40, 41);
    assert!(matches!(
        plan.paint(&mut canvas),
        Err(CanvasErr::SizeMismatch { .. })
    ));
}

#[test]
fn invalid_configs_never_render() {
    assert_eq!(
        render(&StarConfig::default().with_vertex_count(2)),
        Err(StarErr::Config(ConfigErr::TooFewVertices(2)))
    );
    assert_eq!(
        render(&StarConfig::new(0, 0)),
        Err(StarErr::Config(ConfigErr::EmptyCanvas {
            width: 0,
            height: 0
        }))
    );
}

#[test]
fn rendering_is_deterministic() {
    let config = StarConfig::new(257, 257);
    assert_eq!(render(&config).unwrap(), render(&config).unwrap());
}

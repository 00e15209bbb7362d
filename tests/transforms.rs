// tests/transforms.rs
use glam::DVec2;
use symbios_fractal::{
    Canvas, Color, Drawing, DrawingVisitor, FlipAxis, FractalError, Path, Point, Rect, interpret,
    normalize,
};

const EPS: f64 = 1e-6;

fn sample() -> Drawing {
    let mut drawing = Drawing::new();
    drawing.move_to(DVec2::new(-1.0, 2.0), Color::BLACK);
    drawing.line_to(DVec2::new(3.0, -4.0));
    drawing.move_to(DVec2::new(0.5, 0.5), Color::BLUE);
    drawing.line_to(DVec2::new(2.0, 6.0));
    drawing
}

#[test]
fn test_bounds() {
    let b = sample().bounds().unwrap();
    assert_eq!(b.min, DVec2::new(-1.0, -4.0));
    assert_eq!(b.max, DVec2::new(3.0, 6.0));
}

#[test]
fn test_bounds_on_empty_drawing() {
    assert!(matches!(Drawing::new().bounds(), Err(FractalError::EmptyDrawing)));

    let mut empty_path = Drawing::new();
    empty_path.paths.push(Path {
        points: Vec::new(),
        color: Color::RED,
    });
    assert!(matches!(empty_path.bounds(), Err(FractalError::EmptyDrawing)));
    assert!(matches!(
        empty_path.center_with_margin(Canvas::default().bounds(), DVec2::splat(0.1)),
        Err(FractalError::EmptyDrawing)
    ));
}

#[test]
fn test_translate_scale_rotate() {
    let mut d = sample();
    d.translate(DVec2::new(1.0, 4.0));
    assert_eq!(d.paths[0].points[1], DVec2::new(4.0, 0.0));

    d.scale(0.5);
    assert_eq!(d.paths[0].points[1], DVec2::new(2.0, 0.0));

    d.rotate(90.0);
    assert!(d.paths[0].points[1].abs_diff_eq(DVec2::new(0.0, 2.0), EPS));
}

#[test]
fn test_flip_mirrors_within_bounds() {
    let mut d = sample();
    let before = d.bounds().unwrap();
    d.flip(FlipAxis::Vertical).unwrap();
    // (3, -4) sits on the bottom edge, so it moves to the top edge.
    assert_eq!(d.paths[0].points[1], DVec2::new(3.0, 6.0));
    assert_eq!(d.bounds().unwrap(), before);

    d.flip(FlipAxis::Horizontal).unwrap();
    assert_eq!(d.paths[0].points[1], DVec2::new(-1.0, 6.0));
}

#[test]
fn test_flip_twice_is_identity() {
    let original = interpret("F+F-F[+F]--F", 10.0, 33.0, Color::BLACK, false).unwrap();
    let mut d = original.clone();
    d.flip(FlipAxis::Vertical).unwrap();
    d.flip(FlipAxis::Vertical).unwrap();
    for (a, b) in d.points().zip(original.points()) {
        assert!(a.abs_diff_eq(b, EPS), "{a:?} != {b:?}");
    }
}

#[test]
fn test_center_with_margin_fits_and_centers() {
    let targets = [
        Rect::new(DVec2::ZERO, DVec2::new(1999.0, 1999.0)),
        Rect::new(DVec2::new(10.0, 20.0), DVec2::new(810.0, 320.0)),
        Rect::new(DVec2::new(-50.0, -50.0), DVec2::new(50.0, 400.0)),
    ];
    for target in targets {
        for margin in [DVec2::splat(0.1), DVec2::new(0.05, 0.3)] {
            let mut d = sample();
            d.center_with_margin(target, margin).unwrap();
            let b = d.bounds().unwrap();

            let inner = Rect::new(
                target.min + margin * target.size(),
                target.max - margin * target.size(),
            );
            assert!(inner.contains_rect(&b, EPS), "{b:?} outside {inner:?}");
            assert!(b.center().abs_diff_eq(target.center(), EPS));

            // Uniform scale: one axis touches the inner rectangle.
            let fills_x = (b.width() - inner.width()).abs() < EPS;
            let fills_y = (b.height() - inner.height()).abs() < EPS;
            assert!(fills_x || fills_y);
        }
    }
}

#[test]
fn test_center_with_margin_preserves_aspect_ratio() {
    let mut d = sample();
    let before = d.bounds().unwrap();
    d.center_with_margin(Rect::new(DVec2::ZERO, DVec2::new(1000.0, 100.0)), DVec2::splat(0.1))
        .unwrap();
    let after = d.bounds().unwrap();
    let ratio = |r: &Rect| r.width() / r.height();
    assert!((ratio(&before) - ratio(&after)).abs() < EPS);
}

#[test]
fn test_center_with_margin_degenerate_extents() {
    let target = Canvas::square(101).bounds();

    // Horizontal line: zero height does not constrain the factor.
    let mut line = interpret("FF", 0.0, 90.0, Color::BLACK, false).unwrap();
    line.center_with_margin(target, DVec2::splat(0.1)).unwrap();
    let b = line.bounds().unwrap();
    assert!((b.width() - 80.0).abs() < EPS);
    assert!(b.center().abs_diff_eq(DVec2::splat(50.0), EPS));

    // Single point is only moved to the centre.
    let mut dot = Drawing::new();
    dot.move_to(DVec2::new(7.0, -3.0), Color::BLACK);
    dot.center_with_margin(target, DVec2::splat(0.1)).unwrap();
    assert_eq!(dot.paths[0].points[0], DVec2::splat(50.0));
}

#[test]
fn test_normalize_puts_first_step_upright() {
    // A vertical stroke drawn upward in y-up space ends at the top of the canvas.
    let mut d = interpret("FF", 90.0, 90.0, Color::BLACK, false).unwrap();
    let canvas = Canvas::square(1001);
    normalize(&mut d, &canvas).unwrap();
    let pts = &d.paths[0].points;
    assert!(pts[2].y < pts[0].y);
    assert!((pts[2].y - 100.0).abs() < EPS);
    assert!((pts[0].y - 900.0).abs() < EPS);
    assert!((pts[0].x - 500.0).abs() < EPS);
}

#[derive(Default)]
struct Counter {
    paths: usize,
    points: usize,
    last: Option<Point>,
}

impl DrawingVisitor for Counter {
    fn visit_path(&mut self, _path: &Path) {
        self.paths += 1;
    }

    fn visit_point(&mut self, point: Point) {
        self.points += 1;
        self.last = Some(point);
    }
}

#[test]
fn test_visitor_order() {
    let d = sample();
    let mut counter = Counter::default();
    d.accept(&mut counter);
    assert_eq!(counter.paths, 2);
    assert_eq!(counter.points, 4);
    assert_eq!(counter.last, Some(DVec2::new(2.0, 6.0)));
}

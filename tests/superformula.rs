#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use superformula::error::GeometryError;
use superformula::math::Point2;
use superformula::{Curve2d, PathCommand, Superformula, SuperformulaError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn flower() -> Superformula {
    Superformula::new(1.0, 1.0, 4.0, 2.0, 10.0, 10.0)
}

#[test]
fn flower_scenario() {
    let c = flower();
    assert_abs_diff_eq!(c.radius(0.0), 1.0, epsilon = 1e-12);

    let bb = c.bounding_box(4);
    assert_abs_diff_eq!(bb.min.x, -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bb.min.y, -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bb.max.x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bb.max.y, 1.0, epsilon = 1e-9);

    let path = c.path_approximation(32).unwrap();
    assert_eq!(path.len(), 33);
    assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
    assert!(path.commands()[1..]
        .iter()
        .all(|cmd| !matches!(cmd, PathCommand::MoveTo(_))));
}

#[test]
fn circle_scenario() {
    let c = Superformula::new(1.0, 1.0, 0.0, 1.0, 1.0, 1.0).with_scale(3.0);
    for i in 0..24_i32 {
        assert_abs_diff_eq!(c.radius(f64::from(i) * 0.3), 3.0, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(c.max_radius(32), 3.0, epsilon = 1e-12);
}

#[test]
fn arclength_endpoints_and_rewind() {
    init_tracing();
    let mut c = flower();

    let start = c.point_at_length(0.0).unwrap();
    assert_abs_diff_eq!(start, c.point(0.0), epsilon = 1e-12);

    let end = c.point_at_length(1.0).unwrap();
    assert_abs_diff_eq!(end, c.point(c.natural_period()), epsilon = 1e-9);

    c.point_at_length(0.8).unwrap();
    let rewound = c.point_at_length(0.2).unwrap();
    let fresh = flower().point_at_length(0.2).unwrap();
    assert_abs_diff_eq!(rewound, fresh, epsilon = 1e-12);
}

#[test]
fn arclength_samples_are_evenly_spaced() {
    let mut c = flower();
    let points: Vec<Point2> = (0..=64_i32)
        .map(|i| c.point_at_length(f64::from(i) / 64.0).unwrap())
        .collect();
    let gaps: Vec<f64> = points.windows(2).map(|w| (w[1] - w[0]).norm()).collect();
    let mean = gaps.iter().sum::<f64>() / 64.0;
    for gap in gaps {
        assert!((gap - mean).abs() < 0.1 * mean, "gap {gap} vs mean {mean}");
    }
}

#[test]
fn arclength_out_of_range() {
    let mut c = flower();
    let err = c.point_at_length(1.01).unwrap_err();
    assert!(matches!(
        err,
        SuperformulaError::Geometry(GeometryError::ParameterOutOfRange { .. })
    ));
    // A rejected query leaves the cached table usable.
    assert!(c.length_table().is_some());
    assert!(c.point_at_length(0.5).is_ok());
}

#[test]
fn degenerate_curve_arclength() {
    init_tracing();
    let mut c = flower().with_scale(0.0);
    let p = c.point_at_length(0.5).unwrap();
    assert_abs_diff_eq!(p, Point2::origin());
}

#[test]
fn svg_document_and_data_uri() {
    let c = flower();
    let svg = c.to_svg(32, Some("fill=\"red\"")).unwrap();
    assert!(svg.starts_with("<svg width=\"1024\" height=\"600\" viewBox=\""));
    assert!(svg.contains(&format!("d=\"{}\"", c.path_approximation(32).unwrap())));
    assert!(svg.contains("fill=\"red\"/></svg>"));

    let uri = c.to_svg_data_uri(32, Some("fill=\"red\"")).unwrap();
    let payload = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
    let decoded = String::from_utf8(BASE64.decode(payload).unwrap()).unwrap();
    assert_eq!(decoded, svg);
}

#[test]
fn zero_segments_is_rejected() {
    let err = flower().to_svg(0, None).unwrap_err();
    assert!(matches!(
        err,
        SuperformulaError::Geometry(GeometryError::InvalidArgument(_))
    ));
}

#[test]
fn curve_trait_domain_matches_period() {
    let c = Superformula::new(1.0, 1.0, 5.0, 2.0, 3.0, 7.0);
    let domain = c.domain();
    assert_abs_diff_eq!(domain.t_min, 0.0);
    assert_abs_diff_eq!(domain.t_max, c.natural_period());
    assert!(c.is_closed());
}

#[test]
fn path_numbers_round_ties_away_from_zero() {
    let c = Superformula::new(1.0, 1.0, 0.0, 1.0, 1.0, 1.0).with_scale(0.125);
    let path = c.path_approximation(4).unwrap().to_string();
    assert!(path.starts_with("M0.13,0.00c"), "{path}");
}

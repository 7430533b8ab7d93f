use approx::assert_relative_eq;
use svg::node::element::path::Data;
use svg2solid::errors::LoadError;
use svg2solid::path::data::path_from_data;
use svg2solid::path::points::parse_points;
use svg2solid::path::{Path, Segment};

fn parse(d: &str) -> Path {
    path_from_data(&Data::parse(d).unwrap()).unwrap()
}

#[test]
fn square_path_segments_and_positions() {
    let path = parse("M 0 0 L 10 0 L 10 10 L 0 10 Z");
    assert_eq!(path.segments().len(), 4);

    let start = path.position(0.0);
    assert_relative_eq!(start.x, 0.0);
    assert_relative_eq!(start.y, 0.0);

    // t=0.25 is the start of the second segment.
    let corner = path.position(0.25);
    assert_relative_eq!(corner.x, 10.0);
    assert_relative_eq!(corner.y, 0.0);

    // The close command returns to the sub-path start.
    let end = path.position(1.0);
    assert_relative_eq!(end.x, 0.0);
    assert_relative_eq!(end.y, 0.0);
}

#[test]
fn relative_commands_accumulate() {
    let path = parse("m 1 1 l 9 0 l 0 9 z");
    assert_eq!(path.segments().len(), 3);

    let after_first = path.position(1.0 / 3.0);
    assert_relative_eq!(after_first.x, 10.0);
    assert_relative_eq!(after_first.y, 1.0);
}

#[test]
fn horizontal_and_vertical_lines() {
    let path = parse("M 0 0 H 10 V 5 h -10 Z");
    assert_eq!(path.segments().len(), 4);

    let p = path.position(0.5);
    assert_relative_eq!(p.x, 10.0);
    assert_relative_eq!(p.y, 5.0);
}

#[test]
fn cubic_curve_midpoint() {
    let path = parse("M 0 0 C 0 10 10 10 10 0");
    assert_eq!(path.segments().len(), 1);

    let mid = path.position(0.5);
    assert_relative_eq!(mid.x, 5.0);
    assert_relative_eq!(mid.y, 7.5);
}

#[test]
fn quadratic_curve_midpoint() {
    let path = parse("M 0 0 Q 5 10 10 0");
    let mid = path.position(0.5);
    assert_relative_eq!(mid.x, 5.0);
    assert_relative_eq!(mid.y, 5.0);
}

#[test]
fn smooth_cubic_reflects_previous_control() {
    let path = parse("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0");
    assert_eq!(path.segments().len(), 2);

    match &path.segments()[1] {
        Segment::Cubic { control1, .. } => {
            // Reflection of (10, 10) about the current point (10, 0).
            assert_relative_eq!(control1.x, 10.0);
            assert_relative_eq!(control1.y, -10.0);
        },
        other => panic!("expected cubic segment, got {other:?}"),
    }
}

#[test]
fn arc_semicircle() {
    let path = parse("M 0 0 A 5 5 0 0 1 10 0");
    assert_eq!(path.segments().len(), 1);

    let end = path.position(1.0);
    assert_relative_eq!(end.x, 10.0, epsilon = 1e-9);
    assert_relative_eq!(end.y, 0.0, epsilon = 1e-9);

    // Sweep-positive semicircle around (5, 0) passes through (5, -5).
    let mid = path.position(0.5);
    assert_relative_eq!(mid.x, 5.0, epsilon = 1e-9);
    assert_relative_eq!(mid.y, -5.0, epsilon = 1e-9);
}

#[test]
fn command_before_move_is_rejected() {
    let data = Data::parse("L 10 0").unwrap();
    assert!(matches!(
        path_from_data(&data),
        Err(LoadError::MalformedPath(_))
    ));
}

#[test]
fn odd_parameter_count_is_rejected() {
    let data = Data::parse("M 0 0 L 10").unwrap();
    assert!(matches!(
        path_from_data(&data),
        Err(LoadError::MalformedPath(_))
    ));
}

#[test]
fn uniform_sampling_is_inclusive() {
    let path = parse("M 0 0 L 10 0 L 10 10 L 0 10 Z");
    let samples = path.sample(100);
    assert_eq!(samples.len(), 100);

    assert_relative_eq!(samples[0].x, 0.0);
    assert_relative_eq!(samples[0].y, 0.0);
    // The closed path ends where it started.
    assert_relative_eq!(samples[99].x, 0.0);
    assert_relative_eq!(samples[99].y, 0.0);
}

#[test]
fn points_attribute_with_commas_and_spaces() {
    let comma = parse_points("0,0 100,0 100,100").unwrap();
    assert_eq!(comma.len(), 3);
    assert_relative_eq!(comma[2].x, 100.0);
    assert_relative_eq!(comma[2].y, 100.0);

    let spaces = parse_points(" 0 0 100 0 100 100 ").unwrap();
    assert_eq!(spaces, comma);
}

#[test]
fn malformed_points_are_rejected() {
    assert!(matches!(
        parse_points("0,0 junk"),
        Err(LoadError::MalformedPoints(_))
    ));
    assert!(matches!(
        parse_points("0,0 10"),
        Err(LoadError::MalformedPoints(_))
    ));
    assert!(matches!(
        parse_points(""),
        Err(LoadError::MalformedPoints(_))
    ));
}

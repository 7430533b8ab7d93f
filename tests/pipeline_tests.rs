use approx::assert_relative_eq;
use std::fs;
use std::path::PathBuf;
use svg2solid::convert::{Dimensions, convert, svg_to_solid};
use svg2solid::errors::ConvertError;
use svg2solid::io::stl::from_stl;

const SQUARE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <path d="M 10 10 L 90 10 L 90 90 L 10 90 Z"/>
</svg>"#;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

fn write_svg(name: &str, content: &str) -> PathBuf {
    let path = temp_path(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn square_converts_to_requested_dimensions() {
    let input = write_svg("svg2solid_square.svg", SQUARE_SVG);
    let output = temp_path("svg2solid_square.stl");
    let dimensions = Dimensions::new(30.0, 20.0, 10.0);

    convert(&input, &dimensions, &output).unwrap();

    let bytes = fs::read(&output).unwrap();
    let solid = from_stl(&bytes).unwrap();
    let extents = solid.extents();
    assert_relative_eq!(extents.x, 30.0, epsilon = 1e-3);
    assert_relative_eq!(extents.y, 20.0, epsilon = 1e-3);
    assert_relative_eq!(extents.z, 10.0, epsilon = 1e-3);

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}

#[test]
fn conversion_is_idempotent() {
    let input = write_svg("svg2solid_idempotent.svg", SQUARE_SVG);
    let dimensions = Dimensions::new(30.0, 20.0, 10.0);

    let first = svg_to_solid(&input, &dimensions).unwrap();
    let second = svg_to_solid(&input, &dimensions).unwrap();

    assert_eq!(first.vertex_count(), second.vertex_count());
    assert_eq!(first.polygons.len(), second.polygons.len());
    let a = first.extents();
    let b = second.extents();
    assert_relative_eq!(a.x, b.x);
    assert_relative_eq!(a.y, b.y);
    assert_relative_eq!(a.z, b.z);

    let _ = fs::remove_file(&input);
}

#[test]
fn polygon_element_converts_too() {
    let markup = r#"<svg xmlns="http://www.w3.org/2000/svg">
      <polygon points="0,0 80,0 80,80 0,80"/>
    </svg>"#;
    let input = write_svg("svg2solid_polygon.svg", markup);
    let dimensions = Dimensions::new(30.0, 20.0, 10.0);

    let solid = svg_to_solid(&input, &dimensions).unwrap();
    let extents = solid.extents();
    assert_relative_eq!(extents.x, 30.0, epsilon = 1e-9);
    assert_relative_eq!(extents.y, 20.0, epsilon = 1e-9);
    assert_relative_eq!(extents.z, 10.0, epsilon = 1e-9);

    let _ = fs::remove_file(&input);
}

#[test]
fn ascii_stl_output_is_selected_by_extension() {
    let input = write_svg("svg2solid_ascii.svg", SQUARE_SVG);
    let output = temp_path("svg2solid_ascii.stla");
    let dimensions = Dimensions::new(30.0, 20.0, 10.0);

    convert(&input, &dimensions, &output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("solid "));
    assert!(text.trim_end().ends_with("endsolid svg2solid_ascii"));

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}

#[test]
fn svg_without_paths_is_a_geometry_error() {
    let input = write_svg(
        "svg2solid_empty.svg",
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#,
    );
    let dimensions = Dimensions::new(30.0, 20.0, 10.0);

    let result = svg_to_solid(&input, &dimensions);
    assert!(matches!(result, Err(ConvertError::Geometry(_))));

    let _ = fs::remove_file(&input);
}

#[test]
fn non_positive_dimension_fails_before_export() {
    let input = write_svg("svg2solid_negative.svg", SQUARE_SVG);
    let output = temp_path("svg2solid_negative.stl");
    let dimensions = Dimensions::new(30.0, 20.0, -10.0);

    let result = convert(&input, &dimensions, &output);
    assert!(matches!(result, Err(ConvertError::Scale(_))));
    assert!(!output.exists());

    let _ = fs::remove_file(&input);
}

#[test]
fn missing_input_is_a_load_error() {
    let dimensions = Dimensions::new(30.0, 20.0, 10.0);
    let result = svg_to_solid(
        std::path::Path::new("svg2solid_does_not_exist.svg"),
        &dimensions,
    );
    assert!(matches!(result, Err(ConvertError::Load(_))));
}

#[test]
fn unsupported_output_extension_is_an_export_error() {
    let input = write_svg("svg2solid_badext.svg", SQUARE_SVG);
    let output = temp_path("svg2solid_badext.obj");
    let dimensions = Dimensions::new(30.0, 20.0, 10.0);

    let result = convert(&input, &dimensions, &output);
    assert!(matches!(result, Err(ConvertError::Export(_))));

    let _ = fs::remove_file(&input);
}

use approx::assert_relative_eq;
use nalgebra::Point2;
use svg2solid::errors::ExportError;
use svg2solid::io::ExportFormat;
use svg2solid::io::stl::from_stl;
use svg2solid::io::svg::paths_from_svg;
use svg2solid::solid::extrude_outline;

fn box_solid() -> svg2solid::Solid {
    let square = [
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(2.0, 2.0),
        Point2::new(0.0, 2.0),
    ];
    extrude_outline(&square, 2.0).unwrap()
}

#[test]
fn solid_to_stl_ascii() {
    let stl_str = box_solid().to_stl_ascii("test_box");
    assert!(stl_str.contains("solid test_box"));
    assert!(stl_str.contains("endsolid test_box"));
    assert!(stl_str.contains("facet normal"));
    assert!(stl_str.contains("vertex"));
}

#[test]
fn binary_stl_round_trip() {
    let solid = box_solid();
    let bytes = solid.to_stl_binary("test_box").unwrap();

    let read_back = from_stl(&bytes).unwrap();
    // Every polygon comes back as one triangle.
    assert_eq!(read_back.polygons.len(), solid.triangle_count());

    let extents = read_back.extents();
    assert_relative_eq!(extents.x, 2.0, epsilon = 1e-4);
    assert_relative_eq!(extents.y, 2.0, epsilon = 1e-4);
    assert_relative_eq!(extents.z, 2.0, epsilon = 1e-4);
}

#[test]
fn dxf_export_produces_output() {
    let bytes = box_solid().to_dxf().unwrap();
    assert!(!bytes.is_empty());
}

#[test]
fn export_format_is_selected_by_extension() {
    use std::path::Path;

    assert_eq!(
        ExportFormat::from_path(Path::new("out.stl")).unwrap(),
        ExportFormat::BinaryStl
    );
    assert_eq!(
        ExportFormat::from_path(Path::new("out.STL")).unwrap(),
        ExportFormat::BinaryStl
    );
    assert_eq!(
        ExportFormat::from_path(Path::new("out.stla")).unwrap(),
        ExportFormat::AsciiStl
    );
    assert_eq!(
        ExportFormat::from_path(Path::new("out.dxf")).unwrap(),
        ExportFormat::Dxf
    );

    assert!(matches!(
        ExportFormat::from_path(Path::new("out.obj")),
        Err(ExportError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        ExportFormat::from_path(Path::new("out")),
        Err(ExportError::MissingExtension)
    ));
}

#[test]
fn svg_elements_become_paths() {
    let markup = r#"<svg xmlns="http://www.w3.org/2000/svg">
        <path d="M 0 0 L 10 0 L 10 10 Z"/>
        <polygon points="0,0 10,0 10,10"/>
        <polyline points="0,0 10,0"/>
        <rect x="1" y="1" width="8" height="8"/>
        <circle cx="5" cy="5" r="4"/>
        <ellipse cx="5" cy="5" rx="4" ry="2"/>
        <line x1="0" y1="0" x2="10" y2="10"/>
    </svg>"#;

    let paths = paths_from_svg(markup).unwrap();
    assert_eq!(paths.len(), 7);
}

#[test]
fn undrawable_elements_are_skipped() {
    let markup = r#"<svg xmlns="http://www.w3.org/2000/svg">
        <rect width="0" height="10"/>
        <circle cx="5" cy="5" r="0"/>
        <g fill="none"/>
        <text x="0" y="0">hi</text>
    </svg>"#;

    let paths = paths_from_svg(markup).unwrap();
    assert!(paths.is_empty());
}

#[test]
fn circle_bounding_box_from_samples() {
    let markup = r#"<svg xmlns="http://www.w3.org/2000/svg">
        <circle cx="50" cy="50" r="40"/>
    </svg>"#;

    let paths = paths_from_svg(markup).unwrap();
    assert_eq!(paths.len(), 1);

    let samples = paths[0].sample(100);
    assert_eq!(samples.len(), 100);

    let max_x = samples.iter().map(|p| p.x).fold(f64::MIN, f64::max);
    let min_x = samples.iter().map(|p| p.x).fold(f64::MAX, f64::min);
    // 100 samples around a circle stay within a fraction of a percent of
    // the true diameter.
    assert_relative_eq!(max_x - min_x, 80.0, epsilon = 0.1);
}

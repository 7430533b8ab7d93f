// main.rs
//
// Command-line front end for the SVG-to-solid pipeline:
//
//     svg2solid <svg_file> <height_mm> <depth_mm> <width_mm> <output_file>

use std::path::PathBuf;
use std::process::exit;

use svg2solid::convert::{Dimensions, convert};
use svg2solid::float_types::Real;

const USAGE: &str = "usage: svg2solid <svg_file> <height_mm> <depth_mm> <width_mm> <output_file>";

fn parse_mm(text: &str, name: &str) -> Result<Real, String> {
    text.parse::<Real>()
        .map_err(|_| format!("invalid value for <{name}>: {text}"))
}

fn usage_error(message: String) -> ! {
    eprintln!("svg2solid: {message}");
    eprintln!("{USAGE}");
    exit(2);
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 5 {
        eprintln!("{USAGE}");
        exit(2);
    }

    let input = PathBuf::from(&args[0]);
    let height = parse_mm(&args[1], "height_mm").unwrap_or_else(|e| usage_error(e));
    let depth = parse_mm(&args[2], "depth_mm").unwrap_or_else(|e| usage_error(e));
    let width = parse_mm(&args[3], "width_mm").unwrap_or_else(|e| usage_error(e));
    let output = PathBuf::from(&args[4]);

    let dimensions = Dimensions::new(width, depth, height);
    match convert(&input, &dimensions, &output) {
        Ok(()) => {
            println!("3D file created: {}", output.display());
            println!(
                "Dimensions: {}mm x {}mm x {}mm",
                dimensions.width, dimensions.depth, dimensions.height
            );
        },
        Err(error) => {
            eprintln!("svg2solid: {error}");
            exit(1);
        },
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use imgconv::{load, save, ImageFormat};

/// Convert a raster image between BMP, PPM, and JPEG.
#[derive(Parser)]
#[command(name = "imgconv", version, about)]
struct Args {
    /// Input image (.bmp, .ppm, .jpg/.jpeg)
    in_file: PathBuf,
    /// Output image (.bmp, .ppm, .jpg/.jpeg)
    out_file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if ImageFormat::from_path(&args.in_file).is_none() {
        eprintln!("unknown format of the input file");
        return ExitCode::from(2);
    }
    if ImageFormat::from_path(&args.out_file).is_none() {
        eprintln!("unknown format of the output file");
        return ExitCode::from(3);
    }

    let image = match load(&args.in_file) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("loading failed: {err}");
            return ExitCode::from(4);
        }
    };

    if let Err(err) = save(&args.out_file, &image) {
        eprintln!("saving failed: {err}");
        return ExitCode::from(5);
    }

    println!("successfully converted");
    ExitCode::SUCCESS
}

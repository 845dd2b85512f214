//! Convert an image between BMP, PPM and JPEG, by file extension.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use imgconv::{
    BmpPermissiveness, DEFAULT_JPEG_QUALITY, DecodeRequest, EncodeRequest, Image, ImageFormat,
    Unstoppable,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert images between BMP, PPM and JPEG", long_about = None)]
struct Args {
    /// Image to read (.bmp, .ppm, .jpg, .jpeg)
    input: PathBuf,

    /// Image to write; the extension selects the encoder
    output: PathBuf,

    /// Reject BMP input whose header fields disagree with its dimensions
    #[arg(long)]
    strict: bool,

    /// JPEG quality (1-100)
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,
}

// Exit codes
const BAD_ARGS: u8 = 1;
const UNKNOWN_INPUT: u8 = 2;
const UNKNOWN_OUTPUT: u8 = 3;
const LOAD_FAILED: u8 = 4;
const SAVE_FAILED: u8 = 5;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(BAD_ARGS)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let input_format = ImageFormat::from_path(&args.input);
    if input_format.codec().is_none() {
        eprintln!("Unknown format of the input file");
        return ExitCode::from(UNKNOWN_INPUT);
    }
    let output_format = ImageFormat::from_path(&args.output);
    if output_format.codec().is_none() {
        eprintln!("Unknown format of the output file");
        return ExitCode::from(UNKNOWN_OUTPUT);
    }

    let image = match load(&args.input, input_format, args.strict) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("Loading failed: {err:#}");
            return ExitCode::from(LOAD_FAILED);
        }
    };
    log::info!(
        "loaded {}x{} {input_format} from {}",
        image.width(),
        image.height(),
        args.input.display()
    );

    if let Err(err) = save(&args.output, output_format, args.quality, &image) {
        eprintln!("Saving failed: {err:#}");
        return ExitCode::from(SAVE_FAILED);
    }

    println!("Successfully converted");
    ExitCode::SUCCESS
}

fn load(path: &Path, format: ImageFormat, strict: bool) -> anyhow::Result<Image> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let permissiveness = if strict {
        BmpPermissiveness::Strict
    } else {
        BmpPermissiveness::Standard
    };
    let image = DecodeRequest::new(&data)
        .with_permissiveness(permissiveness)
        .decode(format, Unstoppable)
        .with_context(|| format!("decoding {format}"))?;
    Ok(image)
}

fn save(path: &Path, format: ImageFormat, quality: u8, image: &Image) -> anyhow::Result<()> {
    let bytes = EncodeRequest::new(format)
        .with_jpeg_quality(quality)
        .encode(image, Unstoppable)
        .with_context(|| format!("encoding {format}"))?;
    imgconv::file::write_encoded(path, &bytes)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

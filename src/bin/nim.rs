//! `nim`: convert images to and from the `.nim` container.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::{Level, debug, error, info, warn};
use zennim::{
    CompressionLevel, DecodeRequest, EncodeRequest, ImageInfo, NimError, Unstoppable,
    nim_file_name, normalize,
};

#[rustfmt::skip]
fn create_cmd_args() -> Command {
    Command::new("nim")
        .about("Convert images to and from the .nim container")
        .subcommand_required(true)
        .subcommand(Command::new("encode")
            .about("Convert a PNG/JPEG/GIF/WebP/BMP/TIFF image to .nim")
            .arg(Arg::new("in")
                .help("Input image")
                .value_parser(value_parser!(PathBuf))
                .required(true))
            .arg(Arg::new("out")
                .short('o')
                .long("output")
                .help("Output file, defaults to <input stem>.nim next to the input")
                .value_parser(value_parser!(PathBuf)))
            .arg(Arg::new("level")
                .long("level")
                .help("Deflate effort, 0 (store) to 10")
                .value_parser(value_parser!(u8).range(0..=10))
                .default_value("9")))
        .subcommand(Command::new("decode")
            .about("Convert a .nim file to an image; format follows the output extension")
            .arg(Arg::new("in")
                .help("Input .nim file")
                .value_parser(value_parser!(PathBuf))
                .required(true))
            .arg(Arg::new("out")
                .short('o')
                .long("output")
                .help("Output image, e.g. out.png")
                .value_parser(value_parser!(PathBuf))
                .required(true)))
        .subcommand(Command::new("info")
            .about("Print the header of a .nim file")
            .arg(Arg::new("in")
                .help("Input .nim file")
                .value_parser(value_parser!(PathBuf))
                .required(true)))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors only (default)"))
}

fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else {
        Level::Warn
    };
    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("could not initialize logger: {e}");
    }
    debug!("Log level: {log_level}");
}

fn path_arg<'a>(options: &'a ArgMatches, name: &str) -> Result<&'a PathBuf, NimError> {
    options
        .get_one::<PathBuf>(name)
        .ok_or_else(|| {
            NimError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("missing argument <{name}>"),
            ))
        })
}

fn default_output(input: &Path) -> PathBuf {
    let name = nim_file_name(&input.to_string_lossy());
    input.with_file_name(name)
}

fn run_encode(options: &ArgMatches) -> Result<(), NimError> {
    let input = path_arg(options, "in")?;
    let output = options
        .get_one::<PathBuf>("out")
        .cloned()
        .unwrap_or_else(|| default_output(input));
    let level = options.get_one::<u8>("level").copied().unwrap_or(9);

    let bytes = std::fs::read(input)?;
    let image = normalize(&bytes)?;
    let pixels = image.pixel_buffer()?;
    let mut request = EncodeRequest::new().with_compression(CompressionLevel::new(level));
    if let Some(profile) = &image.color_profile {
        request = request.with_profile(profile);
    }
    let nim = request.encode(&pixels, Unstoppable)?;
    std::fs::write(&output, &nim)?;
    info!(
        "Encoded {} -> {} ({}x{}, {} bytes)",
        input.display(),
        output.display(),
        image.width,
        image.height,
        nim.len()
    );
    Ok(())
}

fn run_decode(options: &ArgMatches) -> Result<(), NimError> {
    let input = path_arg(options, "in")?;
    let output = path_arg(options, "out")?;

    let bytes = std::fs::read(input)?;
    let decoded = DecodeRequest::new(&bytes).decode(Unstoppable)?;
    if let Some(profile) = decoded.color_profile() {
        warn!(
            "Dropping {}-byte color profile, output is written without it",
            profile.len()
        );
    }
    let (width, height) = (decoded.width, decoded.height);
    let img = image::RgbaImage::from_raw(width, height, decoded.into_pixels())
        .ok_or(NimError::DimensionsTooLarge { width, height })?;
    img.save(output).map_err(|e| NimError::Io(std::io::Error::other(e)))?;
    info!("Decoded {} -> {}", input.display(), output.display());
    Ok(())
}

fn run_info(options: &ArgMatches) -> Result<(), NimError> {
    let input = path_arg(options, "in")?;
    let bytes = std::fs::read(input)?;
    let info = ImageInfo::from_bytes(&bytes)?;
    let profile = match info.profile_len {
        Some(len) => format!("{len} bytes"),
        None => "none".to_string(),
    };
    println!("{}", input.display());
    println!("  dimensions:    {}x{}", info.width, info.height);
    println!("  color profile: {profile}");
    println!(
        "  pixel stream:  {} bytes compressed, {} bytes raw",
        bytes.len() - info.data_offset,
        info.pixel_bytes()?
    );
    Ok(())
}

fn main() -> ExitCode {
    let options = create_cmd_args().get_matches();
    setup_logger(&options);

    let result = match options.subcommand() {
        Some(("encode", sub)) => run_encode(sub),
        Some(("decode", sub)) => run_decode(sub),
        Some(("info", sub)) => run_info(sub),
        _ => unreachable!("subcommand_required is set"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Could not complete, reason: {e}");
            ExitCode::FAILURE
        }
    }
}

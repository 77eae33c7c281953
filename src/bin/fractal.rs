extern crate clap;
extern crate env_logger;
extern crate escapetime;
extern crate log;
extern crate num;
extern crate num_cpus;

use clap::{value_t, App, Arg, ArgMatches};
use escapetime::{FractalKind, IterationSpec, OutputSpec, RenderConfig, ViewportSpec};
use log::{debug, warn};
use num::Complex;
use std::str::FromStr;

fn validate_number<T: FromStr>(s: &str, isnotanumber_err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const FRACTAL: &str = "fractal";
const IMAGE_SIZE: &str = "image_size";
const IMAGE_NAME: &str = "image_name";
const OUTPUT_DIR: &str = "output_dir";
const MAXITER: &str = "maxiter";
const HORIZON: &str = "horizon";
const ZOOM_POINT_X: &str = "zoom_point_x";
const ZOOM_POINT_Y: &str = "zoom_point_y";
const ZOOM_FACTOR: &str = "zoom_factor";
const REAL_VALUE: &str = "real_value";
const IMAGINARY_VALUE: &str = "imaginary_value";
const THREADS: &str = "threads";

fn float_arg<'a>(name: &'a str, default: &'a str, help: &'a str, err: &'static str) -> Arg<'a, 'a> {
    Arg::with_name(name)
        .long(name)
        .takes_value(true)
        .allow_hyphen_values(true)
        .default_value(default)
        .validator(move |s| validate_number::<f64>(&s, err))
        .help(help)
}

fn args<'a>(default_threads: &'a str) -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("fractal")
        .version("0.1.0")
        .about("Smooth-shaded Mandelbrot and Julia set renderer")
        .arg(
            Arg::with_name(FRACTAL)
                .required(true)
                .possible_values(&["mandelbrot", "julia"])
                .help("The type of fractal you want"),
        )
        .arg(
            Arg::with_name(IMAGE_SIZE)
                .long(IMAGE_SIZE)
                .takes_value(true)
                .default_value("640")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::from(u16::max_value()),
                        "Could not parse image size",
                        "Image size must be between 1 and 65535",
                    )
                })
                .help("The size in pixels of the produced square image"),
        )
        .arg(
            Arg::with_name(IMAGE_NAME)
                .long(IMAGE_NAME)
                .takes_value(true)
                .help("The name of the output image; defaults to the current time"),
        )
        .arg(
            Arg::with_name(OUTPUT_DIR)
                .long(OUTPUT_DIR)
                .takes_value(true)
                .default_value("images")
                .help("Directory the image is written into"),
        )
        .arg(
            Arg::with_name(MAXITER)
                .long(MAXITER)
                .takes_value(true)
                .default_value("100")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        u32::max_value(),
                        "Could not parse iteration count",
                        "Iteration count must be at least 1",
                    )
                })
                .help("The maximal number of iterations"),
        )
        .arg(float_arg(
            HORIZON,
            "2",
            "The escape radius; must be greater than 1",
            "Could not parse horizon",
        ))
        .arg(float_arg(
            ZOOM_POINT_X,
            "0",
            "The real coordinate the image is centered on",
            "Could not parse zoom point x",
        ))
        .arg(float_arg(
            ZOOM_POINT_Y,
            "0",
            "The imaginary coordinate the image is centered on",
            "Could not parse zoom point y",
        ))
        .arg(float_arg(
            ZOOM_FACTOR,
            "1",
            "How much the fractal is magnified; must be greater than 0",
            "Could not parse zoom factor",
        ))
        .arg(float_arg(
            REAL_VALUE,
            "-0.8",
            "Julia only: real part of the constant",
            "Could not parse real value",
        ))
        .arg(float_arg(
            IMAGINARY_VALUE,
            "0.156",
            "Julia only: imaginary part of the constant",
            "Could not parse imaginary value",
        ))
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .takes_value(true)
                .default_value(default_threads)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the field generator"),
        )
        .get_matches()
}

fn config(matches: &ArgMatches) -> escapetime::Result<RenderConfig> {
    let f64_of = |name: &str| value_t!(matches, name, f64).unwrap_or_else(|e| e.exit());

    let kind = match matches.value_of(FRACTAL) {
        Some("julia") => {
            FractalKind::julia(Complex::new(f64_of(REAL_VALUE), f64_of(IMAGINARY_VALUE)))?
        }
        _ => {
            if matches.occurrences_of(REAL_VALUE) > 0 || matches.occurrences_of(IMAGINARY_VALUE) > 0 {
                warn!("--real_value and --imaginary_value only apply to julia; ignoring them");
            }
            FractalKind::Mandelbrot
        }
    };
    let iteration = IterationSpec::new(
        value_t!(matches, MAXITER, u32).unwrap_or_else(|e| e.exit()),
        f64_of(HORIZON),
    )?;
    let viewport = ViewportSpec::new(
        Complex::new(f64_of(ZOOM_POINT_X), f64_of(ZOOM_POINT_Y)),
        f64_of(ZOOM_FACTOR),
    )?;
    let output = OutputSpec::new(
        matches.value_of(OUTPUT_DIR).unwrap_or("images"),
        matches.value_of(IMAGE_NAME).map(String::from),
    );

    RenderConfig::new(
        kind,
        value_t!(matches, IMAGE_SIZE, usize).unwrap_or_else(|e| e.exit()),
        iteration,
        viewport,
        value_t!(matches, THREADS, usize).unwrap_or_else(|e| e.exit()),
        output,
    )
}

fn main() {
    env_logger::init();

    let default_threads = num_cpus::get().to_string();
    let matches = args(&default_threads);

    let config = match config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    debug!("{:?}", config);

    match escapetime::render(&config) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(path) => println!("{}", path.display()),
    }
}

extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn fractal() -> Command {
    Command::cargo_bin("fractal").unwrap()
}

#[test]
fn mandelbrot_lands_in_images() {
    let dir = tempdir().unwrap();
    fractal()
        .current_dir(dir.path())
        .args(&["mandelbrot", "--image_size", "12", "--image_name", "m", "--threads", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("m.png"));
    assert!(dir.path().join("images").join("m.png").is_file());
}

#[test]
fn julia_accepts_negative_constants_and_zoom() {
    let dir = tempdir().unwrap();
    fractal()
        .current_dir(dir.path())
        .args(&[
            "julia",
            "--image_size",
            "10",
            "--image_name",
            "j.png",
            "--real_value",
            "-0.7",
            "--imaginary_value",
            "0.27015",
            "--zoom_point_x",
            "-0.25",
            "--zoom_factor",
            "1.3",
            "--maxiter",
            "40",
            "--horizon",
            "3",
            "--threads",
            "1",
        ])
        .assert()
        .success();
    assert!(dir.path().join("images").join("j.png").is_file());
}

#[test]
fn unnamed_images_are_timestamped() {
    let dir = tempdir().unwrap();
    fractal()
        .current_dir(dir.path())
        .args(&["mandelbrot", "--image_size", "4", "--threads", "1"])
        .assert()
        .success();
    let names: Vec<String> = std::fs::read_dir(dir.path().join("images"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    // YYYY-MM-DD HH:MM:SS.png
    assert_eq!(names[0].len(), 23);
    assert!(names[0].ends_with(".png"));
}

#[test]
fn output_dir_is_configurable() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("renders");
    fractal()
        .args(&["mandelbrot", "--image_size", "4", "--image_name", "o", "--threads", "1"])
        .arg("--output_dir")
        .arg(&out)
        .assert()
        .success();
    assert!(out.join("o.png").is_file());
}

#[test]
fn unknown_fractal_is_rejected() {
    let dir = tempdir().unwrap();
    fractal()
        .current_dir(dir.path())
        .arg("burningship")
        .assert()
        .failure();
    assert!(!dir.path().join("images").exists());
}

#[test]
fn non_numeric_values_are_rejected() {
    fractal()
        .args(&["mandelbrot", "--maxiter", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse iteration count"));
    fractal()
        .args(&["julia", "--real_value", "minus-one"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse real value"));
}

#[test]
fn zero_zoom_is_a_configuration_error() {
    let dir = tempdir().unwrap();
    fractal()
        .current_dir(dir.path())
        .args(&["mandelbrot", "--zoom_factor", "0", "--threads", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zoom factor"));
    assert!(!dir.path().join("images").exists());
}

#[test]
fn horizon_must_exceed_one() {
    fractal()
        .args(&["mandelbrot", "--horizon", "1", "--threads", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("horizon"));
}

#[test]
fn zero_iterations_are_rejected() {
    fractal()
        .args(&["mandelbrot", "--maxiter", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn overflowing_horizon_and_zoom_are_rejected() {
    fractal()
        .args(&["mandelbrot", "--horizon", "1e200", "--threads", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("horizon"));
    fractal()
        .args(&["mandelbrot", "--zoom_factor", "1e-310", "--threads", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zoom factor"));
}

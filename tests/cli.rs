// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::prelude::*;
use image::{GenericImageView, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_card(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        let v = ((x * 29 + y * 53) % 256) as u8;
        Rgb([v, 255 - v, v / 2])
    })
    .save(path)
    .unwrap();
}

#[test]
fn carves_rows_and_columns() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_card(&input, 12, 9);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--rows", "2", "--cols", "5"])
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().dimensions(), (7, 7));
}

#[test]
fn enlarges_on_request() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_card(&input, 6, 5);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["-e", "-r", "3", "-c", "1"])
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().dimensions(), (7, 8));
}

#[test]
fn writes_the_energy_map() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("energy.png"));
    write_card(&input, 6, 5);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .arg("--energy")
        .assert()
        .success();

    let energy = image::open(&output).unwrap();
    assert_eq!(energy.dimensions(), (6, 5));
}

#[test]
fn refuses_to_carve_away_the_whole_image() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_card(&input, 4, 4);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--cols", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot carve 4 Vertical seam(s)"));

    assert!(!output.exists());
}

#[test]
fn reports_missing_input() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(dir.path().join("nowhere.png"))
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("seamcarve: "));
}

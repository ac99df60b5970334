// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use seamcarve::{calculate_energy, energy_to_image, increase_by_k, reduce_both, Orientation};

extern crate clap;
extern crate image;

use clap::{value_t, App, Arg, ArgMatches};
use failure::Error;
use log::{info, LevelFilter};
use std::process;

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();
    let rows = value_t!(matches, "rows", u32).unwrap_or_else(|e| e.exit());
    let cols = value_t!(matches, "cols", u32).unwrap_or_else(|e| e.exit());

    let image = image::open(input)?.to_rgb8();
    info!("read {} ({}x{})", input, image.width(), image.height());

    if matches.is_present("energy") {
        energy_to_image(&calculate_energy(&image)).save(output)?;
        info!("wrote energy map to {}", output);
        return Ok(());
    }

    let carved = if matches.is_present("enlarge") {
        let widened = increase_by_k(&image, cols, Orientation::Vertical)?;
        increase_by_k(&widened, rows, Orientation::Horizontal)?
    } else {
        reduce_both(&image, rows, cols)?
    };

    carved.save(output)?;
    info!("wrote {} ({}x{})", output, carved.width(), carved.height());
    Ok(())
}

fn main() {
    let matches = App::new("seamcarve")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the extension picks the format")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("rows")
                .short("r")
                .long("rows")
                .takes_value(true)
                .default_value("0")
                .help("Number of rows (horizontal seams) to carve"),
        )
        .arg(
            Arg::with_name("cols")
                .short("c")
                .long("cols")
                .takes_value(true)
                .default_value("0")
                .help("Number of columns (vertical seams) to carve"),
        )
        .arg(
            Arg::with_name("enlarge")
                .short("e")
                .long("enlarge")
                .help("Insert seams instead of removing them"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the energy map of the input instead of carving"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more; repeat for more detail"),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(err) = run(&matches) {
        eprintln!("seamcarve: {}", err);
        process::exit(1);
    }
}

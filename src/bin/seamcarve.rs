// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{crate_version, App, Arg, ArgMatches};
use failure::{format_err, Error, ResultExt};
use itertools::Itertools;
use log::{debug, info, LevelFilter};
use seamcarve::{calculate_energy, energy_to_image, to_pixel_grid, SeamCarver};
use std::process;
use std::time::Instant;

fn cli() -> App<'static, 'static> {
    App::new("seamcarve")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Shrink an image by carving out its least interesting seams")
        .arg(
            Arg::with_name("in")
                .long("in")
                .short("i")
                .value_name("FILE")
                .help("The image to carve")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .short("o")
                .value_name("FILE")
                .help("Where to write the carved image; the extension picks the format")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .short("w")
                .value_name("N")
                .help("Number of columns to remove")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .short("H")
                .value_name("N")
                .help("Number of rows to remove")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .value_name("FILE")
                .help("Also write the energy map of the input as a grayscale image")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more; repeat for more detail"),
        )
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn count(matches: &ArgMatches, name: &str) -> Result<u32, Error> {
    let raw = matches.value_of(name).unwrap_or("0");
    raw.parse::<u32>()
        .map_err(|_| format_err!("--{} expects a non-negative number, got {:?}", name, raw))
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = matches
        .value_of("in")
        .ok_or_else(|| format_err!("no input image given"))?;
    let output = matches
        .value_of("out")
        .ok_or_else(|| format_err!("no output image given"))?;
    let remove_width = count(matches, "width")?;
    let remove_height = count(matches, "height")?;

    let decoded = image::open(input).with_context(|_| format!("could not read {}", input))?;
    let grid = to_pixel_grid(&decoded);
    info!("read {} ({}x{})", input, grid.width(), grid.height());

    if let Some(path) = matches.value_of("energy") {
        let (energy, max_energy) = calculate_energy(&grid);
        energy_to_image(&energy, max_energy)
            .save(path)
            .with_context(|_| format!("could not write {}", path))?;
        info!("wrote energy map to {} (max energy {:.3})", path, max_energy);
    }

    let started = Instant::now();
    let carved = SeamCarver::new(&grid).carve(remove_width, remove_height)?;
    debug!(
        "removed {} columns and {} rows in {:?}",
        remove_width,
        remove_height,
        started.elapsed()
    );

    carved
        .save(output)
        .with_context(|_| format!("could not write {}", output))?;
    info!("wrote {} ({}x{})", output, carved.width(), carved.height());
    Ok(())
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.occurrences_of("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("seamcarve: {}", err.iter_chain().join(": "));
        process::exit(1);
    }
}

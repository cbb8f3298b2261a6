// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use failure::{format_err, Error};
use image::{GrayImage, Pixel, Rgb, RgbImage};
use log::info;
use seamerase::mask::blank_mask;
use seamerase::{
    highlight_seam, CarveConfig, Enlarger, FileMask, Gradient, MaskProvider, ObjectRemover,
    RectMask, SeamFinder, Termination,
};
use std::time::Instant;

fn load(path: &str) -> Result<RgbImage, Error> {
    Ok(image::open(path)?.to_rgb())
}

fn save(image: &RgbImage, path: &str) -> Result<(), Error> {
    image.save(path)?;
    info!("wrote {} ({}x{})", path, image.width(), image.height());
    Ok(())
}

fn parse_rect(spec: &str) -> Result<RectMask, Error> {
    let parts = spec
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [x, y, w, h] => Ok(RectMask::new(*x, *y, *w, *h)),
        _ => Err(format_err!("expected x,y,width,height, got '{}'", spec)),
    }
}

// A mask comes from a file, a rectangle, or (when optional) nowhere.
fn mask_from(
    matches: &ArgMatches,
    file: &str,
    rect: &str,
    image: &RgbImage,
) -> Result<Option<GrayImage>, Error> {
    if let Some(path) = matches.value_of(file) {
        return Ok(Some(FileMask::new(path).select_mask(image)?));
    }
    if let Some(spec) = matches.value_of(rect) {
        return Ok(Some(parse_rect(spec)?.select_mask(image)?));
    }
    Ok(None)
}

fn config_from(matches: &ArgMatches) -> Result<CarveConfig, Error> {
    let mut config = CarveConfig::default();
    if let Some(boundary) = matches.value_of("boundary") {
        config.boundary = boundary.parse().map_err(|e: String| format_err!("{}", e))?;
    }
    if let Some(overlap) = matches.value_of("overlap") {
        config.overlap = overlap.parse().map_err(|e: String| format_err!("{}", e))?;
    }
    if matches.is_present("until-clear") {
        config.termination = Termination::UntilClear;
    }
    Ok(config)
}

fn erase(matches: &ArgMatches) -> Result<(), Error> {
    let config = config_from(matches)?;
    let image = load(matches.value_of("image").unwrap_or_default())?;
    let (width, height) = image.dimensions();
    let delete = mask_from(matches, "delete-mask", "delete-rect", &image)?
        .ok_or_else(|| format_err!("one of --delete-mask or --delete-rect is required"))?;
    let protect = mask_from(matches, "protect-mask", "protect-rect", &image)?
        .unwrap_or_else(|| blank_mask(width, height));

    let start = Instant::now();
    let removal = ObjectRemover::new(config).remove(&image, &protect, &delete)?;
    save(&removal.image, matches.value_of("output").unwrap_or_default())?;
    if let Some(restored) = matches.value_of("restored") {
        let widened = Enlarger::new(config).restore_width(&removal.image, width)?;
        save(&widened, restored)?;
    }
    println!(
        "Removed {} seams in {:.3}s",
        removal.seams,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn enlarge(matches: &ArgMatches) -> Result<(), Error> {
    let config = config_from(matches)?;
    let image = load(matches.value_of("image").unwrap_or_default())?;
    let by: u32 = matches.value_of("by").unwrap_or("0").parse()?;
    let start = Instant::now();
    let enlarged = Enlarger::new(config).enlarge(&image, by)?;
    save(&enlarged, matches.value_of("output").unwrap_or_default())?;
    println!(
        "Added {} seams in {:.3}s",
        by,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn show_seam(matches: &ArgMatches) -> Result<(), Error> {
    let config = config_from(matches)?;
    let image = load(matches.value_of("image").unwrap_or_default())?;
    let seam = Gradient::new(&image, config.boundary).find_vertical_seam()?;
    let red: Rgb<u8> = *Rgb::from_slice(&[255, 0, 0]);
    save(&highlight_seam(&image, &seam, red)?, matches.value_of("output").unwrap_or_default())
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let image = Arg::with_name("image")
        .help("The image to carve")
        .required(true)
        .index(1);
    let output = Arg::with_name("output")
        .long("output")
        .short("o")
        .takes_value(true)
        .required(true)
        .help("Where to write the result");
    let boundary = Arg::with_name("boundary")
        .long("boundary")
        .takes_value(true)
        .possible_values(&["wrap", "clamp"])
        .help("How the gradient reads past the image border");

    let matches = App::new("seamerase")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Object removal by seam carving")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("erase")
                .about("Carve a masked object out of an image")
                .arg(image.clone())
                .arg(output.clone())
                .arg(boundary.clone())
                .arg(
                    Arg::with_name("delete-mask")
                        .long("delete-mask")
                        .takes_value(true)
                        .conflicts_with("delete-rect")
                        .help("Mask image of the object to remove"),
                )
                .arg(
                    Arg::with_name("delete-rect")
                        .long("delete-rect")
                        .takes_value(true)
                        .help("Rectangle x,y,width,height to remove"),
                )
                .arg(
                    Arg::with_name("protect-mask")
                        .long("protect-mask")
                        .takes_value(true)
                        .conflicts_with("protect-rect")
                        .help("Mask image of a region to keep"),
                )
                .arg(
                    Arg::with_name("protect-rect")
                        .long("protect-rect")
                        .takes_value(true)
                        .help("Rectangle x,y,width,height to keep"),
                )
                .arg(
                    Arg::with_name("overlap")
                        .long("overlap")
                        .takes_value(true)
                        .possible_values(&["protect", "delete", "reject"])
                        .help("Which mask wins where they overlap"),
                )
                .arg(
                    Arg::with_name("until-clear")
                        .long("until-clear")
                        .help("Carve until no masked pixel is left"),
                )
                .arg(
                    Arg::with_name("restored")
                        .long("restored")
                        .takes_value(true)
                        .help("Also write the image grown back to its original width"),
                ),
        )
        .subcommand(
            SubCommand::with_name("enlarge")
                .about("Widen an image by duplicating its cheapest seams")
                .arg(image.clone())
                .arg(output.clone())
                .arg(boundary.clone())
                .arg(
                    Arg::with_name("by")
                        .long("by")
                        .takes_value(true)
                        .required(true)
                        .help("Number of columns to add"),
                ),
        )
        .subcommand(
            SubCommand::with_name("seam")
                .about("Paint the cheapest seam of an image")
                .arg(image)
                .arg(output)
                .arg(boundary),
        )
        .get_matches();

    match matches.subcommand() {
        ("erase", Some(sub)) => erase(sub),
        ("enlarge", Some(sub)) => enlarge(sub),
        ("seam", Some(sub)) => show_seam(sub),
        _ => Ok(()),
    }
}

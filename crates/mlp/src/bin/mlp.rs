#![forbid(unsafe_code)]

use std::process::ExitCode;

use log::{error, info};
use mlp::{loader, logging, Error, MLP_SIZE};

const USAGE: &str = "Usage: mlp w1 w2 w3 w4 b1 b2 b3 b4 image [--json]";

fn main() -> ExitCode {
    logging::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");

    let paths = match <[String; 2 * MLP_SIZE + 1]>::try_from(args) {
        Ok(paths) => paths,
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&paths, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(paths: &[String; 2 * MLP_SIZE + 1], json: bool) -> Result<(), Error> {
    let [w1, w2, w3, w4, b1, b2, b3, b4, image_path] = paths;
    let network = loader::load_network(&[w1, w2, w3, w4], &[b1, b2, b3, b4])?;
    let mut image = loader::load_image(image_path)?;
    info!("network and image loaded");

    print!("{}", image.render());
    let digit = network.classify(&mut image)?;

    if json {
        match serde_json::to_string(&digit) {
            Ok(s) => println!("{s}"),
            Err(e) => error!("cannot encode result: {e}"),
        }
    } else {
        println!(
            "Mlp result: {} at probability: {}",
            digit.value, digit.probability
        );
    }
    Ok(())
}

extern crate clap;
extern crate path_data;

mod commands;
mod transform;

use clap::*;
use commands::*;
use transform::CliError;

use std::fs::File;
use std::io::prelude::*;
use std::io::stdout;
use std::process;

fn main() {
    env_logger::init();

    let matches = App::new("Path data command-line interface")
        .version("0.1")
        .about("Parses, converts and prints SVG path data")
        .subcommand(SubCommand::with_name("normalize")
            .about("Prints the path with single spaces and elided command letters")
        )
        .subcommand(SubCommand::with_name("absolute")
            .about("Converts every instruction to absolute coordinates")
        )
        .subcommand(SubCommand::with_name("relative")
            .about("Converts every instruction to relative coordinates")
        )
        .subcommand(SubCommand::with_name("positions")
            .about("Prints the start and end position of each instruction")
        )
        .arg(Arg::with_name("PATH")
            .value_name("PATH")
            .help("An SVG path")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use")
            .short("i")
            .long("input")
            .value_name("FILE")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .required(false)
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> std::result::Result<(), CliError> {
    let mut input_buffer = matches.value_of("PATH").unwrap_or("").to_string();

    if let Some(input_file) = matches.value_of("INPUT") {
        let mut file = File::open(input_file).map_err(|source| CliError::Open {
            path: input_file.to_string(),
            source,
        })?;
        file.read_to_string(&mut input_buffer)?;
    }

    let mut output: Box<dyn Write> = Box::new(stdout());
    if let Some(output_file) = matches.value_of("OUTPUT") {
        output = Box::new(File::create(output_file)?);
    }

    let action = match matches.subcommand_name() {
        Some("absolute") => Action::Absolute,
        Some("relative") => Action::Relative,
        Some("positions") => Action::Positions,
        _ => Action::Normalize,
    };

    let path = path_data::parse(&input_buffer)?;
    log::info!("Parsed {} instructions", path.len());

    transform::transform(PathCmd {
        path,
        action,
        output,
    })
}

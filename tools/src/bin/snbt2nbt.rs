use std::io::{Read, Write};

use clap::{App, Arg};
use env_logger::Env;
use log::{error, info};
use tagnbt::Writer;
use tagnbt_tools::{open_input, open_output, parse_compression, Result, COMPRESSIONS};
use tagsnbt::SnbtIo;

fn run() -> Result<()> {
    let matches = App::new("snbt2nbt")
        .about("Convert an SNBT compound into a binary NBT file")
        .arg(
            Arg::with_name("file")
                .help("SNBT file to read, - for stdin")
                .takes_value(true)
                .default_value("-"),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .help("Where to write the NBT, - for stdout")
                .takes_value(true)
                .default_value("-"),
        )
        .arg(
            Arg::with_name("compression")
                .long("compression")
                .takes_value(true)
                .possible_values(COMPRESSIONS)
                .default_value("gzip"),
        )
        .arg(
            Arg::with_name("name")
                .long("name")
                .help("Name of the root compound")
                .takes_value(true)
                .default_value("")
                .conflicts_with("nameless"),
        )
        .arg(
            Arg::with_name("nameless")
                .long("nameless")
                .help("Write the root without a name, as in network data")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Reject the legacy SNBT dialect")
                .takes_value(false),
        )
        .get_matches();

    let compression = matches
        .value_of("compression")
        .and_then(parse_compression)
        .unwrap_or_default();

    let mut text = String::new();
    open_input(matches.value_of("file").unwrap_or("-"))?.read_to_string(&mut text)?;

    let io = SnbtIo::builder()
        .accept_legacy(!matches.is_present("strict"))
        .build();
    let root = io.as_compound(&text)?;
    info!("parsed compound with {} entries", root.len());

    let mut out = open_output(matches.value_of("out").unwrap_or("-"))?;
    let writer = Writer::new();
    if matches.is_present("nameless") {
        writer.write_nameless(&mut out, &root, compression)?;
    } else {
        let name = matches.value_of("name").unwrap_or("");
        writer.write_named(&mut out, name, &root, compression)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

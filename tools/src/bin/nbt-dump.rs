use clap::{App, Arg};
use env_logger::Env;
use log::{error, info};
use tagnbt::Reader;
use tagnbt_tools::{open_input, parse_compression, Result, COMPRESSIONS};
use tagsnbt::SnbtIo;

fn run() -> Result<()> {
    let matches = App::new("nbt-dump")
        .about("Print a binary NBT file as SNBT or JSON")
        .arg(
            Arg::with_name("file")
                .help("NBT file to read, - for stdin")
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
            Arg::with_name("nameless")
                .long("nameless")
                .help("The root compound has no name, as in network data")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("max-bytes")
                .long("max-bytes")
                .help("Refuse input larger than this many bytes, 0 for no limit")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("indent")
                .long("indent")
                .takes_value(true)
                .default_value("2"),
        )
        .arg(
            Arg::with_name("legacy")
                .long("legacy")
                .help("Emit the legacy SNBT dialect")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print JSON rather than SNBT")
                .takes_value(false)
                .conflicts_with("legacy"),
        )
        .get_matches();

    let compression = matches
        .value_of("compression")
        .and_then(parse_compression)
        .unwrap_or_default();
    let max_bytes: i64 = matches.value_of("max-bytes").unwrap_or("0").parse()?;
    let indent: usize = matches.value_of("indent").unwrap_or("2").parse()?;

    let input = open_input(matches.value_of("file").unwrap_or("-"))?;
    let reader = Reader::with_max_bytes(max_bytes);
    let (name, root) = if matches.is_present("nameless") {
        (String::new(), reader.read_nameless(input, compression)?)
    } else {
        reader.read_named(input, compression)?
    };
    info!("root {:?} has {} entries", name, root.len());

    if matches.is_present("json") {
        let out = if indent > 0 {
            serde_json::to_string_pretty(&root)?
        } else {
            serde_json::to_string(&root)?
        };
        println!("{}", out);
        return Ok(());
    }

    let io = SnbtIo::builder()
        .indent(indent)
        .emit_legacy(matches.is_present("legacy"))
        .build();
    println!("{}", io.as_string(&root)?);
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

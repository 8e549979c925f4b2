use std::io::{self, Read, Write};

use clap::{App, Arg};
use env_logger::Env;
use log::{error, info};
use nbtree::{compression::Compression, decode_root_with_opts, DecodeOpts, Value};
use nbtree_tools::{dump, parse_path};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn read_input(path: &str) -> Result<Vec<u8>> {
    let mut buf = vec![];
    if path == "-" {
        io::stdin().read_to_end(&mut buf)?;
    } else {
        std::fs::File::open(path)?.read_to_end(&mut buf)?;
    }
    Ok(buf)
}

fn run(path: &str, select: Option<&str>, json: bool, opts: DecodeOpts) -> Result<()> {
    let data = read_input(path)?;
    info!("read {} bytes from {}", data.len(), path);

    let root = decode_root_with_opts(&data, opts)?;
    info!("decoded root '{}' with {} tags", root.name, root.len());

    let (name, value) = match select {
        Some(select) => {
            let names = parse_path(select);
            let value = root
                .path(&names)
                .ok_or_else(|| format!("nothing found at {}", select))?;
            (names.last().map(|s| s.to_string()), value.clone())
        }
        None => (Some(root.name.clone()), Value::Compound(root.compound)),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &value)?;
        writeln!(out)?;
    } else {
        dump(&mut out, &name, &value)?;
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt-dump")
        .about("Print the contents of an NBT file, gzipped or not")
        .arg(
            Arg::with_name("file")
                .help("file to read, - for stdin")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("path")
                .long("path")
                .help("dotted path of the tag to print, eg Data.Player")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .required(false),
        )
        .arg(
            Arg::with_name("raw")
                .long("raw")
                .help("input is not compressed, skip the gzip probe")
                .takes_value(false)
                .required(false),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .required(false)
                .default_value("512"),
        )
        .get_matches();

    let max_depth = match matches.value_of("max-depth").unwrap_or("512").parse() {
        Ok(depth) => depth,
        Err(e) => {
            error!("invalid --max-depth: {}", e);
            std::process::exit(2);
        }
    };

    let compression = match matches.is_present("raw") {
        true => Compression::None,
        false => Compression::Auto,
    };

    let opts = DecodeOpts::new()
        .max_depth(max_depth)
        .compression(compression);

    let path = matches.value_of("file").unwrap_or("-");
    if let Err(e) = run(path, matches.value_of("path"), matches.is_present("json"), opts) {
        error!("{}", e);
        std::process::exit(1);
    }
}

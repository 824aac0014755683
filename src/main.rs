use std::process;

use clap::Parser;
use leb128_codec::CliConfig;

fn main() {
    pretty_env_logger::init();

    let config = CliConfig::parse();

    if let Err(e) = leb128_codec::run(config) {
        eprintln!("Program error: {e}");
        process::exit(2);
    }
}

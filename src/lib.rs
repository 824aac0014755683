
pub mod byte_stream;
pub mod codec_error;
mod commands;
mod input_parsing;
pub mod integer_encoding;
pub mod program_config;

use std::error::Error;

use clap::{Parser as ClapParser, Subcommand};

use program_config::output_format::{ByteFormat, OutputOptions};

pub use byte_stream::{ByteSink, ByteSource};
pub use codec_error::{IntegerDecodingError, OverflowError};
pub use integer_encoding::{
    read_signed_int, read_unsigned_int, write_signed_int, write_unsigned_int,
};

#[derive(ClapParser, Debug)]
#[command(about = "Encode and decode 32-bit LEB128 varints")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: CliCommand,

    /// How encoded bytes are printed
    #[arg(long, value_enum, default_value_t = ByteFormat::Hex, global = true)]
    pub format: ByteFormat,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Encode integers (decimal or 0x hex) into bytes
    Encode {
        /// Apply the zig-zag transform for signed values
        #[arg(long)]
        signed: bool,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Decode one or more back-to-back encoded integers
    Decode {
        /// Undo the zig-zag transform after decoding
        #[arg(long)]
        signed: bool,
        /// Hex bytes, e.g. `0x80 0x01`, `80,01` or `8001`
        #[arg(required = true)]
        bytes: Vec<String>,
    },
}

pub fn run(config: CliConfig) -> Result<(), Box<dyn Error>> {
    let output_options = OutputOptions::construct(&config);

    let lines = match &config.command {
        CliCommand::Encode { signed, values } => {
            commands::encode_values(values, *signed, &output_options)?
        }
        CliCommand::Decode { signed, bytes } => commands::decode_values(bytes, *signed)?,
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

use clap::ValueEnum;

use crate::CliConfig;

/// How encoded bytes are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ByteFormat {
    /// `0x80`
    Hex,
    /// `0b1000_0000`
    Binary,
    /// `128`
    Decimal,
}

#[derive(Debug)]
pub struct OutputOptions {
    byte_format: ByteFormat,
}

impl OutputOptions {
    fn defaults() -> Self {
        OutputOptions {
            byte_format: ByteFormat::Hex,
        }
    }

    pub fn construct(cli_config: &CliConfig) -> Self {
        let mut output_options = OutputOptions::defaults();
        output_options.byte_format = cli_config.format;
        output_options
    }

    pub fn with_byte_format(byte_format: ByteFormat) -> Self {
        OutputOptions { byte_format }
    }

    pub fn format_byte(&self, byte: u8) -> String {
        match self.byte_format {
            ByteFormat::Hex => format!("{:#04x}", byte),
            ByteFormat::Binary => format!("0b{:04b}_{:04b}", byte >> 4, byte & 0x0F),
            ByteFormat::Decimal => byte.to_string(),
        }
    }

    pub fn format_bytes(&self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|b| self.format_byte(*b))
            .collect::<Vec<String>>()
            .join(" ")
    }
}

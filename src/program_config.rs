pub mod codec_constants;
pub mod output_format;

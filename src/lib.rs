pub mod audio;
pub mod config;
pub mod decoder;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod generator;
pub mod segment;
pub mod symbols;
pub mod timing;

pub use config::DecoderConfig;
pub use decoder::decode;
pub use error::DecodeError;
pub use generator::MorseGenerator;

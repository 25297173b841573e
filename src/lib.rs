//! Convert Audio Precision style timestamp/value exports into mono float WAV files.

pub mod audio;
pub mod convert;
pub mod error;
pub mod normalize;
pub mod rate;
pub mod samples;
pub mod wav_writer;

pub use convert::{convert, convert_with_progress, Config, Conversion, ConvertEvent};
pub use error::ConvertError;

pub mod detector;
pub mod error;
pub mod generator;

pub use detector::DetectorClient;
pub use error::{DetectorError, GeneratorError};
pub use generator::{DEFAULT_GENERATOR_URL, ImageGenerator};

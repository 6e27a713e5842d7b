pub mod config;
pub mod transcription;

pub use config::{AwsConfig, ConfigError};
pub use transcription::api::{AwsTranscribe, OutputLocation, TranscriptionResponse};
pub use transcription::request::{AudioFormat, TranscriptionRequest};
pub use transcription::PollConfig;

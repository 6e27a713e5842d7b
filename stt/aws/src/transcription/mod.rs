pub mod api;
mod aws_s3;
mod aws_signer;
mod aws_transcribe;
mod live;
pub mod request;

pub use aws_s3::{S3Client, S3Service};
pub use aws_transcribe::{
    AudioSegment, GetTranscriptionJobResponse, Media, PollConfig, Settings,
    StartTranscriptionJobRequest, StartTranscriptionJobResponse, TranscribeClient,
    TranscribeOutput, TranscribeResults, TranscribeService, Transcript, TranscriptText,
    TranscriptionJob,
};

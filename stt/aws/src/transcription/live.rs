use log::info;
use ovoz_stt::{error::Error, http::ReqwestHttpClient, runtime::TokioRuntime};
use uuid::Uuid;

use crate::config::AwsConfig;

use super::{
    api::{AwsTranscribe, OutputLocation},
    aws_s3::{S3Client, S3Service},
    aws_transcribe::{PollConfig, TranscribeClient},
};

impl AwsTranscribe<S3Client<ReqwestHttpClient>, TranscribeClient<ReqwestHttpClient, TokioRuntime>> {
    /// Builds the live client pair and creates the fresh bucket this
    /// instance owns. Each instance gets its own bucket; the bucket is
    /// never torn down.
    pub async fn live(
        config: &AwsConfig,
        language: String,
        output_location: OutputLocation,
        poll: PollConfig,
    ) -> Result<Self, Error> {
        let s3_client = S3Client::new(config, ReqwestHttpClient::default());
        let transcribe_client =
            TranscribeClient::new(config, ReqwestHttpClient::default(), TokioRuntime::new());

        let bucket_name = format!("bucket-{}", Uuid::new_v4().simple());
        info!("creating transcription bucket {bucket_name}");
        s3_client.create_bucket(&bucket_name).await?;

        Ok(Self::new(
            bucket_name,
            language,
            output_location,
            poll,
            s3_client,
            transcribe_client,
        ))
    }
}

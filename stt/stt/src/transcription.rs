use std::path::Path;

use crate::error::Error;

#[allow(async_fn_in_trait)]
pub trait SttProviderClient<REQ, RES, ERR: std::error::Error> {
    async fn transcribe_audio(&self, request: REQ) -> Result<RES, ERR>;
}

/// Single-capability interface over transcription providers: hand it a
/// local audio file, get back the ordered transcript segments.
#[allow(async_fn_in_trait)]
pub trait Transcriber {
    async fn transcribe(
        &self,
        audio_path: &Path,
        speaker_labeling: bool,
    ) -> Result<Vec<String>, Error>;
}

use std::path::Path;

/// Media formats AWS Transcribe accepts, see
/// https://docs.aws.amazon.com/transcribe/latest/APIReference/API_StartTranscriptionJob.html#transcribe-StartTranscriptionJob-request-MediaFormat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Amr,
    Flac,
    M4a,
    Mp3,
    Mp4,
    Ogg,
    Wav,
    Webm,
}

impl AudioFormat {
    /// Best-effort inference from the file extension. `None` lets the
    /// service detect the format itself.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "amr" => Some(AudioFormat::Amr),
            "flac" => Some(AudioFormat::Flac),
            "m4a" => Some(AudioFormat::M4a),
            "mp3" => Some(AudioFormat::Mp3),
            "mp4" => Some(AudioFormat::Mp4),
            "oga" | "ogg" => Some(AudioFormat::Ogg),
            "wav" => Some(AudioFormat::Wav),
            "webm" => Some(AudioFormat::Webm),
            _ => None,
        }
    }
}

impl core::fmt::Display for AudioFormat {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string_representation = match self {
            AudioFormat::Amr => "amr",
            AudioFormat::Flac => "flac",
            AudioFormat::M4a => "m4a",
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Mp4 => "mp4",
            AudioFormat::Ogg => "ogg",
            AudioFormat::Wav => "wav",
            AudioFormat::Webm => "webm",
        };
        write!(fmt, "{string_representation}")
    }
}

pub struct TranscriptionRequest {
    pub audio: Vec<u8>,
    pub format: Option<AudioFormat>,
    pub speaker_labeling: bool,
}

impl std::fmt::Debug for TranscriptionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptionRequest")
            .field("audio_size", &self.audio.len())
            .field("format", &self.format)
            .field("speaker_labeling", &self.speaker_labeling)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_inferred_from_extension() {
        assert_eq!(
            AudioFormat::from_path(Path::new("/tmp/sample.mp3")),
            Some(AudioFormat::Mp3)
        );
        assert_eq!(
            AudioFormat::from_path(Path::new("/tmp/SAMPLE.WAV")),
            Some(AudioFormat::Wav)
        );
        assert_eq!(
            AudioFormat::from_path(Path::new("/tmp/voice.oga")),
            Some(AudioFormat::Ogg)
        );
        assert_eq!(AudioFormat::from_path(Path::new("/tmp/sample.txt")), None);
        assert_eq!(AudioFormat::from_path(Path::new("/tmp/noextension")), None);
    }
}

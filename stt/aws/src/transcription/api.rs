use std::path::Path;

use log::info;
use ovoz_stt::{
    error::Error,
    languages::Language,
    transcription::{SttProviderClient, Transcriber},
};
use uuid::Uuid;

use super::{
    aws_s3::S3Service,
    aws_transcribe::{PollConfig, TranscribeOutput, TranscribeService, TranscriptionJob},
    request::{AudioFormat, TranscriptionRequest},
};

const AWS_TRANSCRIBE_SUPPORTED_LANGUAGES: [Language; 104] = [
    Language::new("ab-GE", "Abkhaz", "აფხაზური"),
    Language::new("af-ZA", "Afrikaans", "Afrikaans"),
    Language::new("ar-AE", "Arabic, Gulf", "العربية الخليجية"),
    Language::new("ar-SA", "Arabic, Modern Standard", "العربية الفصحى"),
    Language::new("hy-AM", "Armenian", "հայերեն"),
    Language::new("ast-ES", "Asturian", "asturianu"),
    Language::new("az-AZ", "Azerbaijani", "azərbaycan dili"),
    Language::new("ba-RU", "Bashkir", "башҡорт теле"),
    Language::new("eu-ES", "Basque", "euskera"),
    Language::new("be-BY", "Belarusian", "беларуская"),
    Language::new("bn-IN", "Bengali", "বাংলা"),
    Language::new("bs-BA", "Bosnian", "bosanski"),
    Language::new("bg-BG", "Bulgarian", "български"),
    Language::new("ca-ES", "Catalan", "català"),
    Language::new("ckb-IR", "Central Kurdish, Iran", "کوردیی ناوەندی"),
    Language::new("ckb-IQ", "Central Kurdish, Iraq", "کوردیی ناوەندی"),
    Language::new("zh-HK", "Chinese, Cantonese", "廣東話"),
    Language::new("zh-CN", "Chinese, Simplified", "中文（简体）"),
    Language::new("zh-TW", "Chinese, Traditional", "中文（繁體）"),
    Language::new("hr-HR", "Croatian", "hrvatski"),
    Language::new("cs-CZ", "Czech", "čeština"),
    Language::new("da-DK", "Danish", "dansk"),
    Language::new("nl-NL", "Dutch", "Nederlands"),
    Language::new("en-AU", "English, Australian", "English (Australia)"),
    Language::new("en-GB", "English, British", "English (United Kingdom)"),
    Language::new("en-IN", "English, Indian", "English (India)"),
    Language::new("en-IE", "English, Irish", "English (Ireland)"),
    Language::new("en-NZ", "English, New Zealand", "English (New Zealand)"),
    Language::new("en-AB", "English, Scottish", "English (Scotland)"),
    Language::new("en-ZA", "English, South African", "English (South Africa)"),
    Language::new("en-US", "English, US", "English (United States)"),
    Language::new("en-WL", "English, Welsh", "English (Wales)"),
    Language::new("et-EE", "Estonian", "eesti"),
    Language::new("et-ET", "Estonian", "eesti"),
    Language::new("fa-IR", "Farsi", "فارسی"),
    Language::new("fi-FI", "Finnish", "suomi"),
    Language::new("fr-FR", "French", "français"),
    Language::new("fr-CA", "French, Canadian", "français (Canada)"),
    Language::new("gl-ES", "Galician", "galego"),
    Language::new("ka-GE", "Georgian", "ქართული"),
    Language::new("de-DE", "German", "Deutsch"),
    Language::new("de-CH", "German, Swiss", "Deutsch (Schweiz)"),
    Language::new("el-GR", "Greek", "ελληνικά"),
    Language::new("gu-IN", "Gujarati", "ગુજરાતી"),
    Language::new("ha-NG", "Hausa", "Hausa"),
    Language::new("he-IL", "Hebrew", "עברית"),
    Language::new("hi-IN", "Hindi, Indian", "हिन्दी"),
    Language::new("hu-HU", "Hungarian", "magyar"),
    Language::new("is-IS", "Icelandic", "íslenska"),
    Language::new("id-ID", "Indonesian", "Bahasa Indonesia"),
    Language::new("it-IT", "Italian", "italiano"),
    Language::new("ja-JP", "Japanese", "日本語"),
    Language::new("kab-DZ", "Kabyle", "Taqbaylit"),
    Language::new("kn-IN", "Kannada", "ಕನ್ನಡ"),
    Language::new("kk-KZ", "Kazakh", "қазақ тілі"),
    Language::new("rw-RW", "Kinyarwanda", "Ikinyarwanda"),
    Language::new("ko-KR", "Korean", "한국어"),
    Language::new("ky-KG", "Kyrgyz", "кыргызча"),
    Language::new("lv-LV", "Latvian", "latviešu"),
    Language::new("lt-LT", "Lithuanian", "lietuvių"),
    Language::new("lg-IN", "Luganda", "Luganda"),
    Language::new("mk-MK", "Macedonian", "македонски"),
    Language::new("ms-MY", "Malay", "Bahasa Melayu"),
    Language::new("ml-IN", "Malayalam", "മലയാളം"),
    Language::new("mt-MT", "Maltese", "Malti"),
    Language::new("mr-IN", "Marathi", "मराठी"),
    Language::new("mhr-RU", "Meadow Mari", "олык марий"),
    Language::new("mn-MN", "Mongolian", "монгол"),
    Language::new("no-NO", "Norwegian Bokmål", "norsk"),
    Language::new("or-IN", "Odia/Oriya", "ଓଡ଼ିଆ"),
    Language::new("ps-AF", "Pashto", "پښتو"),
    Language::new("pl-PL", "Polish", "polski"),
    Language::new("pt-PT", "Portuguese", "português"),
    Language::new("pt-BR", "Portuguese, Brazilian", "português (Brasil)"),
    Language::new("pa-IN", "Punjabi", "ਪੰਜਾਬੀ"),
    Language::new("ro-RO", "Romanian", "română"),
    Language::new("ru-RU", "Russian", "русский"),
    Language::new("sr-RS", "Serbian", "српски"),
    Language::new("si-LK", "Sinhala", "සිංහල"),
    Language::new("sk-SK", "Slovak", "slovenčina"),
    Language::new("sl-SI", "Slovenian", "slovenščina"),
    Language::new("so-SO", "Somali", "Soomaali"),
    Language::new("es-ES", "Spanish", "español"),
    Language::new("es-US", "Spanish, US", "español (Estados Unidos)"),
    Language::new("su-ID", "Sundanese", "basa Sunda"),
    Language::new("sw-KE", "Swahili, Kenya", "Kiswahili (Kenya)"),
    Language::new("sw-BI", "Swahili, Burundi", "Kiswahili (Burundi)"),
    Language::new("sw-RW", "Swahili, Rwanda", "Kiswahili (Rwanda)"),
    Language::new("sw-TZ", "Swahili, Tanzania", "Kiswahili (Tanzania)"),
    Language::new("sw-UG", "Swahili, Uganda", "Kiswahili (Uganda)"),
    Language::new("sv-SE", "Swedish", "svenska"),
    Language::new("tl-PH", "Tagalog/Filipino", "Tagalog"),
    Language::new("ta-IN", "Tamil", "தமிழ்"),
    Language::new("tt-RU", "Tatar", "татарча"),
    Language::new("te-IN", "Telugu", "తెలుగు"),
    Language::new("th-TH", "Thai", "ไทย"),
    Language::new("tr-TR", "Turkish", "Türkçe"),
    Language::new("uk-UA", "Ukrainian", "українська"),
    Language::new("ug-CN", "Uyghur", "ئۇيغۇرچە"),
    Language::new("uz-UZ", "Uzbek", "oʻzbekcha"),
    Language::new("vi-VN", "Vietnamese", "Tiếng Việt"),
    Language::new("cy-WL", "Welsh", "Cymraeg"),
    Language::new("wo-SN", "Wolof", "Wolof"),
    Language::new("zu-ZA", "Zulu", "isiZulu"),
];

pub fn is_supported_language(language_code: &str) -> bool {
    AWS_TRANSCRIBE_SUPPORTED_LANGUAGES
        .iter()
        .any(|lang| lang.code == language_code)
}

pub fn supported_languages() -> &'static [Language] {
    &AWS_TRANSCRIBE_SUPPORTED_LANGUAGES
}

/// How the finished transcript document is located. The service reports a
/// `TranscriptFileUri` on the completed job; jobs with an output bucket
/// also land under the `{job_name}.json` key by convention. The URI is
/// authoritative, the key convention is kept as an explicit opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLocation {
    #[default]
    TranscriptUri,
    JobOutputKey,
}

pub struct AwsTranscribe<S3: S3Service, TC: TranscribeService> {
    bucket_name: String,
    language: String,
    output_location: OutputLocation,
    poll: PollConfig,
    s3_client: S3,
    transcribe_client: TC,
}

impl<S3: S3Service, TC: TranscribeService> AwsTranscribe<S3, TC> {
    pub fn new(
        bucket_name: String,
        language: String,
        output_location: OutputLocation,
        poll: PollConfig,
        s3_client: S3,
        transcribe_client: TC,
    ) -> Self {
        Self {
            bucket_name,
            language,
            output_location,
            poll,
            s3_client,
            transcribe_client,
        }
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    async fn fetch_transcript(
        &self,
        job_name: &str,
        completed_job: &TranscriptionJob,
    ) -> Result<TranscribeOutput, Error> {
        match self.output_location {
            OutputLocation::TranscriptUri => {
                let transcript =
                    completed_job
                        .transcript
                        .as_ref()
                        .ok_or_else(|| Error::APIUnknown {
                            request_id: job_name.to_string(),
                            provider_error: "Transcription completed but no transcript found"
                                .to_string(),
                        })?;

                let transcript_uri =
                    transcript
                        .transcript_file_uri
                        .as_ref()
                        .ok_or_else(|| Error::APIUnknown {
                            request_id: job_name.to_string(),
                            provider_error:
                                "Transcription completed but no transcript file URI found"
                                    .to_string(),
                        })?;

                self.transcribe_client
                    .download_transcript_json(job_name, transcript_uri)
                    .await
            }
            OutputLocation::JobOutputKey => {
                let object_key = format!("{job_name}.json");
                let body = self
                    .s3_client
                    .get_object(job_name, &self.bucket_name, &object_key)
                    .await?;

                let output: TranscribeOutput = serde_json::from_slice(&body)?;
                Ok(output)
            }
        }
    }
}

impl<S3: S3Service, TC: TranscribeService>
    SttProviderClient<TranscriptionRequest, TranscriptionResponse, Error> for AwsTranscribe<S3, TC>
{
    async fn transcribe_audio(
        &self,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionResponse, Error> {
        let source_key = format!("source-{}", Uuid::new_v4().simple());
        let job_name = format!("job-{}", Uuid::new_v4().simple());
        let audio_size_bytes = request.audio.len();

        if !is_supported_language(&self.language) {
            return Err(Error::APIBadRequest {
                request_id: job_name,
                provider_error: format!("Unsupported language code: {}", self.language),
            });
        }

        info!("uploading {audio_size_bytes} bytes as {source_key} for job {job_name}");
        self.s3_client
            .put_object(&job_name, &self.bucket_name, &source_key, request.audio)
            .await?;

        let media_uri = format!("s3://{}/{}", self.bucket_name, source_key);
        let media_format = request.format.map(|f| f.to_string());

        let res = self
            .transcribe_client
            .start_transcription_job(
                &job_name,
                &media_uri,
                media_format.as_deref(),
                &self.language,
                &self.bucket_name,
                request.speaker_labeling,
            )
            .await?;

        if res.transcription_job.transcription_job_status == "FAILED" {
            return Err(Error::JobFailed {
                request_id: job_name,
                provider_error: format!(
                    "Transcription job failed: {}",
                    res.transcription_job
                        .failure_reason
                        .as_deref()
                        .unwrap_or("Unknown error")
                ),
            });
        }

        info!("started transcription job {job_name}");
        let completed_job = if res.transcription_job.transcription_job_status == "COMPLETED" {
            res.transcription_job
        } else {
            self.transcribe_client
                .wait_for_transcription_job_completion(&job_name, &self.poll)
                .await?
                .transcription_job
        };

        let aws_transcription = self.fetch_transcript(&job_name, &completed_job).await?;

        Ok(TranscriptionResponse {
            job_name,
            language: self.language.clone(),
            audio_size_bytes,
            aws_transcription,
        })
    }
}

impl<S3: S3Service, TC: TranscribeService> Transcriber for AwsTranscribe<S3, TC> {
    async fn transcribe(
        &self,
        audio_path: &Path,
        speaker_labeling: bool,
    ) -> Result<Vec<String>, Error> {
        info!("transcribing {}", audio_path.display());

        let audio = tokio::fs::read(audio_path).await?;

        let request = TranscriptionRequest {
            audio,
            format: AudioFormat::from_path(audio_path),
            speaker_labeling,
        };

        let response = self.transcribe_audio(request).await?;

        Ok(response.aws_transcription.transcript_segments())
    }
}

#[allow(unused)]
#[derive(Debug, PartialEq)]
pub struct TranscriptionResponse {
    pub job_name: String,
    pub language: String,
    pub audio_size_bytes: usize,
    pub aws_transcription: TranscribeOutput,
}

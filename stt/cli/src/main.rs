use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;
use ovoz_stt::transcription::Transcriber;
use ovoz_stt_aws::{AwsConfig, AwsTranscribe, OutputLocation, PollConfig};

#[derive(Parser)]
#[command(name = "ovoz")]
#[command(about = "Transcribe an audio file with AWS Transcribe")]
#[command(version)]
struct Cli {
    /// Audio file to transcribe
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Audio file to transcribe (alternative to the positional form)
    #[arg(long, value_name = "FILE")]
    path: Option<PathBuf>,

    /// Language code of the recording
    #[arg(long, default_value = "uz-UZ")]
    language: String,

    /// Request speaker labels in the transcript
    #[arg(long)]
    speaker_labels: bool,

    /// How to locate the finished transcript document
    #[arg(long, value_enum, default_value_t = Locator::Uri)]
    locator: Locator,
}

#[derive(Clone, Copy, ValueEnum)]
enum Locator {
    /// Follow the transcript URI reported by the service
    Uri,
    /// Fetch the conventional `{job}.json` key from the job bucket
    Key,
}

impl From<Locator> for OutputLocation {
    fn from(locator: Locator) -> Self {
        match locator {
            Locator::Uri => OutputLocation::TranscriptUri,
            Locator::Key => OutputLocation::JobOutputKey,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let audio_path = match (cli.file, cli.path) {
        (Some(file), None) => file,
        (None, Some(path)) => path,
        (Some(_), Some(_)) => bail!("pass the audio file either positionally or via --path, not both"),
        (None, None) => bail!("no audio file given; pass it positionally or via --path"),
    };

    let config = AwsConfig::from_env().context("reading AWS credentials from the environment")?;
    debug!("using region {}", config.region);

    let transcriber = AwsTranscribe::live(
        &config,
        cli.language,
        cli.locator.into(),
        PollConfig::default(),
    )
    .await
    .context("creating transcription clients")?;

    let segments = transcriber
        .transcribe(&audio_path, cli.speaker_labels)
        .await
        .with_context(|| format!("transcribing {}", audio_path.display()))?;

    for segment in segments {
        println!("{segment}");
    }

    Ok(())
}

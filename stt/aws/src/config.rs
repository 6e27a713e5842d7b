use std::env;

const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
const ENV_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
const ENV_REGION: &str = "AWS_REGION";

const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug)]
pub enum ConfigError {
    MissingVar(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar(name) => {
                write!(fmt, "missing required environment variable {name}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Credentials and region for the S3 and Transcribe clients. Built by the
/// caller, typically from the environment; never embedded in source.
#[derive(Clone)]
pub struct AwsConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
    pub region: String,
}

impl AwsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_key_id =
            env::var(ENV_ACCESS_KEY_ID).map_err(|_| ConfigError::MissingVar(ENV_ACCESS_KEY_ID))?;
        let secret_access_key = env::var(ENV_SECRET_ACCESS_KEY)
            .map_err(|_| ConfigError::MissingVar(ENV_SECRET_ACCESS_KEY))?;
        let session_token = env::var(ENV_SESSION_TOKEN).ok().filter(|t| !t.is_empty());
        let region = env::var(ENV_REGION).unwrap_or_else(|_| DEFAULT_REGION.to_string());

        Ok(Self {
            access_key_id,
            secret_access_key,
            session_token,
            region,
        })
    }
}

impl std::fmt::Debug for AwsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsConfig")
            .field("access_key_id", &self.access_key_id)
            .field("session_token", &self.session_token.is_some())
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

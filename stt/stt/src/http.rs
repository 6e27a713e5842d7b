use std::time::Duration;

use derive_more::From;
use http::{Request, Response};
use url::Url;

#[allow(unused)]
#[derive(Debug, From)]
pub enum Error {
    #[from]
    HttpError(http::Error),
    #[from]
    Reqwest(reqwest::Error),
    #[from]
    Io(std::io::Error),
    Generic(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}

#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, Error>;
}

pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn new_with_timeout(connect_timeout: Duration, request_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .expect("Known valid client configuration");

        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn into_reqwest(request: Request<Vec<u8>>) -> Result<reqwest::Request, Error> {
    let (parts, body) = request.into_parts();

    let url = Url::parse(&parts.uri.to_string())
        .map_err(|e| Error::Generic(format!("invalid request uri: {e}")))?;

    let mut req = reqwest::Request::new(parts.method, url);
    *req.headers_mut() = parts.headers;
    *req.version_mut() = parts.version;
    *req.body_mut() = Some(body.into());

    Ok(req)
}

impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, Error> {
        let reqwest_request = into_reqwest(request)?;

        let reqwest_response = self.client.execute(reqwest_request).await?;

        let status = reqwest_response.status();
        let headers = reqwest_response.headers().clone();
        let body = reqwest_response.bytes().await?;

        let mut response = Response::builder().status(status).body(body.to_vec())?;

        *response.headers_mut() = headers;

        Ok(response)
    }
}

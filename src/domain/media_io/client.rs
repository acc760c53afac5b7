//! Media I/O sub-client — streaming upload/download against temporary
//! storage.

use crate::client::CrescendoClient;
use crate::error::SdkError;
use crate::http::request::RequestSpec;
use crate::http::retry::RetryPolicy;

use serde_json::{json, Value};
use std::path::Path;

pub struct MediaIo<'a> {
    pub(crate) client: &'a CrescendoClient,
}

impl<'a> MediaIo<'a> {
    /// Declare a `crs://` object and return the pre-signed URL to PUT the
    /// media file to.
    ///
    /// The object key is scoped to the account, so any alphanumeric key is
    /// collision-free.
    pub async fn upload_url(
        &self,
        access_token: &str,
        crs_url: &str,
    ) -> Result<String, SdkError> {
        let spec = RequestSpec::post(format!("{}/media/input", self.client.media_url))
            .bearer(access_token)
            .json(json!({ "url": crs_url }));

        let response = self
            .client
            .http
            .execute(spec, RetryPolicy::Transient)
            .await?;

        response
            .as_ref()
            .and_then(|body| body.get("url"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                SdkError::Other("media input response did not contain an upload url".to_string())
            })
    }

    /// Upload a local media file to a pre-signed URL, streaming from disk.
    pub async fn upload_file(&self, upload_url: &str, source: &Path) -> Result<(), SdkError> {
        self.client.http.upload(upload_url, source).await
    }

    /// Download a `crs://` object to a local file, streaming to disk.
    pub async fn download_file(
        &self,
        access_token: &str,
        crs_url: &str,
        destination: &Path,
    ) -> Result<(), SdkError> {
        let spec = RequestSpec::get(format!("{}/media/output", self.client.media_url))
            .bearer(access_token)
            .header("Accept", "application/octet-stream")
            .query("url", crs_url);

        self.client.http.download(spec, destination).await
    }
}

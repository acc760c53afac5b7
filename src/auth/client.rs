//! Auth sub-client — API token issuance.

use crate::auth::AccessToken;
use crate::client::CrescendoClient;
use crate::error::SdkError;
use crate::http::request::RequestSpec;
use crate::http::retry::RetryPolicy;

/// Sub-client for the token endpoint.
pub struct Auth<'a> {
    pub(crate) client: &'a CrescendoClient,
}

impl<'a> Auth<'a> {
    /// Exchange an app key/secret for a JWT API token.
    ///
    /// Every other endpoint authenticates with the returned token. The
    /// request is form-encoded with HTTP Basic credentials, per the OAuth
    /// client-credentials grant.
    ///
    /// `expires_in` is the token lifetime in seconds. The platform caps it
    /// at 86 400 (24 hours) and defaults to 1 800 (30 minutes).
    pub async fn api_token(
        &self,
        app_key: &str,
        app_secret: &str,
        expires_in: Option<u32>,
    ) -> Result<AccessToken, SdkError> {
        let mut fields = vec![(
            "grant_type".to_string(),
            "client_credentials".to_string(),
        )];
        if let Some(seconds) = expires_in {
            fields.push(("expires_in".to_string(), seconds.to_string()));
        }

        let spec = RequestSpec::post(format!("{}/auth/token", self.client.api_url))
            .basic(app_key, app_secret)
            .form(fields);

        self.client
            .http
            .execute_typed(spec, RetryPolicy::Transient)
            .await
    }
}

//! `reqwest`-backed implementation of the gateway traits.

use std::time::Duration;

use reqwest::{Client, Response};
use url::Url;

use crate::domain::medicine::Medicine;
use crate::domain::prescription::NewPrescription;
use crate::domain::session::Credentials;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::{AuthApi, MedicineApi, MedicineSearchQuery, PharmacyApi};
use crate::models::gateway::{
    CredentialsPayload, GatewayMessage, LoginResponse, SearchResponse, SubmitPrescriptionPayload,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the external gateway, shared across handlers.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Creates a client for the given gateway base URL.
    pub fn new(base_url: &str) -> GatewayResult<Self> {
        // `Url::join` drops the last path segment unless the base ends in '/'.
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> GatewayResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Turns a non-success response into a `Status` error, pulling the
    /// `message` field out of the body when one is present.
    async fn status_error(response: Response) -> GatewayError {
        let status = response.status().as_u16();
        let message = response
            .json::<GatewayMessage>()
            .await
            .ok()
            .and_then(|body| body.message);

        GatewayError::Status { status, message }
    }
}

impl AuthApi for HttpGateway {
    async fn register(&self, credentials: &Credentials) -> GatewayResult<()> {
        let url = self.endpoint("auth/v1/register")?;
        let payload = CredentialsPayload {
            username: &credentials.username,
            password: &credentials.password,
        };

        let response = self.client.post(url).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> GatewayResult<String> {
        let url = self.endpoint("auth/v1/login")?;
        let payload = CredentialsPayload {
            username: &credentials.username,
            password: &credentials.password,
        };

        let response = self.client.post(url).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let body: LoginResponse = response.json().await?;
        Ok(body.access_token)
    }
}

impl MedicineApi for HttpGateway {
    async fn search_medicines(
        &self,
        query: MedicineSearchQuery,
    ) -> GatewayResult<(usize, Vec<Medicine>)> {
        let url = self.endpoint("medicine/v1/search")?;

        // The gateway expects the page index as a string parameter.
        let page = query.page.to_string();
        let response = self
            .client
            .get(url)
            .query(&[("name", query.name.as_str()), ("page", page.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let body: SearchResponse = response.json().await?;
        if body.status != "Success" {
            return Err(GatewayError::Payload(format!(
                "search reported status {:?}",
                body.status
            )));
        }

        let medicines = body.data.into_iter().map(Medicine::from).collect();
        Ok((body.total_count, medicines))
    }
}

impl PharmacyApi for HttpGateway {
    async fn submit_prescription(
        &self,
        token: &str,
        prescription: &NewPrescription,
    ) -> GatewayResult<serde_json::Value> {
        let url = self.endpoint("pharmacy/v1/submit-prescription")?;
        let payload = SubmitPrescriptionPayload::from(prescription);

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        Ok(response.json().await?)
    }
}

use approval_desk_shared::{
    api::{ActionBody, ApiError, ListQuery, RequestAction, RequestApi},
    credential::CredentialStore,
};
#[cfg(not(feature = "mock"))]
use approval_desk_shared::credential::bearer_header;
use async_trait::async_trait;
#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, Response};

#[cfg(feature = "mock")]
use crate::models;
use crate::models::UserRequest;

/// Manager request endpoints over `fetch`.
///
/// Every call carries `Authorization: Bearer <token>` with the token read
/// from `credentials` at call time.
pub struct HttpRequestApi<C> {
    #[cfg_attr(feature = "mock", allow(dead_code, reason = "mock builds never leave the page"))]
    base: String,
    #[cfg_attr(feature = "mock", allow(dead_code, reason = "mock builds never leave the page"))]
    credentials: C,
}

impl<C: CredentialStore> HttpRequestApi<C> {
    pub fn new(base: impl Into<String>, credentials: C) -> Self {
        Self {
            base: base.into(),
            credentials,
        }
    }

    #[cfg(not(feature = "mock"))]
    fn authorization(&self) -> String {
        bearer_header(self.credentials.token().as_deref())
    }
}

#[cfg(not(feature = "mock"))]
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::from_status(status, &body)
}

#[async_trait(?Send)]
impl<C: CredentialStore> RequestApi for HttpRequestApi<C> {
    async fn list_requests(&self, query: &ListQuery) -> Result<Vec<UserRequest>, ApiError> {
        #[cfg(feature = "mock")]
        {
            return models::mock_list_requests(query);
        }

        #[cfg(not(feature = "mock"))]
        {
            let url = query.url(&self.base);
            let response = Request::get(&url)
                .header("Content-Type", "application/json")
                .header("Authorization", &self.authorization())
                .send()
                .await
                .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

            if !response.ok() {
                return Err(status_error(response).await);
            }

            response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("{:?}", e)))
        }
    }

    async fn send_action(&self, action: RequestAction, body: &ActionBody) -> Result<(), ApiError> {
        #[cfg(feature = "mock")]
        {
            return models::mock_send_action(action, body);
        }

        #[cfg(not(feature = "mock"))]
        {
            let url = action.url(&self.base);
            let response = Request::post(&url)
                .header("Content-Type", "application/json")
                .header("Authorization", &self.authorization())
                .json(body)
                .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?
                .send()
                .await
                .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

            // Only 200 counts; other 2xx codes are treated like failures.
            if response.status() != 200 {
                return Err(status_error(response).await);
            }
            Ok(())
        }
    }
}

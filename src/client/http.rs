//! HTTP client for the employee API

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ClientConfig, ClientError, ClientResult};
use crate::model::{Employee, EmployeeChanges};

/// The four record operations, as seen from the client.
///
/// Mutations resolve to the server's confirmation message.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn create(&self, employee: &Employee) -> ClientResult<String>;
    async fn list(&self) -> ClientResult<Vec<Employee>>;
    async fn update(&self, employee_id: &str, changes: &EmployeeChanges) -> ClientResult<String>;
    async fn delete(&self, employee_id: &str) -> ClientResult<String>;
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// Pulls `message` out of a JSON response body, if there is one.
pub(crate) fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%method, %url, "Sending request");
        self.client.request(method, url)
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status,
                message: server_message(&text),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn send_for_message(request: RequestBuilder) -> ClientResult<String> {
        Self::send::<MessageBody>(request).await.map(|b| b.message)
    }
}

/// Encodes an identifier as a single path segment.
fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[async_trait]
impl EmployeeApi for HttpClient {
    async fn create(&self, employee: &Employee) -> ClientResult<String> {
        Self::send_for_message(self.request(Method::POST, "addEmployee").json(employee)).await
    }

    async fn list(&self) -> ClientResult<Vec<Employee>> {
        Self::send(self.request(Method::GET, "getEmployees")).await
    }

    async fn update(&self, employee_id: &str, changes: &EmployeeChanges) -> ClientResult<String> {
        let path = format!("updateEmployee/{}", path_segment(employee_id));
        Self::send_for_message(self.request(Method::PUT, &path).json(changes)).await
    }

    async fn delete(&self, employee_id: &str) -> ClientResult<String> {
        let path = format!("deleteEmployee/{}", path_segment(employee_id));
        Self::send_for_message(self.request(Method::DELETE, &path)).await
    }
}

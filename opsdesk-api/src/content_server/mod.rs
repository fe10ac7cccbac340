pub mod fallback;
pub mod workspaces;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ContentServerConfig;

/// Failure classes for the remote content server. Callers branch on these:
/// some entity families degrade to local storage, the rest re-throw.
#[derive(Debug)]
pub enum ContentServerError {
    /// Network-level failure, the server never answered
    Unreachable(String),
    /// Server answered with a non-2xx status
    Status(u16, String),
    /// 2xx but the body did not decode
    InvalidResponse(String),
}

impl std::fmt::Display for ContentServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentServerError::Unreachable(msg) => {
                write!(f, "Content server unreachable: {}", msg)
            }
            ContentServerError::Status(code, text) => {
                write!(f, "Content server returned {}: {}", code, text)
            }
            ContentServerError::InvalidResponse(msg) => {
                write!(f, "Content server response invalid: {}", msg)
            }
        }
    }
}

impl std::error::Error for ContentServerError {}

/// HTTP client for the remote content server. Every request carries the
/// fixed Basic-Auth pair from the config; nothing is retried.
#[derive(Clone)]
pub struct ContentServerClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl ContentServerClient {
    pub fn new(config: &ContentServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check_status(response: &reqwest::Response) -> Result<(), ContentServerError> {
        let status = response.status();
        if !status.is_success() {
            let text = status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string();
            return Err(ContentServerError::Status(status.as_u16(), text));
        }
        Ok(())
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ContentServerError> {
        let response = self
            .http
            .get(self.url(path))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| ContentServerError::Unreachable(e.to_string()))?;

        Self::check_status(&response)?;

        response
            .json::<T>()
            .await
            .map_err(|e| ContentServerError::InvalidResponse(e.to_string()))
    }

    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ContentServerError> {
        let response = self
            .http
            .post(self.url(path))
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await
            .map_err(|e| ContentServerError::Unreachable(e.to_string()))?;

        Self::check_status(&response)?;

        response
            .json::<T>()
            .await
            .map_err(|e| ContentServerError::InvalidResponse(e.to_string()))
    }

    pub async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ContentServerError> {
        let response = self
            .http
            .put(self.url(path))
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await
            .map_err(|e| ContentServerError::Unreachable(e.to_string()))?;

        Self::check_status(&response)?;

        response
            .json::<T>()
            .await
            .map_err(|e| ContentServerError::InvalidResponse(e.to_string()))
    }

    pub async fn delete(&self, path: &str) -> Result<(), ContentServerError> {
        let response = self
            .http
            .delete(self.url(path))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| ContentServerError::Unreachable(e.to_string()))?;

        Self::check_status(&response)
    }

    /// Fetch a whole settings file, e.g. `project_data/category_colors.json`
    pub async fn download_json<T: DeserializeOwned>(
        &self,
        remote_path: &str,
    ) -> Result<T, ContentServerError> {
        let response = self
            .http
            .get(self.url("/api/files/download"))
            .query(&[("path", remote_path)])
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| ContentServerError::Unreachable(e.to_string()))?;

        Self::check_status(&response)?;

        response
            .json::<T>()
            .await
            .map_err(|e| ContentServerError::InvalidResponse(e.to_string()))
    }

    /// Re-upload a whole settings file as a multipart form, the only write
    /// primitive the file API offers
    pub async fn upload_json(
        &self,
        dir: &str,
        file_name: &str,
        document: &impl Serialize,
    ) -> Result<(), ContentServerError> {
        let body = serde_json::to_vec_pretty(document)
            .map_err(|e| ContentServerError::InvalidResponse(e.to_string()))?;

        let part = reqwest::multipart::Part::bytes(body)
            .file_name(file_name.to_string())
            .mime_str("application/json")
            .map_err(|e| ContentServerError::InvalidResponse(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.url("/api/files/upload"))
            .query(&[("path", dir)])
            .basic_auth(&self.username, Some(&self.password))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ContentServerError::Unreachable(e.to_string()))?;

        Self::check_status(&response)
    }
}

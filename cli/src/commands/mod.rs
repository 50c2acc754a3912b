//! CLI Commands

pub mod audit;
pub mod config;
pub mod frameworks;
pub mod items;
pub mod plans;
pub mod reports;

use serde::de::DeserializeOwned;

/// API client speaking the uniform response envelope
pub struct ApiClient {
    pub base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::unwrap_envelope(resp).await
    }

    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::unwrap_envelope(resp).await
    }

    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let resp = self
            .client
            .put(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::unwrap_envelope(resp).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), String> {
        let resp = self
            .client
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status().is_success() {
            Ok(())
        } else {
            let json: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
            Err(Self::error_message(&json))
        }
    }

    async fn unwrap_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, String> {
        let json: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        if json.get("success").and_then(|v| v.as_bool()) == Some(false) {
            return Err(Self::error_message(&json));
        }
        match json.get("data") {
            Some(data) => serde_json::from_value(data.clone()).map_err(|e| e.to_string()),
            None => serde_json::from_value(json).map_err(|e| e.to_string()),
        }
    }

    fn error_message(json: &serde_json::Value) -> String {
        json.pointer("/error/message")
            .and_then(|m| m.as_str())
            .unwrap_or("request failed")
            .to_string()
    }
}

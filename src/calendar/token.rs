use crate::config::Config;
use crate::error::{google_calendar_error, SyncResult};
use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use std::path::PathBuf;

/// Manages the cached Google OAuth token
///
/// The token JSON (access_token, refresh_token, expires_at) lives in
/// a local file. An expired token is refreshed against the Google
/// OAuth endpoint and written back; a missing token file means the
/// one-time manual authorization has not been done yet.
#[derive(Clone)]
pub struct TokenManager {
    token_path: PathBuf,
    client_id: String,
    client_secret: String,
    client: Client,
}

impl TokenManager {
    pub fn new(config: &Config) -> Self {
        Self {
            token_path: PathBuf::from(&config.token_path),
            client_id: config.google_client_id.clone(),
            client_secret: config.google_client_secret.clone(),
            client: Client::new(),
        }
    }

    /// Get an access token, refreshing the cached one if it expired
    pub async fn access_token(&self) -> SyncResult<String> {
        let token = self.load_token()?;

        if let Some(expiry) = token.get("expires_at").and_then(|v| v.as_i64()) {
            let now = Utc::now().timestamp();
            if expiry > now {
                return token
                    .get("access_token")
                    .and_then(|t| t.as_str())
                    .map(|t| t.to_string())
                    .ok_or_else(|| google_calendar_error("Token file missing 'access_token'"));
            }
        }

        // Token is expired or carries no expiry, refresh it
        let refreshed = self.refresh_token(&token).await?;
        refreshed
            .get("access_token")
            .and_then(|t| t.as_str())
            .map(|t| t.to_string())
            .ok_or_else(|| google_calendar_error("Refreshed token missing 'access_token'"))
    }

    fn load_token(&self) -> SyncResult<Value> {
        let token_str = std::fs::read_to_string(&self.token_path).map_err(|_| {
            google_calendar_error(&format!(
                "No token file at {}. Authorize the calendar once and save the token there.",
                self.token_path.display()
            ))
        })?;

        serde_json::from_str(&token_str)
            .map_err(|e| google_calendar_error(&format!("Failed to parse token JSON: {}", e)))
    }

    /// Refresh an expired token and write the result back to the cache
    async fn refresh_token(&self, token: &Value) -> SyncResult<Value> {
        let refresh_token = token
            .get("refresh_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| google_calendar_error("No refresh token in token data"))?;

        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ];

        let response = self
            .client
            .post("https://oauth2.googleapis.com/token")
            .form(&params)
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to refresh token: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to refresh token: HTTP {} - {}",
                status, error_body
            )));
        }

        let new_token: Value = response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse token response: {}", e)))?;

        let access_token = new_token
            .get("access_token")
            .cloned()
            .ok_or_else(|| google_calendar_error("Token response missing 'access_token' field"))?;

        // Combine the new access token with the existing refresh token
        let expires_in = new_token
            .get("expires_in")
            .and_then(|v| v.as_i64())
            .unwrap_or(3600);
        let token_json = json!({
            "access_token": access_token,
            "refresh_token": refresh_token,
            "expires_at": Utc::now().timestamp() + expires_in,
        });

        self.save_token(&token_json)?;

        Ok(token_json)
    }

    fn save_token(&self, token_json: &Value) -> SyncResult<()> {
        if let Some(parent) = self.token_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.token_path, token_json.to_string())?;
        Ok(())
    }
}

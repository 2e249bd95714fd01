//! Secure Token REST 클라이언트
//!
//! 리프레시 토큰을 새 ID 토큰/리프레시 토큰 쌍으로 교환하는 단일 책임의
//! 클라이언트입니다. Identity Toolkit과 달리 이 엔드포인트는
//! `application/x-www-form-urlencoded` 요청과 snake_case 응답을 사용합니다.

use crate::config::FirebaseConfig;
use crate::domain::dto::firebase::response::RefreshExchangeResponse;
use crate::errors::{AppError, AppResult};

/// Secure Token REST 클라이언트
pub struct SecureTokenClient {
    http: reqwest::Client,
}

impl SecureTokenClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// 리프레시 토큰을 새 토큰 쌍으로 교환합니다.
    ///
    /// 폐기되었거나 형식이 잘못된 토큰은 Firebase가 `TOKEN_EXPIRED`,
    /// `INVALID_REFRESH_TOKEN` 등으로 거부하며, 그 메시지가 400으로 전파됩니다.
    pub async fn refresh_token(&self, refresh_token: &str) -> AppResult<RefreshExchangeResponse> {
        let url = format!(
            "{}/token?key={}",
            FirebaseConfig::secure_token_base_url(),
            FirebaseConfig::api_key()
        );

        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ];

        let response = self
            .http
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Secure Token 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = super::extract_error_message(&body);
            log::warn!("Secure Token 거부: {}", message);
            return Err(AppError::ExternalServiceError(message));
        }

        response
            .json::<RefreshExchangeResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Secure Token 응답 해석 실패: {}", e)))
    }
}

impl Default for SecureTokenClient {
    fn default() -> Self {
        Self::new()
    }
}

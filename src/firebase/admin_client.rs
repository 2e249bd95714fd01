//! Identity Toolkit Admin REST 클라이언트
//!
//! 프로젝트 범위 경로(`projects/{project_id}/accounts:*`)의 관리용 엔드포인트를
//! 호출합니다. API 키 대신 서비스 계정의 OAuth2 액세스 토큰으로 인증하며,
//! 계정 조회(lookup)와 이메일 확인 상태 변경(update)에 사용됩니다.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::FirebaseConfig;
use crate::domain::dto::firebase::response::AccountLookupResponse;
use crate::domain::models::accounts::user_record::UserRecord;
use crate::errors::{AppError, AppResult};
use crate::firebase::credentials::FirebaseCredentials;

/// Identity Toolkit Admin REST 클라이언트
///
/// [`FirebaseCredentials`]를 공유하여 요청마다 캐시된 액세스 토큰을 사용합니다.
pub struct AdminClient {
    http: reqwest::Client,
    credentials: Arc<FirebaseCredentials>,
}

impl AdminClient {
    pub fn new(credentials: Arc<FirebaseCredentials>) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    /// 이메일로 계정 레코드를 조회합니다.
    ///
    /// # Errors
    ///
    /// 일치하는 계정이 없으면 [`AppError::NotFound`]를 반환합니다.
    pub async fn lookup_by_email(&self, email: &str) -> AppResult<UserRecord> {
        let response: AccountLookupResponse = self
            .post("lookup", json!({ "email": [email] }))
            .await?;

        first_user(response)
            .ok_or_else(|| AppError::NotFound(format!("계정을 찾을 수 없습니다: {}", email)))
    }

    /// uid로 계정 레코드를 조회합니다.
    ///
    /// 토큰 폐기 판정([`TokenVerifier`])이 `disabled` / `validSince` 확인에 사용합니다.
    ///
    /// [`TokenVerifier`]: crate::firebase::token_verifier::TokenVerifier
    pub async fn lookup_by_uid(&self, uid: &str) -> AppResult<UserRecord> {
        let response: AccountLookupResponse = self
            .post("lookup", json!({ "localId": [uid] }))
            .await?;

        first_user(response)
            .ok_or_else(|| AppError::NotFound(format!("계정을 찾을 수 없습니다: uid={}", uid)))
    }

    /// 계정의 이메일 확인 상태를 변경합니다.
    pub async fn set_email_verified(&self, uid: &str, verified: bool) -> AppResult<()> {
        self.post::<serde_json::Value>(
            "update",
            json!({
                "localId": uid,
                "emailVerified": verified,
            }),
        )
        .await?;

        log::info!("emailVerified={} 설정 완료: uid={}", verified, uid);
        Ok(())
    }

    /// 프로젝트 범위 `accounts:{action}` 엔드포인트로 Bearer 인증 POST를 보냅니다.
    async fn post<T: DeserializeOwned>(
        &self,
        action: &str,
        body: serde_json::Value,
    ) -> AppResult<T> {
        let url = format!(
            "{}/projects/{}/accounts:{}",
            FirebaseConfig::identity_base_url(),
            FirebaseConfig::project_id(),
            action
        );

        let access_token = self.credentials.access_token().await?;

        let response = self
            .http
            .post(&url)
            .bearer_auth(access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Admin API 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = super::extract_error_message(&body);
            log::warn!("Admin API 거부 (accounts:{}): {}", action, message);
            return Err(AppError::ExternalServiceError(message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Admin API 응답 해석 실패: {}", e)))
    }
}

/// lookup 응답에서 첫 번째 계정 레코드를 꺼냅니다.
///
/// Admin API는 일치하는 계정이 없으면 `users` 배열 자체를 생략합니다.
fn first_user(response: AccountLookupResponse) -> Option<UserRecord> {
    response.users.and_then(|mut users| {
        if users.is_empty() {
            None
        } else {
            Some(users.remove(0))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_user_returns_single_match() {
        let response: AccountLookupResponse = serde_json::from_value(serde_json::json!({
            "kind": "identitytoolkit#GetAccountInfoResponse",
            "users": [{ "localId": "uid-1", "email": "user@example.com" }]
        }))
        .unwrap();

        let record = first_user(response).unwrap();
        assert_eq!(record.local_id, "uid-1");
    }

    #[test]
    fn test_first_user_with_missing_users_array() {
        let response: AccountLookupResponse =
            serde_json::from_value(serde_json::json!({ "kind": "x" })).unwrap();

        assert!(first_user(response).is_none());
    }

    #[test]
    fn test_first_user_with_empty_users_array() {
        let response: AccountLookupResponse =
            serde_json::from_value(serde_json::json!({ "users": [] })).unwrap();

        assert!(first_user(response).is_none());
    }
}

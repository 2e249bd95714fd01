//! Firebase REST 클라이언트 모듈
//!
//! Rust용 공식 Firebase Admin SDK가 없으므로, 이 모듈이 문서화된 REST
//! 엔드포인트에 대한 얇은 클라이언트 역할을 합니다. 각 클라이언트는
//! 요청을 조립하고 응답을 타입으로 해석할 뿐, 재시도나 복구 로직은 없습니다.
//!
//! # 모듈 구성
//!
//! | 모듈 | 대상 API | 인증 방식 |
//! |------|----------|-----------|
//! | [`identity_client`] | Identity Toolkit (가입/로그인/OOB 코드) | API 키 |
//! | [`secure_token_client`] | Secure Token (토큰 갱신) | API 키 |
//! | [`admin_client`] | Identity Toolkit Admin (계정 조회/수정) | OAuth2 Bearer |
//! | [`credentials`] | OAuth2 토큰 발급 (JWT Bearer Grant) | 서비스 계정 키 |
//! | [`token_verifier`] | ID 토큰 검증 (JWKS, 로컬 수행) | 공개키 |
//!
//! # 에러 처리
//!
//! Firebase가 거부한 요청의 에러 메시지(`EMAIL_EXISTS`, `INVALID_OOB_CODE` 등)는
//! [`extract_error_message`]로 추출되어 [`AppError::ExternalServiceError`]에 담겨
//! 그대로 클라이언트에게 400으로 전달됩니다.
//!
//! [`AppError::ExternalServiceError`]: crate::errors::AppError::ExternalServiceError

pub mod admin_client;
pub mod credentials;
pub mod identity_client;
pub mod secure_token_client;
pub mod token_verifier;

pub use admin_client::AdminClient;
pub use credentials::FirebaseCredentials;
pub use identity_client::IdentityClient;
pub use secure_token_client::SecureTokenClient;
pub use token_verifier::TokenVerifier;

/// Firebase 에러 응답 본문에서 에러 메시지를 추출합니다.
///
/// Google API의 에러 본문은 `{"error": {"message": "EMAIL_EXISTS", ...}}` 형태입니다.
/// 해석할 수 없는 본문은 원문 그대로 반환하여 로그에서 추적할 수 있게 합니다.
pub(crate) fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|message| message.as_str())
                .map(|message| message.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_from_google_error_body() {
        let body = r#"{"error":{"code":400,"message":"EMAIL_EXISTS","errors":[]}}"#;
        assert_eq!(extract_error_message(body), "EMAIL_EXISTS");
    }

    #[test]
    fn test_extract_error_message_with_detail_text() {
        let body = r#"{"error":{"message":"INVALID_OOB_CODE"}}"#;
        assert_eq!(extract_error_message(body), "INVALID_OOB_CODE");
    }

    #[test]
    fn test_extract_error_message_falls_back_to_raw_body() {
        assert_eq!(extract_error_message("Service Unavailable"), "Service Unavailable");
        assert_eq!(extract_error_message(r#"{"status":"error"}"#), r#"{"status":"error"}"#);
    }
}

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::domain::models::token::decoded_token::DecodedIdToken;

/// 검증된 ID 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Firebase 사용자 고유 ID
    pub uid: String,

    /// 계정 이메일 (전화번호 가입 계정은 없을 수 있음)
    pub email: Option<String>,

    /// 이메일 소유 확인 여부
    pub email_verified: bool,

    /// 인증에 사용된 공급자 (예: "password", "google.com", "phone")
    pub sign_in_provider: Option<String>,
}

impl From<&DecodedIdToken> for AuthenticatedUser {
    fn from(token: &DecodedIdToken) -> Self {
        Self {
            uid: token.sub.clone(),
            email: token.email.clone(),
            email_verified: token.email_verified.unwrap_or(false),
            sign_in_provider: token.firebase.sign_in_provider.clone(),
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::token::decoded_token::FirebaseClaims;

    fn sample_token() -> DecodedIdToken {
        DecodedIdToken {
            aud: "my-project".to_string(),
            iss: "https://securetoken.google.com/my-project".to_string(),
            sub: "uid-1".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_003_600,
            auth_time: 1_700_000_000,
            email: Some("user@example.com".to_string()),
            email_verified: Some(true),
            phone_number: None,
            picture: None,
            firebase: FirebaseClaims {
                sign_in_provider: Some("password".to_string()),
            },
        }
    }

    #[test]
    fn test_authenticated_user_from_decoded_token() {
        let token = sample_token();
        let user = AuthenticatedUser::from(&token);

        assert_eq!(user.uid, "uid-1");
        assert_eq!(user.email.as_deref(), Some("user@example.com"));
        assert!(user.email_verified);
        assert_eq!(user.sign_in_provider.as_deref(), Some("password"));
    }

    #[test]
    fn test_missing_email_verified_defaults_to_false() {
        let mut token = sample_token();
        token.email_verified = None;

        let user = AuthenticatedUser::from(&token);
        assert!(!user.email_verified);
    }
}

//! Firebase REST API 응답 DTO 모듈
//!
//! Identity Toolkit, Secure Token, OAuth2 토큰 엔드포인트가 반환하는
//! 응답 본문을 표현합니다. Identity Toolkit은 camelCase 키를,
//! Secure Token과 OAuth2 토큰 엔드포인트는 snake_case 키를 사용합니다.

use serde::Deserialize;

/// 이메일/비밀번호 계열 엔드포인트 응답
///
/// `accounts:signUp`과 `accounts:signInWithPassword`가 반환하는 데이터입니다.
/// 회원가입 응답에는 `displayName`이 빠질 수 있으므로 Option으로 둡니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    /// Firebase 사용자 고유 ID (uid)
    pub local_id: String,
    /// Firebase ID 토큰
    pub id_token: String,
    /// 리프레시 토큰
    pub refresh_token: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    /// 토큰 만료 시간 (초 단위 문자열)
    #[serde(default)]
    pub expires_in: Option<String>,
}

/// `accounts:signInWithIdp` 응답
///
/// 소셜 공급자가 전달한 프로필 정보가 함께 내려오며,
/// 신규 사용자 프로필 문서 초기화에 사용됩니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdpSignInResponse {
    pub local_id: String,
    pub id_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// 공급자 계정에 연결된 전화번호
    #[serde(default)]
    pub phone_number: Option<String>,
    /// 인증에 사용된 공급자 식별자 (예: "google.com")
    #[serde(default)]
    pub provider_id: Option<String>,
}

/// `accounts:signInWithPhoneNumber` 응답
///
/// 사용자 식별은 응답의 부가 필드 대신 ID 토큰 디코딩으로 수행하므로
/// 토큰 쌍만 필수로 취급합니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneSignInResponse {
    pub id_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// `accounts:resetPassword` 응답 (코드 조회/확정 공통)
///
/// `oobCode`만 보내면 코드를 소모하지 않고 메타데이터를 조회할 수 있습니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCodeInfo {
    /// 코드가 발급된 작업 유형 ("PASSWORD_RESET", "VERIFY_EMAIL" 등)
    pub request_type: String,
    /// 코드가 발급된 계정의 이메일
    #[serde(default)]
    pub email: Option<String>,
}

/// Secure Token API `token` 엔드포인트 응답
///
/// 이 엔드포인트만 snake_case 키를 반환합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshExchangeResponse {
    /// 새로 발급된 ID 토큰
    pub id_token: String,
    /// 새로 발급된 리프레시 토큰 (회전될 수 있음)
    pub refresh_token: String,
}

/// Admin API `accounts:lookup` 응답
///
/// 일치하는 계정이 없으면 `users` 배열 자체가 생략됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountLookupResponse {
    #[serde(default)]
    pub users: Option<Vec<crate::domain::models::accounts::user_record::UserRecord>>,
}

/// Google OAuth2 토큰 엔드포인트 응답
///
/// 서비스 계정의 JWT Bearer 교환으로 받는 액세스 토큰입니다.
#[derive(Debug, Deserialize)]
pub struct OAuth2TokenResponse {
    pub access_token: String,
    /// 토큰 수명 (초)
    pub expires_in: i64,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_response_parses_identity_toolkit_payload() {
        let json = serde_json::json!({
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "uid-1",
            "email": "user@example.com",
            "displayName": "홍길동",
            "idToken": "id-token",
            "registered": true,
            "refreshToken": "refresh-token",
            "expiresIn": "3600"
        });

        let response: SignInResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.local_id, "uid-1");
        assert_eq!(response.id_token, "id-token");
        assert_eq!(response.expires_in.as_deref(), Some("3600"));
    }

    #[test]
    fn test_sign_up_response_without_display_name() {
        let json = serde_json::json!({
            "kind": "identitytoolkit#SignupNewUserResponse",
            "localId": "uid-2",
            "email": "new@example.com",
            "idToken": "id-token",
            "refreshToken": "refresh-token",
            "expiresIn": "3600"
        });

        let response: SignInResponse = serde_json::from_value(json).unwrap();
        assert!(response.display_name.is_none());
    }

    #[test]
    fn test_idp_sign_in_response_carries_profile_fields() {
        let json = serde_json::json!({
            "localId": "uid-3",
            "idToken": "id-token",
            "refreshToken": "refresh-token",
            "email": "social@example.com",
            "displayName": "소셜 사용자",
            "photoUrl": "https://example.com/me.png",
            "phoneNumber": "+821012345678",
            "providerId": "google.com"
        });

        let response: IdpSignInResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.provider_id.as_deref(), Some("google.com"));
        assert_eq!(
            response.photo_url.as_deref(),
            Some("https://example.com/me.png")
        );
        assert_eq!(response.phone_number.as_deref(), Some("+821012345678"));
    }

    #[test]
    fn test_idp_sign_in_response_without_phone_number() {
        let json = serde_json::json!({
            "localId": "uid-4",
            "idToken": "id-token",
            "refreshToken": "refresh-token"
        });

        let response: IdpSignInResponse = serde_json::from_value(json).unwrap();
        assert!(response.phone_number.is_none());
    }

    #[test]
    fn test_action_code_info_parses_reset_probe() {
        let json = serde_json::json!({
            "kind": "identitytoolkit#ResetPasswordResponse",
            "email": "user@example.com",
            "requestType": "PASSWORD_RESET"
        });

        let info: ActionCodeInfo = serde_json::from_value(json).unwrap();
        assert_eq!(info.request_type, "PASSWORD_RESET");
        assert_eq!(info.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_refresh_exchange_response_uses_snake_case_keys() {
        let json = serde_json::json!({
            "access_token": "ignored",
            "expires_in": "3600",
            "token_type": "Bearer",
            "refresh_token": "new-refresh",
            "id_token": "new-id",
            "user_id": "uid-1",
            "project_id": "1234567890"
        });

        let response: RefreshExchangeResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.id_token, "new-id");
        assert_eq!(response.refresh_token, "new-refresh");
    }

    #[test]
    fn test_account_lookup_response_without_matches() {
        let json = serde_json::json!({ "kind": "identitytoolkit#GetAccountInfoResponse" });

        let response: AccountLookupResponse = serde_json::from_value(json).unwrap();
        assert!(response.users.is_none());
    }
}

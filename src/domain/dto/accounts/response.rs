//! 계정 관련 응답 DTO
//!
//! 클라이언트로 내려가는 응답 본문을 정의합니다.
//! 모바일/웹 클라이언트와의 호환을 위해 camelCase 키를 사용합니다.

use serde::Serialize;

use crate::domain::dto::firebase::response::{
    IdpSignInResponse, PhoneSignInResponse, RefreshExchangeResponse, SignInResponse,
};
use crate::domain::models::accounts::user_record::UserRecord;

/// 액세스/리프레시 토큰 쌍 응답
///
/// 로그인 계열 엔드포인트와 토큰 갱신 엔드포인트의 공통 응답 형식입니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    /// Firebase ID 토큰 (이후 요청의 Bearer 토큰으로 사용)
    pub access_token: String,
    /// 만료 시 새 토큰 쌍으로 교환할 수 있는 리프레시 토큰
    pub refresh_token: String,
}

impl From<SignInResponse> for TokenPairResponse {
    fn from(response: SignInResponse) -> Self {
        Self {
            access_token: response.id_token,
            refresh_token: response.refresh_token,
        }
    }
}

impl From<IdpSignInResponse> for TokenPairResponse {
    fn from(response: IdpSignInResponse) -> Self {
        Self {
            access_token: response.id_token,
            refresh_token: response.refresh_token,
        }
    }
}

impl From<PhoneSignInResponse> for TokenPairResponse {
    fn from(response: PhoneSignInResponse) -> Self {
        Self {
            access_token: response.id_token,
            refresh_token: response.refresh_token,
        }
    }
}

impl From<RefreshExchangeResponse> for TokenPairResponse {
    fn from(response: RefreshExchangeResponse) -> Self {
        Self {
            access_token: response.id_token,
            refresh_token: response.refresh_token,
        }
    }
}

/// Firebase 계정 레코드 응답
///
/// 이메일 확인 완료 후 갱신된 계정 상태를 내려줄 때 사용합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecordResponse {
    pub uid: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub phone_number: Option<String>,
    pub disabled: bool,
}

impl From<UserRecord> for AccountRecordResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            uid: record.local_id,
            email: record.email,
            email_verified: record.email_verified,
            display_name: record.display_name,
            photo_url: record.photo_url,
            phone_number: record.phone_number,
            disabled: record.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pair_serializes_with_camel_case_keys() {
        let pair = TokenPairResponse {
            access_token: "id-token".to_string(),
            refresh_token: "refresh-token".to_string(),
        };

        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["accessToken"], "id-token");
        assert_eq!(json["refreshToken"], "refresh-token");
    }

    #[test]
    fn test_token_pair_from_sign_in_response() {
        let response = SignInResponse {
            local_id: "uid-1".to_string(),
            id_token: "id-token".to_string(),
            refresh_token: "refresh-token".to_string(),
            email: Some("user@example.com".to_string()),
            display_name: None,
            expires_in: Some("3600".to_string()),
        };

        let pair = TokenPairResponse::from(response);
        assert_eq!(pair.access_token, "id-token");
        assert_eq!(pair.refresh_token, "refresh-token");
    }

    #[test]
    fn test_account_record_response_from_user_record() {
        let record = UserRecord {
            local_id: "uid-1".to_string(),
            email: Some("user@example.com".to_string()),
            email_verified: true,
            display_name: Some("홍길동".to_string()),
            photo_url: None,
            phone_number: None,
            disabled: false,
            valid_since: None,
        };

        let response = AccountRecordResponse::from(record);
        assert_eq!(response.uid, "uid-1");
        assert!(response.email_verified);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["emailVerified"], true);
        assert!(json.get("photoURL").is_some());
    }
}

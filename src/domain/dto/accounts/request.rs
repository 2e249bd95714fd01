//! 계정 관련 요청 DTO
//!
//! `/account` 엔드포인트로 들어오는 요청 본문을 매핑합니다.
//! 모든 구조체는 `validator` 기반 입력 검증을 거친 후 서비스 계층으로 전달되며,
//! 검증 실패 시 400 Bad Request로 즉시 응답합니다.

use serde::Deserialize;
use validator::Validate;

/// 이메일/비밀번호 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 계정 생성 요청 구조체
///
/// 이름 필드는 Firebase 사용자 레코드의 `displayName`으로 합쳐집니다.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,

    pub first_name: String,

    pub last_name: String,
}

impl CreateAccountRequest {
    /// `firstName`과 `lastName`을 합쳐 표시 이름을 만듭니다.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// 소셜 로그인 요청 구조체
///
/// Google은 ID 토큰을, Facebook은 액세스 토큰을 `token` 필드로 전달합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct SocialLoginRequest {
    #[validate(length(min = 1, message = "소셜 토큰이 필요합니다"))]
    pub token: String,
}

/// 전화번호 로그인 요청 구조체
///
/// `verificationId`는 클라이언트 SDK의 SMS 발송 단계에서 받은 세션 정보입니다.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PhoneLoginRequest {
    #[validate(length(min = 1, message = "verificationId가 필요합니다"))]
    pub verification_id: String,

    #[validate(length(min = 1, message = "인증 코드가 필요합니다"))]
    pub code: String,
}

/// 비밀번호 재설정 시작 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct InitResetPasswordRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 비밀번호 재설정 코드 확인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyResetPasswordRequest {
    #[validate(length(min = 1, message = "재설정 코드가 필요합니다"))]
    pub code: String,

    #[validate(length(min = 1, message = "이메일이 필요합니다"))]
    pub email: String,
}

/// 비밀번호 재설정 확정 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct ConfirmResetPasswordRequest {
    pub code: String,

    pub password: String,
}

/// 이메일 소유 확인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct ConfirmEmailRequest {
    #[validate(length(min = 1, message = "확인 코드가 필요합니다"))]
    pub code: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 토큰 갱신 요청 구조체
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// 프로필 수정 요청 구조체
///
/// 전달된 필드만 Firestore 문서에 병합되며, 생략된 필드는 유지됩니다.
/// 알 수 없는 필드는 거부하여 오타로 인한 조용한 무시를 방지합니다.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    pub phone_number: Option<String>,

    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_rejects_invalid_email() {
        let request = LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_rejects_empty_password() {
        let request = LoginRequest {
            email: "user@example.com".to_string(),
            password: "".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_account_request_accepts_valid_input() {
        let request = CreateAccountRequest {
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
            first_name: "길동".to_string(),
            last_name: "홍".to_string(),
        };

        assert!(request.validate().is_ok());
        assert_eq!(request.display_name(), "길동 홍");
    }

    #[test]
    fn test_create_account_request_uses_camel_case_keys() {
        let json = serde_json::json!({
            "email": "user@example.com",
            "password": "secret",
            "firstName": "길동",
            "lastName": "홍"
        });

        let request: CreateAccountRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.first_name, "길동");
        assert_eq!(request.last_name, "홍");
    }

    #[test]
    fn test_phone_login_request_requires_both_fields() {
        let request = PhoneLoginRequest {
            verification_id: "".to_string(),
            code: "123456".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_verify_reset_password_request_requires_code() {
        let request = VerifyResetPasswordRequest {
            code: "".to_string(),
            email: "user@example.com".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_confirm_email_request_rejects_invalid_email() {
        let request = ConfirmEmailRequest {
            code: "oob-code".to_string(),
            email: "invalid".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_refresh_token_request_uses_camel_case_key() {
        let json = serde_json::json!({ "refreshToken": "refresh-123" });

        let request: RefreshTokenRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.refresh_token, "refresh-123");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_profile_request_rejects_unknown_fields() {
        let json = serde_json::json!({
            "displayName": "홍길동",
            "nickname": "이상한필드"
        });

        let result: Result<UpdateProfileRequest, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_profile_request_accepts_photo_url_key() {
        let json = serde_json::json!({ "photoURL": "https://example.com/me.png" });

        let request: UpdateProfileRequest = serde_json::from_value(json).unwrap();
        assert_eq!(
            request.photo_url.as_deref(),
            Some("https://example.com/me.png")
        );
    }

    #[test]
    fn test_update_profile_request_validates_optional_email() {
        let request = UpdateProfileRequest {
            display_name: None,
            email: Some("broken".to_string()),
            phone_number: None,
            photo_url: None,
        };

        assert!(request.validate().is_err());
    }
}

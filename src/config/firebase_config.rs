//! # Firebase Configuration Module
//!
//! Firebase 프로젝트 연동에 필요한 설정을 관리하는 모듈입니다.
//! Identity Toolkit(Firebase Authentication), Secure Token, Firestore REST API의
//! 엔드포인트와 자격 증명 위치를 환경 변수에서 읽어옵니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! # Firebase 웹 API 키 (클라이언트 SDK와 동일한 키)
//! export FIREBASE_API_KEY="AIzaSy..."
//!
//! # Firebase 프로젝트 ID (토큰 aud/iss 검증과 REST 경로에 사용)
//! export FIREBASE_PROJECT_ID="my-project"
//!
//! # 서비스 계정 키 파일 경로 (Admin API / Firestore 접근용)
//! export GOOGLE_APPLICATION_CREDENTIALS="./secrets/service-account.json"
//! ```
//!
//! ## 엔드포인트 오버라이드
//!
//! 기본값은 Google 프로덕션 엔드포인트입니다. 에뮬레이터나 테스트 서버를
//! 사용할 때만 오버라이드하면 됩니다.
//!
//! ```bash
//! export FIREBASE_IDENTITY_BASE_URL="http://localhost:9099/identitytoolkit.googleapis.com/v1"
//! ```

use std::env;

/// Firebase 프로젝트 설정을 관리하는 구조체
///
/// Firebase Console에서 생성한 프로젝트의 식별 정보와 REST API 엔드포인트를
/// 제공합니다. 필수 값이 없으면 부팅 시점에 패닉이 발생하여 설정 문제를
/// 조기에 드러냅니다.
pub struct FirebaseConfig;

impl FirebaseConfig {
    /// Firebase 웹 API 키를 반환합니다.
    ///
    /// Identity Toolkit의 공개 엔드포인트(`accounts:signUp`, `accounts:signInWithPassword` 등)
    /// 호출 시 쿼리 매개변수로 전달됩니다. 클라이언트 SDK에서도 사용되는 값이므로
    /// 비밀키는 아니지만, 남용 방지를 위해 API 키 제한 설정을 권장합니다.
    ///
    /// # Panics
    ///
    /// `FIREBASE_API_KEY` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn api_key() -> String {
        env::var("FIREBASE_API_KEY")
            .expect("FIREBASE_API_KEY must be set")
    }

    /// Firebase 프로젝트 ID를 반환합니다.
    ///
    /// ID 토큰의 `aud` 클레임 검증, `iss` 클레임 구성, Admin API와
    /// Firestore REST 경로(`projects/{project_id}/...`) 구성에 사용됩니다.
    ///
    /// # Panics
    ///
    /// `FIREBASE_PROJECT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn project_id() -> String {
        env::var("FIREBASE_PROJECT_ID")
            .expect("FIREBASE_PROJECT_ID must be set")
    }

    /// 서비스 계정 키 파일 경로를 반환합니다.
    ///
    /// Google Cloud Console에서 다운로드한 서비스 계정 JSON 키 파일의 경로입니다.
    /// Admin API(accounts:lookup, accounts:update)와 Firestore 접근 시
    /// OAuth2 액세스 토큰 발급에 사용됩니다.
    ///
    /// # 기본값
    ///
    /// `./secrets/service-account.json`
    pub fn service_account_path() -> String {
        env::var("GOOGLE_APPLICATION_CREDENTIALS")
            .unwrap_or_else(|_| "./secrets/service-account.json".to_string())
    }

    /// Identity Toolkit API의 기본 URL을 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://identitytoolkit.googleapis.com/v1`
    pub fn identity_base_url() -> String {
        env::var("FIREBASE_IDENTITY_BASE_URL")
            .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com/v1".to_string())
    }

    /// Secure Token API의 기본 URL을 반환합니다.
    ///
    /// 리프레시 토큰을 새 ID 토큰으로 교환할 때 사용됩니다.
    ///
    /// # 기본값
    ///
    /// `https://securetoken.googleapis.com/v1`
    pub fn secure_token_base_url() -> String {
        env::var("FIREBASE_SECURE_TOKEN_BASE_URL")
            .unwrap_or_else(|_| "https://securetoken.googleapis.com/v1".to_string())
    }

    /// Firestore REST API의 기본 URL을 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://firestore.googleapis.com/v1`
    pub fn firestore_base_url() -> String {
        env::var("FIRESTORE_BASE_URL")
            .unwrap_or_else(|_| "https://firestore.googleapis.com/v1".to_string())
    }

    /// ID 토큰 서명 검증용 JWK 세트의 URL을 반환합니다.
    ///
    /// Google이 주기적으로 회전시키는 RS256 공개키 목록입니다.
    ///
    /// # 기본값
    ///
    /// `https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com`
    pub fn jwks_url() -> String {
        env::var("FIREBASE_JWKS_URL").unwrap_or_else(|_| {
            "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com"
                .to_string()
        })
    }

    /// ID 토큰의 `iss` 클레임 기대값을 반환합니다.
    ///
    /// 형식: `https://securetoken.google.com/{project_id}`
    ///
    /// # Panics
    ///
    /// `FIREBASE_PROJECT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn issuer() -> String {
        format!("https://securetoken.google.com/{}", Self::project_id())
    }
}

/// 지원하는 소셜 로그인 공급자를 나타내는 열거형
///
/// Identity Toolkit의 `accounts:signInWithIdp` 엔드포인트는 공급자별로
/// 다른 자격 증명 형식을 요구합니다. Google은 OpenID Connect ID 토큰을,
/// Facebook은 OAuth 액세스 토큰을 `postBody`에 담아 전달합니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SocialProvider {
    /// Google 계정 로그인 (ID 토큰 기반)
    Google,
    /// Facebook 계정 로그인 (액세스 토큰 기반)
    Facebook,
}

impl SocialProvider {
    /// 공급자의 소문자 문자열 표현을 반환합니다.
    ///
    /// 로깅과 에러 메시지에 사용됩니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Google => "google",
            SocialProvider::Facebook => "facebook",
        }
    }

    /// Identity Toolkit이 요구하는 공급자 식별자를 반환합니다.
    pub fn provider_id(&self) -> &'static str {
        match self {
            SocialProvider::Google => "google.com",
            SocialProvider::Facebook => "facebook.com",
        }
    }

    /// `accounts:signInWithIdp` 요청의 `postBody` 값을 생성합니다.
    ///
    /// 토큰은 URL 인코딩되어 삽입됩니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// use crate::config::SocialProvider;
    ///
    /// let body = SocialProvider::Google.post_body("eyJhbGci...");
    /// assert!(body.starts_with("id_token="));
    /// ```
    pub fn post_body(&self, token: &str) -> String {
        let encoded = urlencoding::encode(token);
        match self {
            SocialProvider::Google => {
                format!("id_token={}&providerId={}", encoded, self.provider_id())
            }
            SocialProvider::Facebook => {
                format!("access_token={}&providerId={}", encoded, self.provider_id())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_provider_as_string() {
        assert_eq!(SocialProvider::Google.as_str(), "google");
        assert_eq!(SocialProvider::Facebook.as_str(), "facebook");
    }

    #[test]
    fn test_social_provider_identifier() {
        assert_eq!(SocialProvider::Google.provider_id(), "google.com");
        assert_eq!(SocialProvider::Facebook.provider_id(), "facebook.com");
    }

    #[test]
    fn test_google_post_body_uses_id_token() {
        let body = SocialProvider::Google.post_body("abc123");
        assert_eq!(body, "id_token=abc123&providerId=google.com");
    }

    #[test]
    fn test_facebook_post_body_uses_access_token() {
        let body = SocialProvider::Facebook.post_body("abc123");
        assert_eq!(body, "access_token=abc123&providerId=facebook.com");
    }

    #[test]
    fn test_post_body_url_encodes_token() {
        let body = SocialProvider::Facebook.post_body("a+b/c=d");
        assert_eq!(body, "access_token=a%2Bb%2Fc%3Dd&providerId=facebook.com");
    }

    #[test]
    fn test_default_endpoints() {
        if env::var("FIREBASE_IDENTITY_BASE_URL").is_err() {
            assert_eq!(
                FirebaseConfig::identity_base_url(),
                "https://identitytoolkit.googleapis.com/v1"
            );
        }

        if env::var("FIREBASE_SECURE_TOKEN_BASE_URL").is_err() {
            assert_eq!(
                FirebaseConfig::secure_token_base_url(),
                "https://securetoken.googleapis.com/v1"
            );
        }

        if env::var("FIRESTORE_BASE_URL").is_err() {
            assert_eq!(
                FirebaseConfig::firestore_base_url(),
                "https://firestore.googleapis.com/v1"
            );
        }
    }
}

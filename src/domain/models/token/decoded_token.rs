//! 검증된 Firebase ID 토큰의 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임과 Firebase 특화 클레임을 표시합니다.
use serde::Deserialize;

/// Firebase ID 토큰의 클레임(Payload) 구조체
///
/// 서명/만료/발급자 검증을 통과한 토큰에서 역직렬화됩니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (Firebase uid)
/// - `aud`: 토큰 대상 (Firebase 프로젝트 ID)
/// - `iss`: 발급자 (`https://securetoken.google.com/{project_id}`)
/// - `iat` / `exp`: 발급/만료 시간 (Unix timestamp)
/// - `auth_time`: 사용자가 실제 인증한 시간 (토큰 폐기 판정에 사용)
/// - `firebase.sign_in_provider`: 인증 방식 ("password", "google.com" 등)
#[derive(Debug, Clone, Deserialize)]
pub struct DecodedIdToken {
    /// 토큰 대상 (프로젝트 ID)
    pub aud: String,
    /// 토큰 발급자
    pub iss: String,
    /// 토큰의 주체 (사용자 uid)
    pub sub: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
    /// 사용자 인증 시간 (Unix timestamp)
    pub auth_time: i64,
    /// 계정 이메일
    #[serde(default)]
    pub email: Option<String>,
    /// 이메일 소유 확인 여부
    #[serde(default)]
    pub email_verified: Option<bool>,
    /// 계정 전화번호 (전화 인증 계정)
    #[serde(default)]
    pub phone_number: Option<String>,
    /// 프로필 사진 URL (소셜 계정)
    #[serde(default)]
    pub picture: Option<String>,
    /// Firebase 특화 클레임
    #[serde(default)]
    pub firebase: FirebaseClaims,
}

impl DecodedIdToken {
    /// 토큰 주체의 Firebase uid를 반환합니다.
    pub fn uid(&self) -> &str {
        &self.sub
    }
}

/// ID 토큰의 `firebase` 중첩 클레임
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirebaseClaims {
    /// 이번 토큰 발급에 사용된 로그인 공급자
    #[serde(default)]
    pub sign_in_provider: Option<String>,
}

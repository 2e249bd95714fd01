//! Identity Toolkit REST 클라이언트
//!
//! Firebase Authentication의 공개 엔드포인트(`accounts:*`)를 호출합니다.
//! 모든 요청은 웹 API 키로 인증되며, 자격 증명 검증·토큰 발급·이메일 발송은
//! 전부 Firebase가 수행합니다. 이 클라이언트는 요청 본문을 조립하고
//! 응답을 타입으로 해석하는 것 외의 로직을 갖지 않습니다.
//!
//! # 엔드포인트 매핑
//!
//! | 메서드 | Identity Toolkit 액션 |
//! |--------|----------------------|
//! | [`sign_up`](IdentityClient::sign_up) | `accounts:signUp` |
//! | [`sign_in_with_password`](IdentityClient::sign_in_with_password) | `accounts:signInWithPassword` |
//! | [`sign_in_with_idp`](IdentityClient::sign_in_with_idp) | `accounts:signInWithIdp` |
//! | [`sign_in_with_phone_number`](IdentityClient::sign_in_with_phone_number) | `accounts:signInWithPhoneNumber` |
//! | [`send_password_reset_email`](IdentityClient::send_password_reset_email) | `accounts:sendOobCode` |
//! | [`send_verification_email`](IdentityClient::send_verification_email) | `accounts:sendOobCode` |
//! | [`check_action_code`](IdentityClient::check_action_code) | `accounts:resetPassword` (조회) |
//! | [`confirm_password_reset`](IdentityClient::confirm_password_reset) | `accounts:resetPassword` (확정) |

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::{FirebaseConfig, SocialProvider};
use crate::domain::dto::firebase::response::{
    ActionCodeInfo, IdpSignInResponse, PhoneSignInResponse, SignInResponse,
};
use crate::errors::{AppError, AppResult};

/// OOB 코드 발송 시 이메일 템플릿 언어를 지정하는 헤더
const FIREBASE_LOCALE_HEADER: &str = "X-Firebase-Locale";

/// Identity Toolkit REST 클라이언트
///
/// 상태가 없는 얇은 래퍼이므로 `reqwest::Client`(내부 커넥션 풀) 하나만 가집니다.
/// 부팅 시 `ServiceLocator`에 등록되어 [`AccountService`]에 주입됩니다.
///
/// [`AccountService`]: crate::services::accounts::account_service::AccountService
pub struct IdentityClient {
    http: reqwest::Client,
}

impl IdentityClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// 이메일/비밀번호로 새 계정을 생성합니다.
    ///
    /// 생성과 동시에 ID 토큰이 발급되지만, 계정 생성 흐름은 생성 직후
    /// 별도의 로그인 호출로 받은 토큰 쌍을 클라이언트에게 반환합니다.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> AppResult<SignInResponse> {
        self.post(
            "signUp",
            json!({
                "email": email,
                "password": password,
                "displayName": display_name,
                "returnSecureToken": true,
            }),
            None,
        )
        .await
    }

    /// 이메일/비밀번호로 로그인합니다.
    ///
    /// 비밀번호 검증은 Firebase가 수행하며, 실패 시 `INVALID_PASSWORD` 등의
    /// 에러 메시지가 [`AppError::ExternalServiceError`]로 전파됩니다.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<SignInResponse> {
        self.post(
            "signInWithPassword",
            json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }),
            None,
        )
        .await
    }

    /// 소셜 공급자(Google/Facebook)의 자격 증명으로 로그인합니다.
    ///
    /// OAuth 자격 증명 교환과 계정 연결은 Firebase가 수행합니다.
    /// `postBody` 형식은 공급자마다 다르며 [`SocialProvider::post_body`]가 조립합니다.
    pub async fn sign_in_with_idp(
        &self,
        provider: SocialProvider,
        token: &str,
    ) -> AppResult<IdpSignInResponse> {
        self.post(
            "signInWithIdp",
            json!({
                "postBody": provider.post_body(token),
                "requestUri": "http://localhost",
                "returnSecureToken": true,
                "returnIdpCredential": true,
            }),
            None,
        )
        .await
    }

    /// SMS 인증 세션과 코드로 전화번호 로그인을 수행합니다.
    ///
    /// `session_info`는 클라이언트 SDK의 SMS 발송 단계에서 받은 값입니다.
    /// SMS 발송과 코드 대조는 전부 Firebase의 전화 인증 프로토콜이 담당합니다.
    pub async fn sign_in_with_phone_number(
        &self,
        session_info: &str,
        code: &str,
    ) -> AppResult<PhoneSignInResponse> {
        self.post(
            "signInWithPhoneNumber",
            json!({
                "sessionInfo": session_info,
                "code": code,
            }),
            None,
        )
        .await
    }

    /// 비밀번호 재설정 이메일 발송을 요청합니다.
    pub async fn send_password_reset_email(&self, email: &str) -> AppResult<()> {
        self.post::<serde_json::Value>(
            "sendOobCode",
            json!({
                "requestType": "PASSWORD_RESET",
                "email": email,
            }),
            None,
        )
        .await?;

        Ok(())
    }

    /// 이메일 소유 확인 메일 발송을 요청합니다.
    ///
    /// `language`가 주어지면 `X-Firebase-Locale` 헤더로 전달되어
    /// 해당 언어의 이메일 템플릿이 사용됩니다.
    pub async fn send_verification_email(
        &self,
        id_token: &str,
        language: Option<&str>,
    ) -> AppResult<()> {
        self.post::<serde_json::Value>(
            "sendOobCode",
            json!({
                "requestType": "VERIFY_EMAIL",
                "idToken": id_token,
            }),
            language,
        )
        .await?;

        Ok(())
    }

    /// OOB 코드를 소모하지 않고 메타데이터(작업 유형, 대상 이메일)를 조회합니다.
    ///
    /// `accounts:resetPassword`에 `oobCode`만 보내면 조회 모드로 동작합니다.
    pub async fn check_action_code(&self, oob_code: &str) -> AppResult<ActionCodeInfo> {
        self.post(
            "resetPassword",
            json!({
                "oobCode": oob_code,
            }),
            None,
        )
        .await
    }

    /// 재설정 코드와 새 비밀번호로 비밀번호 변경을 확정합니다.
    pub async fn confirm_password_reset(
        &self,
        oob_code: &str,
        new_password: &str,
    ) -> AppResult<()> {
        self.post::<serde_json::Value>(
            "resetPassword",
            json!({
                "oobCode": oob_code,
                "newPassword": new_password,
            }),
            None,
        )
        .await?;

        Ok(())
    }

    /// Identity Toolkit의 `accounts:{action}` 엔드포인트로 POST 요청을 보냅니다.
    ///
    /// 실패 응답의 에러 메시지는 그대로 [`AppError::ExternalServiceError`]에
    /// 담겨 400으로 전파됩니다.
    async fn post<T: DeserializeOwned>(
        &self,
        action: &str,
        body: serde_json::Value,
        locale: Option<&str>,
    ) -> AppResult<T> {
        let url = format!(
            "{}/accounts:{}?key={}",
            FirebaseConfig::identity_base_url(),
            action,
            FirebaseConfig::api_key()
        );

        let mut request = self.http.post(&url).json(&body);
        if let Some(language) = locale {
            request = request.header(FIREBASE_LOCALE_HEADER, language);
        }

        let response = request.send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Identity Toolkit 요청 실패: {}", e))
        })?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = super::extract_error_message(&body);
            log::warn!("Identity Toolkit 거부 (accounts:{}): {}", action, message);
            return Err(AppError::ExternalServiceError(message));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Identity Toolkit 응답 해석 실패: {}", e))
        })
    }
}

impl Default for IdentityClient {
    fn default() -> Self {
        Self::new()
    }
}

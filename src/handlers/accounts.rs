//! # Account Management HTTP Handlers
//!
//! 계정 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 각 핸들러는 요청 DTO를 검증하고 [`AccountService`]의 대응 메서드 하나를
//! 호출한 뒤 결과를 HTTP 응답으로 변환합니다.
//!
//! ## 엔드포인트 목록
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/account/create` | 계정 생성 + 확인 메일 발송 | 201 Created |
//! | `POST` | `/account/login` | 이메일/비밀번호 로그인 | 200 OK |
//! | `POST` | `/account/login/google` | Google 소셜 로그인 | 200 OK |
//! | `POST` | `/account/login/facebook` | Facebook 소셜 로그인 | 200 OK |
//! | `POST` | `/account/login/phone` | 전화번호(SMS 코드) 로그인 | 200 OK |
//! | `POST` | `/account/resetPassword/init` | 재설정 메일 발송 | 200 OK |
//! | `POST` | `/account/resetPassword/verify` | 재설정 코드 확인 | 200 OK |
//! | `POST` | `/account/resetPassword/confirm` | 재설정 확정 | 200 OK |
//! | `POST` | `/account/email/confirm` | 이메일 소유 확인 | 200 OK |
//! | `POST` | `/account/refreshToken` | 토큰 갱신 | 200 OK |
//! | `GET`  | `/account/profile` | 프로필 조회 (인증 필요) | 200 OK |
//! | `PUT`  | `/account/profile` | 프로필 병합 수정 (인증 필요) | 200 OK |
//!
//! ## Spring Boot와의 비교
//!
//! ```java
//! @RestController
//! @RequestMapping("/account")
//! public class AccountController {
//!     @PostMapping("/login")
//!     public ResponseEntity<TokenPairResponse> login(
//!         @Valid @RequestBody LoginRequest request
//!     ) {
//!         return ResponseEntity.ok(accountService.login(request));
//!     }
//! }
//! ```
//!
//! 이 모듈은 같은 구조를 actix-web의 attribute 라우팅과
//! `payload.validate()?`로 표현합니다.
//!
//! [`AccountService`]: crate::services::accounts::account_service::AccountService

use actix_web::{get, post, put, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::config::SocialProvider;
use crate::domain::dto::accounts::request::{
    ConfirmEmailRequest, ConfirmResetPasswordRequest, CreateAccountRequest, InitResetPasswordRequest,
    LoginRequest, PhoneLoginRequest, RefreshTokenRequest, SocialLoginRequest, UpdateProfileRequest,
    VerifyResetPasswordRequest,
};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::accounts::account_service::AccountService;

/// 새 계정을 생성합니다.
///
/// 확인 메일의 언어는 요청의 `Accept-Language` 헤더를 따릅니다.
#[post("/create")]
pub async fn create_account(
    req: HttpRequest,
    payload: web::Json<CreateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let language = accept_language(&req);
    let service = AccountService::instance();
    let pair = service.create_account(payload.into_inner(), language).await?;

    Ok(HttpResponse::Created().json(pair))
}

/// 이메일/비밀번호로 로그인합니다.
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = AccountService::instance();
    let pair = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(pair))
}

/// Google ID 토큰으로 로그인합니다.
#[post("/login/google")]
pub async fn google_login(payload: web::Json<SocialLoginRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = AccountService::instance();
    let pair = service
        .social_sign_in(SocialProvider::Google, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(pair))
}

/// Facebook 액세스 토큰으로 로그인합니다.
#[post("/login/facebook")]
pub async fn facebook_login(
    payload: web::Json<SocialLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = AccountService::instance();
    let pair = service
        .social_sign_in(SocialProvider::Facebook, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(pair))
}

/// SMS 인증 세션과 코드로 로그인합니다.
#[post("/login/phone")]
pub async fn phone_login(payload: web::Json<PhoneLoginRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = AccountService::instance();
    let pair = service.phone_number_sign_in(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(pair))
}

/// 비밀번호 재설정 메일 발송을 요청합니다.
#[post("/resetPassword/init")]
pub async fn init_reset_password(
    payload: web::Json<InitResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = AccountService::instance();
    service.init_reset_password(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().finish())
}

/// 비밀번호 재설정 코드의 유효성을 확인합니다.
#[post("/resetPassword/verify")]
pub async fn verify_reset_password(
    payload: web::Json<VerifyResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = AccountService::instance();
    let valid = service.verify_reset_password_code(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(valid))
}

/// 재설정 코드와 새 비밀번호로 변경을 확정합니다.
#[post("/resetPassword/confirm")]
pub async fn confirm_reset_password(
    payload: web::Json<ConfirmResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = AccountService::instance();
    service.confirm_reset_password(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().finish())
}

/// 이메일 소유 확인을 완료하고 갱신된 계정 상태를 반환합니다.
#[post("/email/confirm")]
pub async fn confirm_email(payload: web::Json<ConfirmEmailRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = AccountService::instance();
    let record = service.confirm_email(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(record))
}

/// 리프레시 토큰으로 새 토큰 쌍을 발급받습니다.
#[post("/refreshToken")]
pub async fn refresh_token(payload: web::Json<RefreshTokenRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = AccountService::instance();
    let pair = service.refresh_token(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(pair))
}

/// 인증된 사용자의 프로필을 조회합니다.
///
/// `AuthenticatedUser`는 인증 미들웨어가 extensions에 넣은 값에서 추출됩니다.
#[get("")]
pub async fn get_profile(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let service = AccountService::instance();
    let profile = service.get_profile(&user.uid).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 인증된 사용자의 프로필을 병합 수정합니다.
#[put("")]
pub async fn update_profile(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = AccountService::instance();
    let profile = service.update_profile(&user.uid, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// `Accept-Language` 헤더의 값을 추출합니다.
///
/// 확인 메일 템플릿의 언어 선택(`X-Firebase-Locale`)에 그대로 전달됩니다.
fn accept_language(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Accept-Language")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_accept_language_extraction() {
        let req = TestRequest::post()
            .insert_header(("Accept-Language", "ko-KR"))
            .to_http_request();

        assert_eq!(accept_language(&req).as_deref(), Some("ko-KR"));
    }

    #[test]
    fn test_accept_language_missing_header() {
        let req = TestRequest::post().to_http_request();

        assert!(accept_language(&req).is_none());
    }
}

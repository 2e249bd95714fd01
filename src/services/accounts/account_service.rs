//! # 계정 관리 서비스 구현
//!
//! 모든 계정 관련 엔드포인트의 비즈니스 로직을 구현합니다.
//! Spring Framework의 `@Service` 계층과 동일한 위치이지만, 이 서비스에는
//! 독자적인 알고리즘이 없습니다. 자격 증명 저장·비밀번호 해싱·토큰 발급·
//! 이메일/SMS 발송은 전부 Firebase가 수행하며, 각 메서드는 1~3개의
//! 제공자 호출을 순서대로 엮고 응답을 DTO로 재구성할 뿐입니다.
//!
//! ## 엔드포인트 ↔ 제공자 호출 대응
//!
//! ```text
//! create_account        signUp → 프로필 부트스트랩 → signInWithPassword → sendOobCode(VERIFY_EMAIL)
//! login                 signInWithPassword
//! social_sign_in        signInWithIdp → 프로필 부트스트랩
//! phone_number_sign_in  signInWithPhoneNumber → 토큰 검증 → 프로필 부트스트랩
//! init_reset_password   sendOobCode(PASSWORD_RESET)
//! verify_reset_...      resetPassword 조회 (작업/이메일 대조)
//! confirm_reset_...     resetPassword(oobCode, newPassword)
//! confirm_email         resetPassword 조회 → accounts:lookup → accounts:update
//! refresh_token         Secure Token 교환
//! get/update_profile    Firestore 문서 조회/병합 저장
//! ```

use std::sync::Arc;

use singleton_macro::service;

use crate::config::SocialProvider;
use crate::domain::dto::accounts::request::{
    ConfirmEmailRequest, ConfirmResetPasswordRequest, CreateAccountRequest, InitResetPasswordRequest,
    LoginRequest, PhoneLoginRequest, RefreshTokenRequest, SocialLoginRequest, UpdateProfileRequest,
    VerifyResetPasswordRequest,
};
use crate::domain::dto::accounts::response::{AccountRecordResponse, TokenPairResponse};
use crate::domain::dto::firebase::response::ActionCodeInfo;
use crate::domain::models::accounts::user_profile::UserProfile;
use crate::domain::models::token::decoded_token::DecodedIdToken;
use crate::errors::{AppError, AppResult};
use crate::firebase::admin_client::AdminClient;
use crate::firebase::identity_client::IdentityClient;
use crate::firebase::secure_token_client::SecureTokenClient;
use crate::firebase::token_verifier::TokenVerifier;
use crate::repositories::profiles::profile_repository::ProfileRepository;

/// 전화번호 로그인 실패 시의 고정 응답 메시지
///
/// 코드/세션 중 무엇이 틀렸는지 노출하지 않기 위해 모든 실패가 이 메시지로 수렴합니다.
const PHONE_AUTH_ERROR: &str =
    "Phone auth: Unable to verify the informations based on the provided code and verificationId.";

/// OOB 코드의 작업 유형 또는 대상 이메일이 요청과 다를 때의 메시지
const CODE_MISMATCH_ERROR: &str = "Code does not match the operation";

/// 비밀번호 재설정 코드의 작업 유형
const OP_PASSWORD_RESET: &str = "PASSWORD_RESET";

/// 이메일 확인 코드의 작업 유형
const OP_VERIFY_EMAIL: &str = "VERIFY_EMAIL";

/// 계정 관리 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며, Firebase 클라이언트들과
/// 프로필 리포지토리가 자동으로 주입됩니다.
///
/// ## 에러 처리 전략
///
/// - 제공자 거부는 [`AppError::ExternalServiceError`](400)로, 제공자의
///   에러 메시지(`EMAIL_EXISTS` 등)를 그대로 담아 전파합니다.
/// - 전화번호 로그인만 예외로, 모든 실패를 고정 메시지로 감춥니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let account_service = AccountService::instance();
/// let pair = account_service.login(request).await?;
/// ```
#[service(name = "account")]
pub struct AccountService {
    /// Identity Toolkit 공개 엔드포인트 클라이언트
    identity: Arc<IdentityClient>,
    /// 리프레시 토큰 교환 클라이언트
    secure_token: Arc<SecureTokenClient>,
    /// 프로젝트 범위 Admin 엔드포인트 클라이언트
    admin: Arc<AdminClient>,
    /// ID 토큰 검증기 (전화번호 로그인의 사용자 식별에 사용)
    verifier: Arc<TokenVerifier>,
    /// Firestore 프로필 문서 리포지토리
    profile_repo: Arc<ProfileRepository>,
}

impl AccountService {
    /// 새 계정을 생성하고 즉시 로그인한 토큰 쌍을 반환합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. `accounts:signUp`: 계정 생성 (displayName = "first last")
    /// 2. 프로필 부트스트랩: Firestore `users/{uid}` 문서 초기화
    /// 3. `accounts:signInWithPassword`: 클라이언트에 반환할 토큰 쌍 발급
    /// 4. `sendOobCode(VERIFY_EMAIL)`: 요청의 `Accept-Language`로 확인 메일 발송
    ///
    /// 확인 메일 발송 실패는 가입 자체를 되돌릴 이유가 아니므로 경고 로그만 남깁니다.
    pub async fn create_account(
        &self,
        request: CreateAccountRequest,
        language: Option<String>,
    ) -> AppResult<TokenPairResponse> {
        let display_name = request.display_name();

        let signed_up = self
            .identity
            .sign_up(&request.email, &request.password, &display_name)
            .await?;

        log::info!("계정 생성 완료: uid={}", signed_up.local_id);

        let profile = UserProfile {
            display_name: Some(display_name),
            email: Some(request.email.clone()),
            ..Default::default()
        };
        self.init_user_profile(&signed_up.local_id, profile).await?;

        let signed_in = self
            .identity
            .sign_in_with_password(&request.email, &request.password)
            .await?;

        if let Err(e) = self
            .identity
            .send_verification_email(&signed_in.id_token, language.as_deref())
            .await
        {
            log::warn!("확인 메일 발송 실패 (가입은 완료됨): {}", e);
        }

        Ok(TokenPairResponse::from(signed_in))
    }

    /// 이메일/비밀번호로 로그인합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<TokenPairResponse> {
        let signed_in = self
            .identity
            .sign_in_with_password(&request.email, &request.password)
            .await?;

        log::info!("로그인 성공: uid={}", signed_in.local_id);
        Ok(TokenPairResponse::from(signed_in))
    }

    /// 소셜 공급자(Google/Facebook)의 자격 증명으로 로그인합니다.
    ///
    /// 첫 로그인이면 공급자가 전달한 프로필(이름, 이메일, 사진, 전화번호)로
    /// Firestore 문서를 초기화합니다.
    pub async fn social_sign_in(
        &self,
        provider: SocialProvider,
        request: SocialLoginRequest,
    ) -> AppResult<TokenPairResponse> {
        let signed_in = self.identity.sign_in_with_idp(provider, &request.token).await?;

        log::info!(
            "{} 로그인 성공: uid={}",
            provider.as_str(),
            signed_in.local_id
        );

        let profile = UserProfile {
            display_name: signed_in.display_name.clone(),
            email: signed_in.email.clone(),
            photo_url: signed_in.photo_url.clone(),
            phone_number: signed_in.phone_number.clone(),
        };
        self.init_user_profile(&signed_in.local_id, profile).await?;

        Ok(TokenPairResponse::from(signed_in))
    }

    /// SMS 인증 세션과 코드로 전화번호 로그인을 수행합니다.
    ///
    /// 어느 단계에서 실패했는지(세션 만료, 코드 불일치, 토큰 이상)를
    /// 클라이언트에 노출하지 않기 위해 모든 실패가 [`PHONE_AUTH_ERROR`]
    /// 고정 메시지로 수렴합니다.
    pub async fn phone_number_sign_in(
        &self,
        request: PhoneLoginRequest,
    ) -> AppResult<TokenPairResponse> {
        match self.try_phone_sign_in(&request).await {
            Ok(pair) => Ok(pair),
            Err(e) => {
                log::warn!("전화번호 로그인 실패: {}", e);
                Err(AppError::ExternalServiceError(PHONE_AUTH_ERROR.to_string()))
            }
        }
    }

    /// 전화번호 로그인의 실제 처리 단계
    async fn try_phone_sign_in(&self, request: &PhoneLoginRequest) -> AppResult<TokenPairResponse> {
        let signed_in = self
            .identity
            .sign_in_with_phone_number(&request.verification_id, &request.code)
            .await?;

        // 응답의 부가 필드 대신 발급된 토큰을 검증해 사용자를 식별합니다.
        let claims = self.verifier.verify(&signed_in.id_token).await?;

        log::info!("전화번호 로그인 성공: uid={}", claims.uid());

        self.init_user_profile(claims.uid(), profile_from_claims(&claims))
            .await?;

        Ok(TokenPairResponse::from(signed_in))
    }

    /// 비밀번호 재설정 이메일 발송을 요청합니다.
    pub async fn init_reset_password(&self, request: InitResetPasswordRequest) -> AppResult<()> {
        self.identity.send_password_reset_email(&request.email).await?;

        log::info!("비밀번호 재설정 메일 발송 요청: {}", request.email);
        Ok(())
    }

    /// 비밀번호 재설정 코드가 유효한지 확인합니다.
    ///
    /// 코드를 소모하지 않는 조회이므로, 확인 후에도 같은 코드로
    /// [`confirm_reset_password`](Self::confirm_reset_password)를 호출할 수 있습니다.
    pub async fn verify_reset_password_code(
        &self,
        request: VerifyResetPasswordRequest,
    ) -> AppResult<bool> {
        let info = self.identity.check_action_code(&request.code).await?;
        ensure_action_code_matches(&info, OP_PASSWORD_RESET, &request.email)?;

        Ok(true)
    }

    /// 재설정 코드와 새 비밀번호로 비밀번호 변경을 확정합니다.
    pub async fn confirm_reset_password(
        &self,
        request: ConfirmResetPasswordRequest,
    ) -> AppResult<()> {
        self.identity
            .confirm_password_reset(&request.code, &request.password)
            .await?;

        log::info!("비밀번호 재설정 확정 완료");
        Ok(())
    }

    /// 이메일 소유 확인을 완료하고 갱신된 계정 상태를 반환합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. 코드 조회: 작업 유형(VERIFY_EMAIL)과 대상 이메일 대조
    /// 2. Admin lookup/update: `emailVerified=true` 반영
    /// 3. 재조회한 계정 레코드를 응답으로 반환
    pub async fn confirm_email(
        &self,
        request: ConfirmEmailRequest,
    ) -> AppResult<AccountRecordResponse> {
        let info = self.identity.check_action_code(&request.code).await?;
        ensure_action_code_matches(&info, OP_VERIFY_EMAIL, &request.email)?;

        let record = self.admin.lookup_by_email(&request.email).await?;
        self.admin.set_email_verified(&record.local_id, true).await?;

        let updated = self.admin.lookup_by_uid(&record.local_id).await?;

        log::info!("이메일 확인 완료: uid={}", updated.local_id);
        Ok(AccountRecordResponse::from(updated))
    }

    /// 리프레시 토큰을 새 토큰 쌍으로 교환합니다.
    pub async fn refresh_token(&self, request: RefreshTokenRequest) -> AppResult<TokenPairResponse> {
        let exchanged = self.secure_token.refresh_token(&request.refresh_token).await?;

        Ok(TokenPairResponse::from(exchanged))
    }

    /// uid의 프로필 문서를 조회합니다.
    ///
    /// # Errors
    ///
    /// 프로필 문서가 없으면 [`AppError::NotFound`]를 반환합니다.
    pub async fn get_profile(&self, uid: &str) -> AppResult<UserProfile> {
        self.profile_repo
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("프로필을 찾을 수 없습니다: uid={}", uid)))
    }

    /// 프로필을 병합 수정하고 저장 후의 전체 프로필을 반환합니다.
    ///
    /// # Errors
    ///
    /// 수정할 필드가 하나도 없으면 [`AppError::ValidationError`]를 반환합니다.
    pub async fn update_profile(
        &self,
        uid: &str,
        request: UpdateProfileRequest,
    ) -> AppResult<UserProfile> {
        let profile = UserProfile {
            display_name: request.display_name,
            email: request.email,
            phone_number: request.phone_number,
            photo_url: request.photo_url,
        };

        if profile.is_empty() {
            return Err(AppError::ValidationError(
                "수정할 프로필 필드가 없습니다".to_string(),
            ));
        }

        self.profile_repo.save_merge(uid, &profile).await
    }

    /// 신규 사용자의 프로필 문서를 초기화합니다.
    ///
    /// 이미 문서가 존재하면(재로그인) 아무것도 하지 않으므로, 사용자가
    /// 직접 수정한 프로필이 소셜 공급자의 값으로 덮어써지지 않습니다.
    async fn init_user_profile(&self, uid: &str, profile: UserProfile) -> AppResult<()> {
        if profile.is_empty() {
            return Ok(());
        }

        if self.profile_repo.find_by_uid(uid).await?.is_some() {
            return Ok(());
        }

        self.profile_repo.save_merge(uid, &profile).await?;
        log::info!("프로필 부트스트랩 완료: uid={}", uid);
        Ok(())
    }
}

/// 검증된 ID 토큰의 클레임으로 신규 사용자의 초기 프로필을 구성합니다.
///
/// 전화번호 로그인 토큰은 연결된 계정에 따라 이메일과 프로필 사진
/// 클레임도 가질 수 있으므로 셋 모두 옮깁니다.
fn profile_from_claims(claims: &DecodedIdToken) -> UserProfile {
    UserProfile {
        email: claims.email.clone(),
        photo_url: claims.picture.clone(),
        phone_number: claims.phone_number.clone(),
        ..Default::default()
    }
}

/// OOB 코드의 작업 유형과 대상 이메일이 요청과 일치하는지 확인합니다.
///
/// 비밀번호 재설정 코드로 이메일 확인을 시도하는 식의 교차 사용을 차단합니다.
fn ensure_action_code_matches(
    info: &ActionCodeInfo,
    expected_operation: &str,
    email: &str,
) -> AppResult<()> {
    if info.request_type != expected_operation {
        return Err(AppError::ExternalServiceError(CODE_MISMATCH_ERROR.to_string()));
    }

    if info.email.as_deref() != Some(email) {
        return Err(AppError::ExternalServiceError(CODE_MISMATCH_ERROR.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_code(request_type: &str, email: Option<&str>) -> ActionCodeInfo {
        serde_json::from_value(serde_json::json!({
            "requestType": request_type,
            "email": email,
        }))
        .unwrap()
    }

    #[test]
    fn test_action_code_match_accepts_exact_pair() {
        let info = action_code("PASSWORD_RESET", Some("user@example.com"));

        let result = ensure_action_code_matches(&info, OP_PASSWORD_RESET, "user@example.com");
        assert!(result.is_ok());
    }

    #[test]
    fn test_action_code_match_rejects_wrong_operation() {
        // 이메일 확인 코드를 비밀번호 재설정에 사용하는 교차 시도
        let info = action_code("VERIFY_EMAIL", Some("user@example.com"));

        let result = ensure_action_code_matches(&info, OP_PASSWORD_RESET, "user@example.com");
        match result {
            Err(AppError::ExternalServiceError(message)) => {
                assert_eq!(message, CODE_MISMATCH_ERROR);
            }
            other => panic!("예상과 다른 결과: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_action_code_match_rejects_other_account_email() {
        let info = action_code("VERIFY_EMAIL", Some("owner@example.com"));

        let result = ensure_action_code_matches(&info, OP_VERIFY_EMAIL, "attacker@example.com");
        assert!(result.is_err());
    }

    #[test]
    fn test_action_code_match_rejects_missing_email() {
        let info = action_code("VERIFY_EMAIL", None);

        let result = ensure_action_code_matches(&info, OP_VERIFY_EMAIL, "user@example.com");
        assert!(result.is_err());
    }

    fn decoded_token(extra: serde_json::Value) -> DecodedIdToken {
        let mut json = serde_json::json!({
            "iss": "https://securetoken.google.com/my-project",
            "aud": "my-project",
            "auth_time": 1700000000,
            "sub": "uid-1",
            "iat": 1700000000,
            "exp": 1700003600
        });
        json.as_object_mut()
            .unwrap()
            .extend(extra.as_object().unwrap().clone());

        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_profile_from_claims_carries_all_profile_claims() {
        let claims = decoded_token(serde_json::json!({
            "phone_number": "+821012345678",
            "email": "user@example.com",
            "picture": "https://example.com/me.png"
        }));

        let profile = profile_from_claims(&claims);
        assert_eq!(profile.phone_number.as_deref(), Some("+821012345678"));
        assert_eq!(profile.email.as_deref(), Some("user@example.com"));
        assert_eq!(profile.photo_url.as_deref(), Some("https://example.com/me.png"));
        assert!(profile.display_name.is_none());
    }

    #[test]
    fn test_profile_from_claims_without_optional_claims_is_empty() {
        let claims = decoded_token(serde_json::json!({}));

        // 옮길 클레임이 없으면 빈 프로필이 되어 부트스트랩이 생략됩니다.
        assert!(profile_from_claims(&claims).is_empty());
    }

    #[test]
    fn test_phone_auth_error_message_is_fixed() {
        assert_eq!(
            PHONE_AUTH_ERROR,
            "Phone auth: Unable to verify the informations based on the provided code and verificationId."
        );
    }
}

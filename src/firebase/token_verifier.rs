//! Firebase ID 토큰 검증기
//!
//! 보호된 라우트의 Bearer 토큰을 검증합니다. Firebase가 공개하는 JWKS의
//! RS256 공개키로 서명을 확인하므로, 전체 시스템에서 유일하게 원격 호출이 아닌
//! 로컬 연산으로 수행되는 제공자 작업입니다(키는 주기적으로 회전되므로 캐시).
//!
//! # 검증 단계
//!
//! 1. 토큰 헤더의 `kid`로 JWKS에서 공개키 선택 (없으면 JWKS 재조회)
//! 2. RS256 서명 + `exp` 검증 (`jsonwebtoken`)
//! 3. `aud` == 프로젝트 ID, `iss` == `https://securetoken.google.com/{project_id}`
//! 4. `sub` 비어 있지 않음
//! 5. 폐기 판정: Admin lookup으로 `disabled` 계정과 `validSince` 이후
//!    재인증되지 않은 토큰 거부
//!
//! 모든 실패는 [`AppError::AuthenticationError`](401)로 수렴합니다.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::config::FirebaseConfig;
use crate::domain::models::accounts::user_record::UserRecord;
use crate::domain::models::token::decoded_token::DecodedIdToken;
use crate::errors::{AppError, AppResult};
use crate::firebase::admin_client::AdminClient;

/// JWKS 엔드포인트가 반환하는 개별 공개키
#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    /// 키 식별자 (토큰 헤더의 `kid`와 대조)
    pub kid: String,
    /// RSA modulus (base64url)
    pub n: String,
    /// RSA exponent (base64url)
    pub e: String,
}

/// JWKS 응답 본문
#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

/// Firebase ID 토큰 검증기
///
/// JWKS 캐시는 `kid` 미스 시에만 갱신됩니다. Google은 키 회전 시 이전 키를
/// 일정 기간 함께 게시하므로, 미스 후 한 번의 재조회로 충분합니다.
pub struct TokenVerifier {
    http: reqwest::Client,
    admin: Arc<AdminClient>,
    keys: RwLock<HashMap<String, Jwk>>,
}

impl TokenVerifier {
    pub fn new(admin: Arc<AdminClient>) -> Self {
        Self {
            http: reqwest::Client::new(),
            admin,
            keys: RwLock::new(HashMap::new()),
        }
    }

    /// ID 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// 서명/만료/대상/발급자 검증과 폐기 판정을 모두 통과해야 합니다.
    pub async fn verify(&self, token: &str) -> AppResult<DecodedIdToken> {
        let header = decode_header(token)
            .map_err(|e| AppError::AuthenticationError(format!("토큰 헤더 해석 실패: {}", e)))?;

        let kid = header
            .kid
            .ok_or_else(|| AppError::AuthenticationError("토큰 헤더에 kid가 없습니다".to_string()))?;

        let jwk = self.key_for(&kid).await?;

        let decoding_key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
            .map_err(|e| AppError::AuthenticationError(format!("서명 키 구성 실패: {}", e)))?;

        let validation = build_validation();

        let data = decode::<DecodedIdToken>(token, &decoding_key, &validation)
            .map_err(|e| AppError::AuthenticationError(format!("토큰 검증 실패: {}", e)))?;

        let claims = data.claims;
        validate_subject(&claims)?;

        self.check_revocation(&claims).await?;

        Ok(claims)
    }

    /// `kid`에 해당하는 공개키를 캐시 또는 JWKS 재조회로 찾습니다.
    async fn key_for(&self, kid: &str) -> AppResult<Jwk> {
        {
            let keys = self.keys.read().unwrap();
            if let Some(jwk) = keys.get(kid) {
                return Ok(jwk.clone());
            }
        }

        self.refresh_keys().await?;

        let keys = self.keys.read().unwrap();
        keys.get(kid).cloned().ok_or_else(|| {
            AppError::AuthenticationError(format!("알 수 없는 서명 키입니다: kid={}", kid))
        })
    }

    /// JWKS를 조회하여 키 캐시를 교체합니다.
    async fn refresh_keys(&self) -> AppResult<()> {
        let response = self
            .http
            .get(FirebaseConfig::jwks_url())
            .send()
            .await
            .map_err(|e| AppError::AuthenticationError(format!("JWKS 조회 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::AuthenticationError(format!(
                "JWKS 조회 거부: HTTP {}",
                response.status()
            )));
        }

        let jwk_set = response
            .json::<JwkSet>()
            .await
            .map_err(|e| AppError::AuthenticationError(format!("JWKS 해석 실패: {}", e)))?;

        let mut keys = self.keys.write().unwrap();
        *keys = jwk_set
            .keys
            .into_iter()
            .map(|jwk| (jwk.kid.clone(), jwk))
            .collect();

        log::debug!("JWKS 갱신 완료: {}개 키", keys.len());
        Ok(())
    }

    /// 토큰 폐기 여부를 Admin lookup으로 판정합니다.
    ///
    /// `disabled` 계정의 토큰과, `validSince` 이후 재인증되지 않은
    /// (= 폐기 시점 이전에 발급된) 토큰을 거부합니다.
    async fn check_revocation(&self, claims: &DecodedIdToken) -> AppResult<()> {
        let record = self
            .admin
            .lookup_by_uid(claims.uid())
            .await
            .map_err(|e| AppError::AuthenticationError(format!("계정 상태 확인 실패: {}", e)))?;

        if is_revoked(&record, claims.auth_time) {
            log::warn!("폐기된 토큰 거부: uid={}", claims.uid());
            return Err(AppError::AuthenticationError(
                "폐기되었거나 비활성화된 계정의 토큰입니다".to_string(),
            ));
        }

        Ok(())
    }
}

/// aud/iss/exp 검증 규칙을 구성합니다.
fn build_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[FirebaseConfig::project_id()]);
    validation.set_issuer(&[FirebaseConfig::issuer()]);
    validation
}

/// `sub` 클레임이 비어 있지 않은지 확인합니다.
fn validate_subject(claims: &DecodedIdToken) -> AppResult<()> {
    if claims.sub.is_empty() {
        return Err(AppError::AuthenticationError(
            "토큰의 sub 클레임이 비어 있습니다".to_string(),
        ));
    }
    Ok(())
}

/// 계정 상태와 토큰의 인증 시각으로 폐기 여부를 판정합니다.
fn is_revoked(record: &UserRecord, auth_time: i64) -> bool {
    if record.disabled {
        return true;
    }

    match record.valid_since_seconds() {
        Some(valid_since) => valid_since > auth_time,
        None => false,
    }
}

/// 키 목록에서 `kid`가 일치하는 키를 선택합니다.
#[cfg(test)]
fn select_key<'a>(keys: &'a [Jwk], kid: &str) -> Option<&'a Jwk> {
    keys.iter().find(|jwk| jwk.kid == kid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::token::decoded_token::FirebaseClaims;

    fn sample_claims(sub: &str, auth_time: i64) -> DecodedIdToken {
        DecodedIdToken {
            aud: "my-project".to_string(),
            iss: "https://securetoken.google.com/my-project".to_string(),
            sub: sub.to_string(),
            iat: auth_time,
            exp: auth_time + 3600,
            auth_time,
            email: None,
            email_verified: None,
            phone_number: None,
            picture: None,
            firebase: FirebaseClaims::default(),
        }
    }

    fn sample_record(disabled: bool, valid_since: Option<&str>) -> UserRecord {
        serde_json::from_value(serde_json::json!({
            "localId": "uid-1",
            "disabled": disabled,
            "validSince": valid_since,
        }))
        .unwrap()
    }

    #[test]
    fn test_jwk_set_parses_google_response() {
        let json = serde_json::json!({
            "keys": [
                { "kty": "RSA", "alg": "RS256", "use": "sig", "kid": "key-1", "n": "modulus-1", "e": "AQAB" },
                { "kty": "RSA", "alg": "RS256", "use": "sig", "kid": "key-2", "n": "modulus-2", "e": "AQAB" }
            ]
        });

        let jwk_set: JwkSet = serde_json::from_value(json).unwrap();
        assert_eq!(jwk_set.keys.len(), 2);

        let selected = select_key(&jwk_set.keys, "key-2").unwrap();
        assert_eq!(selected.n, "modulus-2");
    }

    #[test]
    fn test_select_key_with_unknown_kid() {
        let keys = vec![Jwk {
            kid: "key-1".to_string(),
            n: "modulus".to_string(),
            e: "AQAB".to_string(),
        }];

        assert!(select_key(&keys, "key-9").is_none());
    }

    #[test]
    fn test_empty_subject_is_rejected() {
        let claims = sample_claims("", 1_700_000_000);
        assert!(validate_subject(&claims).is_err());

        let claims = sample_claims("uid-1", 1_700_000_000);
        assert!(validate_subject(&claims).is_ok());
    }

    #[test]
    fn test_disabled_account_token_is_revoked() {
        let record = sample_record(true, None);
        assert!(is_revoked(&record, 1_700_000_000));
    }

    #[test]
    fn test_token_issued_before_valid_since_is_revoked() {
        // 폐기 시점(validSince) 이전에 인증된 토큰은 거부
        let record = sample_record(false, Some("1700000100"));
        assert!(is_revoked(&record, 1_700_000_000));

        // 폐기 이후 재인증한 토큰은 허용
        assert!(!is_revoked(&record, 1_700_000_200));
    }

    #[test]
    fn test_account_without_revocation_history() {
        let record = sample_record(false, None);
        assert!(!is_revoked(&record, 1_700_000_000));
    }
}

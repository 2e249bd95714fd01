//! # 사용자 프로필 리포지토리
//!
//! Firestore `users` 컬렉션의 프로필 문서에 대한 데이터 액세스 계층입니다.
//! Firestore REST API(`projects/{project_id}/databases/(default)/documents`)를
//! 직접 호출하며, 문서 ID로 Firebase 계정의 uid를 사용합니다.
//!
//! ## 저장 전략
//!
//! 쓰기는 항상 병합(merge)입니다. `updateMask.fieldPaths` 쿼리 매개변수에
//! 요청에 존재하는 필드만 나열하므로, 문서의 다른 필드는 건드리지 않습니다.
//! 문서가 없으면 PATCH가 문서를 생성하므로 별도의 생성 연산이 필요 없습니다.
//!
//! ## 에러 처리
//!
//! - 문서 없음(404)은 에러가 아니라 `None`으로 반환됩니다.
//! - 그 외의 거부 응답은 [`AppError::ExternalServiceError`]로 전파됩니다.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::FirebaseConfig;
use crate::core::registry::{RepositoryRegistration, ServiceLocator};
use crate::domain::models::accounts::user_profile::UserProfile;
use crate::errors::{AppError, AppResult};
use crate::firebase::credentials::FirebaseCredentials;

/// 프로필 문서가 저장되는 Firestore 컬렉션
const COLLECTION: &str = "users";

/// Firestore 문서의 단일 값
///
/// 프로필 문서의 모든 필드는 문자열이므로 `stringValue`만 다룹니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FirestoreValue {
    string_value: String,
}

/// Firestore REST API의 문서 표현
///
/// 읽기 응답과 쓰기 요청 본문에 공통으로 사용됩니다.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FirestoreDocument {
    #[serde(default)]
    fields: HashMap<String, FirestoreValue>,
}

/// 사용자 프로필 데이터 액세스 리포지토리
///
/// 부팅 시 `ServiceLocator`에 등록된 [`FirebaseCredentials`]를 주입받아
/// 모든 요청에 서비스 계정의 액세스 토큰을 사용합니다.
pub struct ProfileRepository {
    http: reqwest::Client,
    credentials: Arc<FirebaseCredentials>,
}

// Firestore 클라이언트는 접속 풀 외의 상태가 없으므로 매크로 없이 직접 등록합니다.
inventory::submit! {
    RepositoryRegistration {
        name: "profile_repository",
        constructor: || Box::new(Arc::new(ProfileRepository::new())),
    }
}

impl ProfileRepository {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials: ServiceLocator::get::<FirebaseCredentials>(),
        }
    }

    /// 등록된 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// uid로 프로필 문서를 조회합니다.
    ///
    /// 문서가 존재하지 않으면 `Ok(None)`을 반환합니다.
    pub async fn find_by_uid(&self, uid: &str) -> AppResult<Option<UserProfile>> {
        let url = self.document_url(uid);
        let access_token = self.credentials.access_token().await?;

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Firestore 조회 실패: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = crate::firebase::extract_error_message(&body);
            log::warn!("Firestore 조회 거부: uid={}, {}", uid, message);
            return Err(AppError::ExternalServiceError(message));
        }

        let document = response
            .json::<FirestoreDocument>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Firestore 문서 해석 실패: {}", e)))?;

        Ok(Some(profile_from_document(&document)))
    }

    /// 프로필을 병합 저장하고 저장 후의 전체 문서를 반환합니다.
    ///
    /// `profile`에 존재하는 필드만 `updateMask`에 나열하여 PATCH하므로
    /// 나머지 필드는 보존됩니다. 문서가 없으면 새로 생성됩니다.
    pub async fn save_merge(&self, uid: &str, profile: &UserProfile) -> AppResult<UserProfile> {
        let mask = update_mask(profile);
        let url = self.document_url(uid);
        let access_token = self.credentials.access_token().await?;

        let query: Vec<(&str, &str)> = mask
            .iter()
            .map(|field| ("updateMask.fieldPaths", *field))
            .collect();

        let document = document_from_profile(profile);

        let response = self
            .http
            .patch(&url)
            .query(&query)
            .bearer_auth(access_token)
            .json(&document)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Firestore 저장 실패: {}", e)))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = crate::firebase::extract_error_message(&body);
            log::warn!("Firestore 저장 거부: uid={}, {}", uid, message);
            return Err(AppError::ExternalServiceError(message));
        }

        let saved = response
            .json::<FirestoreDocument>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Firestore 문서 해석 실패: {}", e)))?;

        log::info!("프로필 저장 완료: uid={}, 필드={:?}", uid, mask);
        Ok(profile_from_document(&saved))
    }

    /// uid에 해당하는 문서의 전체 URL을 구성합니다.
    fn document_url(&self, uid: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}",
            FirebaseConfig::firestore_base_url(),
            FirebaseConfig::project_id(),
            COLLECTION,
            uid
        )
    }
}

/// Firestore 문서를 프로필 모델로 변환합니다.
///
/// 알 수 없는 필드나 문자열이 아닌 값은 무시합니다.
fn profile_from_document(document: &FirestoreDocument) -> UserProfile {
    let field = |name: &str| {
        document
            .fields
            .get(name)
            .map(|value| value.string_value.clone())
    };

    UserProfile {
        display_name: field("displayName"),
        email: field("email"),
        phone_number: field("phoneNumber"),
        photo_url: field("photoURL"),
    }
}

/// 프로필 모델을 Firestore 문서로 변환합니다.
///
/// `None` 필드는 문서에 포함되지 않습니다.
fn document_from_profile(profile: &UserProfile) -> FirestoreDocument {
    let mut fields = HashMap::new();

    let mut insert = |name: &str, value: &Option<String>| {
        if let Some(value) = value {
            fields.insert(
                name.to_string(),
                FirestoreValue {
                    string_value: value.clone(),
                },
            );
        }
    };

    insert("displayName", &profile.display_name);
    insert("email", &profile.email);
    insert("phoneNumber", &profile.phone_number);
    insert("photoURL", &profile.photo_url);

    FirestoreDocument { fields }
}

/// 병합 저장 시 `updateMask.fieldPaths`에 나열할 필드 목록을 구성합니다.
fn update_mask(profile: &UserProfile) -> Vec<&'static str> {
    let mut mask = Vec::new();

    if profile.display_name.is_some() {
        mask.push("displayName");
    }
    if profile.email.is_some() {
        mask.push("email");
    }
    if profile.phone_number.is_some() {
        mask.push("phoneNumber");
    }
    if profile.photo_url.is_some() {
        mask.push("photoURL");
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            display_name: Some("홍길동".to_string()),
            email: Some("user@example.com".to_string()),
            phone_number: None,
            photo_url: Some("https://example.com/me.png".to_string()),
        }
    }

    #[test]
    fn test_document_round_trip_preserves_fields() {
        let profile = sample_profile();

        let document = document_from_profile(&profile);
        assert_eq!(document.fields.len(), 3);
        assert_eq!(document.fields["displayName"].string_value, "홍길동");
        assert_eq!(document.fields["photoURL"].string_value, "https://example.com/me.png");
        assert!(!document.fields.contains_key("phoneNumber"));

        let restored = profile_from_document(&document);
        assert_eq!(restored, profile);
    }

    #[test]
    fn test_update_mask_lists_only_present_fields() {
        let mask = update_mask(&sample_profile());
        assert_eq!(mask, vec!["displayName", "email", "photoURL"]);

        assert!(update_mask(&UserProfile::default()).is_empty());
    }

    #[test]
    fn test_document_parses_firestore_response() {
        let json = serde_json::json!({
            "name": "projects/my-project/databases/(default)/documents/users/uid-1",
            "fields": {
                "displayName": { "stringValue": "홍길동" },
                "email": { "stringValue": "user@example.com" }
            },
            "createTime": "2024-01-01T00:00:00Z",
            "updateTime": "2024-01-02T00:00:00Z"
        });

        let document: FirestoreDocument = serde_json::from_value(json).unwrap();
        let profile = profile_from_document(&document);

        assert_eq!(profile.display_name.as_deref(), Some("홍길동"));
        assert_eq!(profile.email.as_deref(), Some("user@example.com"));
        assert!(profile.photo_url.is_none());
    }

    #[test]
    fn test_document_without_fields_yields_empty_profile() {
        let document: FirestoreDocument = serde_json::from_value(serde_json::json!({
            "name": "projects/my-project/databases/(default)/documents/users/uid-2"
        }))
        .unwrap();

        assert!(profile_from_document(&document).is_empty());
    }
}

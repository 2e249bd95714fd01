//! Firestore `users` 컬렉션의 비정규화 프로필 문서 모델

use serde::{Deserialize, Serialize};

/// 사용자 프로필 문서
///
/// Firebase 계정과 별도로 Firestore에 보관되는 부가 프로필입니다.
/// 모든 필드가 선택적이며, 저장 시 존재하는 필드만 병합(merge)됩니다.
/// Firestore 문서의 실제 필드 키는 camelCase(`photoURL` 포함)입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl UserProfile {
    /// 저장할 필드가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.photo_url.is_none()
    }
}

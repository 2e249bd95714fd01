//! Admin API가 반환하는 Firebase 계정 레코드 모델

use serde::Deserialize;

/// Firebase 계정 레코드
///
/// `accounts:lookup`(Admin API)이 반환하는 계정 상태입니다.
/// 이메일 확인 처리와 토큰 폐기 판정에 사용됩니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Firebase 사용자 고유 ID (uid)
    pub local_id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub email_verified: bool,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub photo_url: Option<String>,

    #[serde(default)]
    pub phone_number: Option<String>,

    /// 계정 비활성화 여부 (true면 모든 토큰 거부)
    #[serde(default)]
    pub disabled: bool,

    /// 이 시각(초 단위 문자열) 이전에 인증된 토큰은 폐기된 것으로 간주
    #[serde(default)]
    pub valid_since: Option<String>,
}

impl UserRecord {
    /// `validSince` 값을 Unix timestamp(초)로 파싱합니다.
    ///
    /// Admin API는 이 값을 문자열로 반환하며, 토큰 폐기 이력이 없는
    /// 계정에서는 생략되거나 "0"일 수 있습니다.
    pub fn valid_since_seconds(&self) -> Option<i64> {
        self.valid_since.as_deref().and_then(|s| s.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_parses_lookup_payload() {
        let json = serde_json::json!({
            "localId": "uid-1",
            "email": "user@example.com",
            "emailVerified": false,
            "displayName": "홍길동",
            "photoUrl": "https://example.com/me.png",
            "disabled": false,
            "validSince": "1700000000",
            "lastLoginAt": "1700000123000",
            "createdAt": "1690000000000"
        });

        let record: UserRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.local_id, "uid-1");
        assert!(!record.email_verified);
        assert_eq!(record.valid_since_seconds(), Some(1_700_000_000));
    }

    #[test]
    fn test_user_record_with_minimal_fields() {
        let json = serde_json::json!({ "localId": "uid-2" });

        let record: UserRecord = serde_json::from_value(json).unwrap();
        assert!(record.email.is_none());
        assert!(!record.disabled);
        assert_eq!(record.valid_since_seconds(), None);
    }

    #[test]
    fn test_valid_since_with_invalid_number() {
        let json = serde_json::json!({ "localId": "uid-3", "validSince": "not-a-number" });

        let record: UserRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.valid_since_seconds(), None);
    }
}

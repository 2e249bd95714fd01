//! Firebase 계정 상태 모델 모듈
//!
//! - [`user_record`] - Admin API `accounts:lookup`이 반환하는 계정 레코드
//! - [`user_profile`] - Firestore `users/{uid}` 문서의 비정규화 프로필

pub mod user_profile;
pub mod user_record;

pub use user_profile::UserProfile;
pub use user_record::UserRecord;

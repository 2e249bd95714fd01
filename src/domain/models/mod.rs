//! 외부 시스템 통합 모델 모듈
//!
//! Firebase가 소유·관리하는 데이터의 로컬 표현을 정의합니다.
//! 이 서비스는 자체 저장소가 없으므로 여기의 모델들은 영속 엔티티가 아니라
//! 요청 범위에서만 살아있는 변환 대상입니다.
//!
//! # 모듈 구성
//!
//! - [`accounts`] - Firebase 계정 레코드([`accounts::user_record::UserRecord`])와
//!   Firestore 프로필 문서([`accounts::user_profile::UserProfile`])
//! - [`token`] - 검증을 통과한 ID 토큰의 클레임([`token::decoded_token::DecodedIdToken`])
//! - [`auth`] - 요청 파이프라인의 인증 컨텍스트
//!   ([`auth::authenticated_user::AuthenticatedUser`], [`auth::authentication_request::AuthMode`])

pub mod accounts;
pub mod auth;
pub mod token;

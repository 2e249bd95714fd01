//! `/account` 엔드포인트의 요청/응답 DTO 모듈
//!
//! [`request`]의 구조체들은 핸들러에서 `payload.validate()?`를 거친 후
//! [`AccountService`](crate::services::accounts::account_service::AccountService)로 전달되고,
//! [`response`]의 구조체들은 Firebase 응답에서 변환되어 클라이언트로 내려갑니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

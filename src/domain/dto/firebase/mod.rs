//! Firebase REST API 응답 DTO 모듈
//!
//! 외부 API의 와이어 포맷을 그대로 반영하는 역직렬화 전용 구조체들입니다.
//! 클라이언트 응답 DTO([`accounts`](super::accounts))와는 분리하여,
//! Firebase 와이어 포맷 변경이 API 계약에 직접 번지지 않도록 합니다.

pub mod response;

pub use response::*;

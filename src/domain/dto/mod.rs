//! 데이터 전송 객체(DTO) 모듈
//!
//! HTTP 경계를 넘나드는 데이터 구조를 정의합니다.
//! Spring Framework의 `@RequestBody` / `@ResponseBody` 대상 클래스와 동일한 역할을 하며,
//! 모든 요청 DTO는 `validator` derive를 통해 핸들러에서 검증됩니다.
//!
//! # 모듈 구성
//!
//! - [`accounts`] - `/account` 엔드포인트의 요청/응답 DTO
//! - [`firebase`] - Firebase REST API(Identity Toolkit, Secure Token, Admin)의 응답 DTO
//!
//! # 네이밍 규칙
//!
//! 클라이언트와의 JSON 계약은 camelCase를 사용하고, Rust 구조체 필드는
//! snake_case를 유지합니다. 변환은 `#[serde(rename_all = "camelCase")]`로 처리합니다.

pub mod accounts;
pub mod firebase;

pub use accounts::*;

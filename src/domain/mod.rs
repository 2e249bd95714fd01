//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다. 이 서비스는 자체 영속 상태를 갖지 않으므로
//! 도메인 계층은 HTTP 경계의 DTO와 외부 시스템(Firebase) 통합 모델로만 구성됩니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs    - 요청/응답 데이터 전송 객체 (검증 포함)
//! └── Models  - 외부 시스템 통합 모델 (Firebase 계정/토큰/프로필)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Firebase REST 클라이언트, Firestore 리포지토리)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! HTTP 경계에서 사용되는 요청/응답 구조체입니다.
//! 요청 DTO는 `validator` 기반 검증을 거친 후 서비스 계층으로 전달됩니다.
//!
//! ### [`models`] - 외부 시스템 통합 모델
//!
//! Firebase가 소유한 데이터의 로컬 표현입니다. 이 코드베이스는 이 모델들을
//! 저장하지 않으며, 요청 범위 내에서만 사용합니다.
//!
//! - 계정 레코드 / 프로필 문서 ([`models::accounts`])
//! - 검증된 ID 토큰 클레임 ([`models::token`])
//! - 인증 컨텍스트 ([`models::auth`])

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;

//! 계정 관리 서비스 백엔드
//!
//! Firebase Authentication과 Cloud Firestore에 위임하는 계정 관리 REST API입니다.
//! 자격 증명 저장, 비밀번호 해싱, 토큰 발급/검증, 이메일/SMS 발송은 전부
//! 관리형 제공자가 수행하며, 이 서비스는 DTO 검증과 제공자 호출 중계,
//! 에러 변환만 담당합니다.
//!
//! # Features
//!
//! - **계정 관리**: 가입, 이메일/소셜/전화 로그인, 비밀번호 재설정, 이메일 확인
//! - **토큰 중계**: Firebase ID/리프레시 토큰 발급·갱신 중계, 보호 라우트의 로컬 검증
//! - **프로필 관리**: Firestore `users/{uid}` 문서 조회/병합 수정
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← DTO 검증, 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 제공자 호출 오케스트레이션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌──────────────────────────────┐
//! │ Firebase REST / Firestore    │ ← 외부 관리형 제공자
//! └──────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service_backend::services::accounts::AccountService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let account_service = AccountService::instance();
//!
//! // 로그인 및 토큰 쌍 발급
//! let pair = account_service.login(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod errors;
pub mod firebase;
pub mod repositories;
pub mod services;
pub mod middlewares;
pub mod handlers;
pub mod routes;

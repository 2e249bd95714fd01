//! 비즈니스 로직 계층을 담당하는 서비스 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 각 서비스 메서드는 엔드포인트와 1:1로 대응하며, 제공자 REST 호출을
//! 순서대로 엮고 응답을 DTO로 재구성합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::accounts::account_service::AccountService;
//!
//! let account_service = AccountService::instance();
//! let pair = account_service.login(request).await?;
//! ```

pub mod accounts;

//! 계정 관리 서비스 모듈

pub mod account_service;

pub use account_service::AccountService;

//! 통합 에러 처리 모듈
//!
//! [`AppError`](errors::AppError)와 [`AppResult`](errors::AppResult)를 통해
//! 핸들러부터 Firebase 클라이언트까지 동일한 에러 타입을 사용합니다.
//! `actix_web::ResponseError` 구현으로 HTTP 응답 변환이 자동으로 이루어집니다.

pub mod errors;

pub use errors::*;

//! 요청 파이프라인 인증 컨텍스트 모듈
//!
//! 미들웨어가 검증한 토큰에서 추출한 사용자 정보와 인증 모드를 정의합니다.

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::AuthenticatedUser;
pub use authentication_request::AuthMode;

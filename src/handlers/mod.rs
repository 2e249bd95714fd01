//! HTTP 요청 핸들러 모듈
//!
//! 엔드포인트별 핸들러 함수들을 제공합니다. 각 핸들러는 Controller 계층으로,
//! DTO 검증 → 서비스 호출 → HTTP 응답 변환만 수행합니다.

pub mod accounts;

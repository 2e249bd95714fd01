//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - HTTP 서버 바인딩 관련 설정
//! - [`firebase_config`] - Firebase 프로젝트 및 REST 엔드포인트 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 필수 설정값 누락 시 부팅 시점에 패닉
//! - 서비스 계정 키는 파일 경로로만 참조
//!
//! ### 2. 타입 안전성 (Type Safety)
//!
//! - 설정값의 타입 검증
//! - 런타임 설정값 파싱 오류 처리
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{FirebaseConfig, ServerConfig};
//!
//! // 서버 설정
//! let host = ServerConfig::host();
//! let port = ServerConfig::port();
//! println!("Server will bind to {}:{}", host, port);
//!
//! // Firebase 설정
//! let api_key = FirebaseConfig::api_key();
//! let project_id = FirebaseConfig::project_id();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! # Firebase 설정
//! export FIREBASE_API_KEY="AIzaSy..."
//! export FIREBASE_PROJECT_ID="my-project"
//! export GOOGLE_APPLICATION_CREDENTIALS="./secrets/service-account.json"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export HTTP_WORKERS="4"
//!
//! # 요청 제한 설정
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct Config` |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `application.yml` | `.env` 파일 |
//! | `@ConfigurationProperties` | 구조체 기반 설정 |

pub mod server_config;
pub mod firebase_config;

pub use server_config::*;
pub use firebase_config::*;

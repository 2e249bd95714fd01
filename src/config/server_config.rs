//! 서버 바인딩 설정 관리 모듈
//!
//! HTTP 서버의 바인딩 주소, 워커 수, 요청 제한, 허용 Origin과
//! 실행 환경 구분을 환경 변수에서 읽어옵니다.

use std::env;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수를 반환합니다.
    ///
    /// # Returns
    ///
    /// 워커 수. 기본값: 4
    ///
    /// # Environment Variables
    ///
    /// - `HTTP_WORKERS`: 커스텀 워커 수 설정
    pub fn workers() -> usize {
        env::var("HTTP_WORKERS")
            .unwrap_or_else(|_| "4".to_string())
            .parse()
            .unwrap_or(4)
    }

    /// CORS에서 허용할 Origin 목록을 반환합니다.
    ///
    /// `CORS_ALLOWED_ORIGINS`를 쉼표로 구분하여 읽습니다. 미설정 시
    /// 로컬 개발용 기본 Origin을 사용하며, 운영 환경에서는 경고를 남깁니다.
    ///
    /// # Examples
    ///
    /// ```bash
    /// export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
    /// ```
    pub fn cors_allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => {
                if Environment::current().is_production() {
                    log::warn!("CORS_ALLOWED_ORIGINS 미설정: 로컬 개발용 기본 Origin 사용");
                }
                vec![
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:3000".to_string(),
                    "http://localhost:8080".to_string(),
                    "http://127.0.0.1:8080".to_string(),
                ]
            }
        }
    }
}

/// 요청 제한(Rate Limiting) 설정
#[derive(Debug)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 순간 허용량 (버스트)
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경 변수에서 요청 제한 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// - `RATE_LIMIT_PER_SECOND`: 초당 허용 요청 수 (기본값: 100)
    /// - `RATE_LIMIT_BURST_SIZE`: 버스트 허용량 (기본값: 200)
    ///
    /// # Examples
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    ///
    /// # .env.prod (운영 환경)
    /// RATE_LIMIT_PER_SECOND=500
    /// RATE_LIMIT_BURST_SIZE=1000
    /// ```
    pub fn load() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}

/// 서비스 실행 환경 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT`(우선) 또는 `PROFILE` 환경 변수에서 현재 환경을 판별합니다.
    ///
    /// 인식하지 못하는 값은 Development로 취급합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("PROFILE"))
            .unwrap_or_else(|_| "dev".to_string());

        Self::from_str(&raw)
    }

    fn from_str(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "prod" | "production" => Environment::Production,
            "staging" => Environment::Staging,
            "test" => Environment::Test,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("HTTP_WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str("prod"), Environment::Production);
        assert_eq!(Environment::from_str("PRODUCTION"), Environment::Production);
        assert_eq!(Environment::from_str("staging"), Environment::Staging);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("unknown"), Environment::Development);
    }

    #[test]
    fn test_production_flag() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }

    #[test]
    fn test_rate_limit_defaults() {
        if env::var("RATE_LIMIT_PER_SECOND").is_err() && env::var("RATE_LIMIT_BURST_SIZE").is_err()
        {
            let config = RateLimitConfig::load();
            assert_eq!(config.per_second, 100);
            assert_eq!(config.burst_size, 200);
        }
    }
}

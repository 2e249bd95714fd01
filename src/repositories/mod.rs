//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! Firestore REST API를 통해 문서를 읽고 쓰는 리포지토리들을 제공합니다.
//! 모든 리포지토리는 `ServiceLocator`에 싱글톤으로 등록되어 서비스 계층에
//! 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::profiles::profile_repository::ProfileRepository;
//!
//! let profile_repo = ProfileRepository::instance();
//! let profile = profile_repo.find_by_uid("uid-1").await?;
//! ```

pub mod profiles;

//! ID 토큰 클레임 모델 모듈

pub mod decoded_token;

pub use decoded_token::{DecodedIdToken, FirebaseClaims};

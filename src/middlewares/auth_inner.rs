//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::collections::HashMap;
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::core::registry::ServiceLocator;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::auth::authentication_request::AuthMode;
use crate::errors::{AppError, AppResult};
use crate::firebase::token_verifier::TokenVerifier;

/// 모바일 웹뷰처럼 헤더를 제어할 수 없는 클라이언트를 위한 쿼리 매개변수 키
const TOKEN_QUERY_PARAM: &str = "accessToken";

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();

        Box::pin(async move {
            let auth_result = authenticate_request(&req).await;

            match (&mode, auth_result) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "authentication_required",
                        "message": "유효한 인증 토큰이 필요합니다"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
                // Required 모드에서 인증 성공
                (AuthMode::Required, Ok(user)) => {
                    log::debug!("인증 성공: uid={}", user.uid);
                    req.extensions_mut().insert(user);
                }
                // Optional 모드에서 인증 성공
                (AuthMode::Optional, Ok(user)) => {
                    log::debug!("선택적 인증 성공: uid={}", user.uid);
                    req.extensions_mut().insert(user);
                }
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 ID 토큰을 추출하고 검증합니다.
async fn authenticate_request(req: &ServiceRequest) -> AppResult<AuthenticatedUser> {
    let token = extract_token(req)?;

    let verifier = ServiceLocator::get::<TokenVerifier>();
    let claims = verifier.verify(&token).await?;

    Ok(AuthenticatedUser::from(&claims))
}

/// `Authorization: Bearer` 헤더 또는 `accessToken` 쿼리 매개변수에서
/// 토큰을 추출합니다. 헤더가 우선합니다.
fn extract_token(req: &ServiceRequest) -> AppResult<String> {
    if let Some(header) = req.headers().get("Authorization") {
        let value = header.to_str().map_err(|_| {
            AppError::AuthenticationError("Authorization 헤더가 올바르지 않습니다".to_string())
        })?;

        return extract_bearer_token(value).map(str::to_string);
    }

    let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map_err(|_| AppError::AuthenticationError("쿼리 문자열 해석 실패".to_string()))?;

    query
        .get(TOKEN_QUERY_PARAM)
        .filter(|token| !token.is_empty())
        .cloned()
        .ok_or_else(|| AppError::AuthenticationError("인증 토큰이 없습니다".to_string()))
}

/// `Bearer {token}` 형식의 헤더 값에서 토큰 부분을 추출합니다.
fn extract_bearer_token(header_value: &str) -> AppResult<&str> {
    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| {
            AppError::AuthenticationError("Bearer 토큰 형식이 아닙니다".to_string())
        })?
        .trim();

    if token.is_empty() {
        return Err(AppError::AuthenticationError("토큰이 비어 있습니다".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token_from_header_value() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_extract_bearer_token_rejects_other_schemes() {
        assert!(extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(extract_bearer_token("abc.def.ghi").is_err());
        assert!(extract_bearer_token("Bearer ").is_err());
    }

    #[test]
    fn test_extract_token_prefers_authorization_header() {
        let req = TestRequest::get()
            .uri("/account/profile?accessToken=query-token")
            .insert_header(("Authorization", "Bearer header-token"))
            .to_srv_request();

        assert_eq!(extract_token(&req).unwrap(), "header-token");
    }

    #[test]
    fn test_extract_token_falls_back_to_query_param() {
        let req = TestRequest::get()
            .uri("/account/profile?accessToken=query-token")
            .to_srv_request();

        assert_eq!(extract_token(&req).unwrap(), "query-token");
    }

    #[test]
    fn test_extract_token_without_credentials() {
        let req = TestRequest::get().uri("/account/profile").to_srv_request();

        assert!(extract_token(&req).is_err());
    }

    #[test]
    fn test_extract_token_rejects_empty_query_value() {
        let req = TestRequest::get()
            .uri("/account/profile?accessToken=")
            .to_srv_request();

        assert!(extract_token(&req).is_err());
    }
}

use super::{dto::JwtClaims, User};
use anyhow::anyhow;
use axum::{
    body::Body,
    http::{header::AUTHORIZATION, HeaderValue, Request, Response, StatusCode},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tower_http::validate_request::ValidateRequest;

///
/// Middleware that validates JWT in Authorization header.
/// If Authorization is correct [User] is added to request extensions.
///
#[derive(Clone)]
pub struct JwtAuthorizationValidator {
    inner: Arc<JwtAuthorizationValidatorInner>,
}

struct JwtAuthorizationValidatorInner {
    key: DecodingKey,
    validation: Validation,
}

impl JwtAuthorizationValidator {
    pub fn new(key: DecodingKey, algorithms: Vec<Algorithm>) -> Self {
        let mut validation = Validation::default();
        validation.algorithms = algorithms;

        let inner = JwtAuthorizationValidatorInner { key, validation };

        Self {
            inner: Arc::new(inner),
        }
    }

    fn try_parse_authorization_header(
        &self,
        authorization_header: Option<&HeaderValue>,
    ) -> anyhow::Result<User> {
        let Some(authorization_header) = authorization_header else {
            return Err(anyhow!("missing Authorization header"));
        };
        let Ok(authorization_value) = authorization_header.to_str() else {
            return Err(anyhow!("illegal character in Authorization header"));
        };
        let Some(token) = authorization_value.strip_prefix("Bearer ") else {
            return Err(anyhow!("unsupported authorization type"));
        };
        let token_data =
            jsonwebtoken::decode::<JwtClaims>(token, &self.inner.key, &self.inner.validation)?;

        Ok(User::new(token_data.claims.user_id))
    }
}

impl<B> ValidateRequest<B> for JwtAuthorizationValidator {
    type ResponseBody = Body;

    fn validate(&mut self, request: &mut Request<B>) -> Result<(), Response<Self::ResponseBody>> {
        let authorization_header = request.headers().get(AUTHORIZATION);

        let user = self
            .try_parse_authorization_header(authorization_header)
            .map_err(|err| {
                tracing::warn!(%err, "auth error");
                let mut response = Response::new(Body::empty());
                *response.status_mut() = StatusCode::UNAUTHORIZED;
                response
            })?;

        request.extensions_mut().insert(user);

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use axum::{http::Method, routing::get, Extension, Router};
    use jsonwebtoken::{EncodingKey, Header};
    use serde::Serialize;
    use tower::ServiceExt;
    use tower_http::validate_request::ValidateRequestHeaderLayer;

    pub const SECRET: &[u8] = b"some secret";

    #[derive(Serialize)]
    struct TestClaims {
        user_id: i64,
        exp: i64,
    }

    pub fn create_jwt(user_id: i64, exp: i64, secret: &[u8]) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &TestClaims { user_id, exp },
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    pub fn create_valid_jwt(user_id: i64) -> String {
        // 31.12.9999
        create_jwt(user_id, 253402210800, SECRET)
    }

    #[tokio::test]
    async fn missing_authorization_header() {
        test_invalid_authorization_header(None).await;
    }

    #[tokio::test]
    async fn invalid_authorization_header() {
        test_invalid_authorization_header("invalid characters ąćś").await;
    }

    #[tokio::test]
    async fn authorization_type_not_bearer() {
        test_invalid_authorization_header("NotBearer").await;
    }

    #[tokio::test]
    async fn invalid_token() {
        test_invalid_authorization_header("Bearer that's not correct JWT").await;
    }

    #[tokio::test]
    async fn expired_token() {
        let authorization = format!("Bearer {}", create_jwt(1, 12312, SECRET));
        test_invalid_authorization_header(authorization.as_str()).await;
    }

    #[tokio::test]
    async fn invalid_signature() {
        let authorization = format!("Bearer {}", create_jwt(1, 253402210800, b"Wrong key"));
        test_invalid_authorization_header(authorization.as_str()).await;
    }

    #[tokio::test]
    async fn correct_request_extension() {
        let authorization = format!("Bearer {}", create_valid_jwt(42));

        let router = Router::new()
            .route(
                "/",
                get(|Extension(user): Extension<User>| async move {
                    match user.id == 42 {
                        true => StatusCode::OK,
                        false => StatusCode::INTERNAL_SERVER_ERROR,
                    }
                }),
            )
            .route_layer(ValidateRequestHeaderLayer::custom(
                JwtAuthorizationValidator::new(
                    DecodingKey::from_secret(SECRET),
                    vec![Algorithm::HS256],
                ),
            ));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(AUTHORIZATION, authorization)
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK)
    }

    async fn test_invalid_authorization_header(authorization: impl Into<Option<&str>>) {
        let router = Router::new()
            .route("/", get(|| async { StatusCode::OK }))
            .route_layer(ValidateRequestHeaderLayer::custom(
                JwtAuthorizationValidator::new(
                    DecodingKey::from_secret(SECRET),
                    vec![Algorithm::HS256],
                ),
            ));

        let mut request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        if let Some(authorization) = authorization.into() {
            request
                .headers_mut()
                .insert(AUTHORIZATION, HeaderValue::try_from(authorization).unwrap());
        }

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

/// HTTP middleware for comment-service
///
/// JWT authentication: requests entering the authed scope must carry a
/// valid Bearer token. The authenticated user's id is stored in request
/// extensions and extracted by handlers via [`UserId`].
use crate::auth;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use uuid::Uuid;

/// Extracted user identifier stored in request extensions after auth.
#[derive(Debug, Clone)]
pub struct UserId(pub Uuid);

/// Actix middleware that validates a Bearer token.
pub struct JwtAuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct JwtAuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| ErrorUnauthorized("Missing Authorization header"))?;

            let token = auth_header
                .strip_prefix("Bearer ")
                .ok_or_else(|| ErrorUnauthorized("Invalid Authorization scheme"))?;

            let claims = auth::validate_token(token)
                .map_err(|_| ErrorUnauthorized("Invalid or expired token"))?;

            let user_id = Uuid::parse_str(&claims.claims.sub)
                .map_err(|_| ErrorUnauthorized("Invalid user ID"))?;

            req.extensions_mut().insert(UserId(user_id));

            service.call(req).await
        })
    }
}

impl FromRequest for UserId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<UserId>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized("User ID missing")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::test_keys::ensure_test_keys;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};

    async fn whoami(user_id: UserId) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "user_id": user_id.0 }))
    }

    macro_rules! guarded_app {
        () => {
            test::init_service(App::new().service(
                web::scope("/api/v1")
                    .wrap(JwtAuthMiddleware)
                    .route("/whoami", web::get().to(whoami)),
            ))
            .await
        };
    }

    // Rejections surface as middleware errors, so resolve the final status
    // through the error's response when the service call errors out.
    macro_rules! response_status {
        ($app:expr, $req:expr) => {
            match test::try_call_service($app, $req).await {
                Ok(resp) => resp.status(),
                Err(err) => err.error_response().status(),
            }
        };
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        ensure_test_keys();
        let app = guarded_app!();

        let req = test::TestRequest::get().uri("/api/v1/whoami").to_request();
        assert_eq!(response_status!(&app, req), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn non_bearer_scheme_is_unauthorized() {
        ensure_test_keys();
        let app = guarded_app!();

        let req = test::TestRequest::get()
            .uri("/api/v1/whoami")
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_request();
        assert_eq!(response_status!(&app, req), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn garbage_token_is_unauthorized() {
        ensure_test_keys();
        let app = guarded_app!();

        let req = test::TestRequest::get()
            .uri("/api/v1/whoami")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        assert_eq!(response_status!(&app, req), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn valid_token_reaches_handler_with_user_id() {
        ensure_test_keys();
        let app = guarded_app!();

        let user_id = Uuid::new_v4();
        let token = crate::auth::generate_access_token(user_id, "u@example.com", "u").unwrap();

        let req = test::TestRequest::get()
            .uri("/api/v1/whoami")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["user_id"], user_id.to_string());
    }
}

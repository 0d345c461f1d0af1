/// OpenAPI documentation for Comment Service
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Comment Service API",
        version = "1.0.0",
        description = "Comment management service. Creates comments attached to posts and updates comment content, with ownership-based authorization: only a comment's owner may change it.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8082", description = "Development server"),
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "comments", description = "Comment creation and content updates"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token from the identity service"))
                        .build(),
                ),
            )
        }
    }
}

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}

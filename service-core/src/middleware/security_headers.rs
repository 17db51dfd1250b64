use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};

/// Path prefix of the Swagger UI.
pub const DOCS_PATH: &str = "/api-docs";
/// Path of the raw OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/.well-known/openapi.json";

pub fn is_docs_route(path: &str) -> bool {
    path.starts_with(DOCS_PATH) || path == OPENAPI_JSON_PATH
}

pub async fn security_headers_middleware(req: Request, next: Next) -> impl IntoResponse {
    let is_swagger_route = is_docs_route(req.uri().path());

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        header::HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::X_XSS_PROTECTION,
        header::HeaderValue::from_static("1; mode=block"),
    );
    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        header::HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );

    if is_swagger_route {
        // Swagger UI ships inline scripts and styles
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            header::HeaderValue::from_static(
                "default-src 'self'; \
                 script-src 'self' 'unsafe-inline'; \
                 style-src 'self' 'unsafe-inline'; \
                 img-src 'self' data:; \
                 font-src 'self'; \
                 connect-src 'self'",
            ),
        );
        headers.insert(
            header::X_FRAME_OPTIONS,
            header::HeaderValue::from_static("SAMEORIGIN"),
        );
    } else {
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            header::HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
        );
        headers.insert(
            header::X_FRAME_OPTIONS,
            header::HeaderValue::from_static("DENY"),
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docs_routes_are_recognised() {
        assert!(is_docs_route("/api-docs"));
        assert!(is_docs_route("/api-docs/index.html"));
        assert!(is_docs_route("/.well-known/openapi.json"));
        assert!(!is_docs_route("/api/properties"));
    }
}

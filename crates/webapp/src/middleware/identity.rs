use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{
    abstract_trait::{DynIdentityService, DynJwtService},
    domain::responses::Principal,
    errors::ErrorResponse,
};
use tracing::error;

/// Resolves the acting principal for every request and stores it as an
/// `Option<Principal>` extension. Requests without a usable token proceed
/// as anonymous; the permission checks downstream reject them where it
/// matters. Only a storage fault aborts the request here.
pub async fn identity_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    Extension(identity): Extension<DynIdentityService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let principal: Option<Principal> = match token {
        Some(token) => match jwt.verify_token(&token, "access") {
            Ok(user_id) => match identity.resolve_principal(user_id as i32).await {
                Ok(principal) => principal,
                Err(err) => {
                    error!("❌ Failed to resolve principal: {err:?}");
                    return Err((
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ErrorResponse {
                            status: "error".to_string(),
                            message: "Failed to resolve the current user".to_string(),
                        }),
                    ));
                }
            },
            // Expired or tampered tokens demote the caller to anonymous.
            Err(_) => None,
        },
        None => None,
    };

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

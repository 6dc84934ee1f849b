use crate::middleware::validate::ValidatedJson;
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, response::Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;
use shared::{
    abstract_trait::{DynLoginService, DynRegisterService},
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{
            ApiResponse, LoginPageResponse, LogoutResponse, Principal, RegisterPageResponse,
            RegisterResponse, TokenResponse,
        },
    },
    errors::{ErrorResponse, HttpError, ServiceError},
};

use super::validation_failure;

fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(("token", token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build("token").path("/").build()
}

#[utoipa::path(
    get,
    path = "/login",
    tag = "Auth",
    responses(
        (status = 200, description = "Login form, or a redirect outcome for a caller that is already signed in", body = ApiResponse<LoginPageResponse>)
    )
)]
pub async fn login_page_handler(
    Extension(principal): Extension<Option<Principal>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = match principal {
        Some(principal) => ApiResponse::redirect(
            format!("Already logged in as {}", principal.username),
            LoginPageResponse {
                authenticated: true,
                username: Some(principal.username),
            },
        ),
        None => ApiResponse::success(
            "Please provide your credentials",
            LoginPageResponse {
                authenticated: false,
                username: None,
            },
        ),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login_handler(
    jar: CookieJar,
    Extension(service): Extension<DynLoginService>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;

    let jar = jar.add(session_cookie(&response.data.access_token));

    Ok((jar, (StatusCode::OK, Json(response))))
}

#[utoipa::path(
    get,
    path = "/register",
    tag = "Auth",
    responses(
        (status = 200, description = "Registration form with the available groups", body = ApiResponse<RegisterPageResponse>)
    )
)]
pub async fn register_page_handler(
    Extension(service): Extension<DynRegisterService>,
) -> Result<impl IntoResponse, HttpError> {
    let groups = service.available_groups().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Provide registration details",
            RegisterPageResponse { groups: groups.data },
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created; a warning status signals an unknown group name", body = ApiResponse<RegisterResponse>),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn register_handler(
    jar: CookieJar,
    Extension(service): Extension<DynRegisterService>,
    ValidatedJson(body): ValidatedJson<RegisterRequest>,
) -> Result<Response, HttpError> {
    match service.register(&body).await {
        Ok(response) => {
            let jar = jar.add(session_cookie(&response.data.access_token));
            Ok((jar, (StatusCode::CREATED, Json(response))).into_response())
        }
        Err(ServiceError::Validation(errors)) => {
            // Re-display the submission, with the credential fields kept out.
            let values = json!({
                "username": body.username,
                "email": body.email,
                "first_name": body.first_name,
                "last_name": body.last_name,
                "group": body.group,
            });
            Ok(validation_failure(errors, &values))
        }
        Err(err) => Err(err.into()),
    }
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Session ended, or a no-active-session outcome", body = ApiResponse<LogoutResponse>)
    )
)]
pub async fn logout_handler(
    jar: CookieJar,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<impl IntoResponse, HttpError> {
    let jar = jar.remove(expired_session_cookie());

    let response = match principal {
        Some(principal) => ApiResponse::success(
            format!("Session closed. See you soon, {}!", principal.username),
            LogoutResponse {
                username: Some(principal.username),
            },
        ),
        None => ApiResponse::info(
            "No active session",
            LogoutResponse { username: None },
        ),
    };

    Ok((jar, (StatusCode::OK, Json(response))))
}

use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{
    abstract_trait::DynJwtService,
    domain::AuthenticatedBuyer,
    errors::{HttpError, ServiceError},
};
use tracing::warn;

/// Resolves the caller from the `token` cookie or a bearer header and stores
/// the [`shared::domain::AuthenticatedBuyer`] as a request extension.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let Some(token) = token else {
        return Err(HttpError::Unauthorized(
            "You are not logged in, please provide token".to_string(),
        ));
    };

    let buyer = jwt.verify_token(&token, "access").map_err(|err| {
        warn!("❌ Rejected access token: {err}");
        HttpError::Unauthorized("Invalid token".to_string())
    })?;

    req.extensions_mut().insert(buyer);

    Ok(next.run(req).await)
}

/// Admits only callers with the buyer role. Runs ahead of body extraction,
/// so other roles get 403 whatever they send.
pub async fn buyer_only(req: Request<Body>, next: Next) -> Result<impl IntoResponse, HttpError> {
    match req.extensions().get::<AuthenticatedBuyer>() {
        Some(buyer) if buyer.is_buyer() => Ok(next.run(req).await),
        Some(buyer) => {
            warn!("❌ Role {} may not place orders", buyer.role);
            Err(ServiceError::Forbidden("Users only".to_string()).into())
        }
        None => Err(HttpError::Unauthorized(
            "You are not logged in, please provide token".to_string(),
        )),
    }
}

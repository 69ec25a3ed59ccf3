use crate::{
    abstract_trait::order::DynOrderPlacementService,
    domain::requests::order::CreateOrderRequest,
    middleware::{
        jwt::{auth_middleware, buyer_only},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Json, Router,
    extract::Extension,
    handler::Handler,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{domain::AuthenticatedBuyer, errors::HttpError};
use std::sync::Arc;

pub async fn get_orders(
    Extension(service): Extension<DynOrderPlacementService>,
    buyer: Option<Extension<AuthenticatedBuyer>>,
) -> Result<impl IntoResponse, HttpError> {
    let buyer = buyer.map(|Extension(buyer)| buyer);
    let response = service.list_orders(buyer.as_ref()).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn create_order(
    Extension(service): Extension<DynOrderPlacementService>,
    buyer: Option<Extension<AuthenticatedBuyer>>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let buyer = buyer.map(|Extension(buyer)| buyer);
    let response = service.create_order(buyer.as_ref(), &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/orders",
            get(get_orders).post(create_order.layer(middleware::from_fn(buyer_only))),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_placement.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}

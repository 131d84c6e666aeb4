use crate::StateTrait;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    ServiceBuilderExt,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
};

pub fn middlewares<S: StateTrait>(state: S, router: Router<S>) -> Router {
    // Credentials are allowed, so the wildcard policy has to be expressed by
    // mirroring the request instead of `Any`.
    let cors_layer = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let middlewares = ServiceBuilder::new()
        .catch_panic()
        .propagate_x_request_id()
        .compression()
        .decompression()
        .layer(cors_layer)
        .into_inner();

    router.layer(middlewares).with_state(state)
}

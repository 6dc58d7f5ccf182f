mod address;
mod admin;
mod auth;
mod cart;
mod category;
mod order;
mod product;
mod review;
mod user;

use crate::state::AppState;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::address::address_routes;
pub use self::admin::admin_routes;
pub use self::auth::auth_routes;
pub use self::cart::cart_routes;
pub use self::category::category_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;
pub use self::review::review_routes;
pub use self::user::user_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_user_handler,
        auth::login_user_handler,
        auth::refresh_token_handler,
        auth::get_me_handler,

        user::update_profile_handler,

        address::get_addresses_handler,
        address::create_address_handler,
        address::update_address_handler,
        address::delete_address_handler,

        category::get_categories_handler,
        category::get_category_handler,
        category::create_category_handler,
        category::update_category_handler,
        category::delete_category_handler,

        product::get_products_handler,
        product::get_product_handler,
        product::create_product_handler,
        product::update_product_handler,
        product::deactivate_product_handler,

        cart::get_cart_handler,
        cart::add_cart_item_handler,
        cart::update_cart_item_handler,
        cart::remove_cart_item_handler,

        order::place_order_handler,
        order::get_orders_handler,
        order::get_order_detail_handler,

        review::get_product_reviews_handler,
        review::create_review_handler,
        review::update_review_handler,
        review::delete_review_handler,
        review::approve_review_handler,

        admin::get_dashboard_handler,
        admin::get_all_orders_handler,
        admin::update_order_status_handler,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "User", description = "Profile endpoints"),
        (name = "Address", description = "Address book endpoints"),
        (name = "Category", description = "Category endpoints"),
        (name = "Product", description = "Product catalog endpoints"),
        (name = "Cart", description = "Shopping cart endpoints"),
        (name = "Order", description = "Checkout and order endpoints"),
        (name = "Review", description = "Product review endpoints"),
        (name = "Admin", description = "Store administration endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                )),
            );
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()))
            .merge(address_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(cart_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(review_routes(shared_state.clone()))
            .merge(admin_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app =
            app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 API Documentation available at:");
        println!("   📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

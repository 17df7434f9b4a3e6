use axum::routing::{get, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_record_handler, delete_record_handler, get_record_handler, health_handler,
    list_records_handler, update_record_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/records",
                Router::new()
                    .route("/", get(list_records_handler))
                    .route(
                        "/{key}",
                        get(get_record_handler)
                            .post(create_record_handler)
                            .delete(delete_record_handler),
                    )
                    .route("/{key}/{value}", put(update_record_handler)),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

use async_graphql::extensions::Tracing;
use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tower_http::trace::TraceLayer;

mod schema;

use crate::catalog::Catalog;
pub use schema::{Mutation, Query};

pub type CatalogSchema = Schema<Query, Mutation, EmptySubscription>;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

#[axum::debug_handler]
async fn graphql_handler(
    State(schema): State<CatalogSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub fn make_schema(catalog: Catalog) -> CatalogSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(catalog)
        .extension(Tracing)
        .finish()
}

pub fn make_app(catalog: Catalog) -> Router {
    let schema = make_schema(catalog);

    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .with_state(schema)
        .layer(TraceLayer::new_for_http())
}

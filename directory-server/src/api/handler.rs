//! GraphQL HTTP handlers

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse},
};

use crate::api::AppContext;
use crate::auth::resolve_identity;

/// Execute a GraphQL request
///
/// The bearer token, if any, is resolved into an identity and attached to
/// the request. A missing or invalid token simply produces an anonymous
/// request.
pub async fn execute(
    State(app): State<AppContext>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let mut request = req.into_inner();
    if let Some(identity) = resolve_identity(app.state.get_jwt_service(), auth_header) {
        request = request.data(identity);
    }

    app.schema.execute(request).await.into()
}

/// GraphQL sandbox page
pub async fn sandbox() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Employee Directory - Apollo Sandbox</title>
    <style>body { margin: 0; overflow: hidden; }</style>
</head>
<body>
    <div id="sandbox" style="width: 100vw; height: 100vh;"></div>
    <script src="https://embeddable-sandbox.cdn.apollographql.com/_latest/embeddable-sandbox.umd.production.min.js"></script>
    <script>
        new window.EmbeddedSandbox({
            target: '#sandbox',
            initialEndpoint: window.location.origin + '/graphql',
        });
    </script>
</body>
</html>"#,
    )
}

use std::fmt::Write;

use axum::{
    response::{Html, IntoResponse},
    Json,
};
use utoipa::{openapi::path::PathItemType, OpenApi};

use crate::models::{Wish, WishPayload};

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::list_wishes,
        crate::handlers::get_wish,
        crate::handlers::create_wish,
        crate::handlers::update_wish,
        crate::handlers::delete_wish,
    ),
    components(schemas(Wish, WishPayload)),
    tags(
        (name = "wishes", description = "Wishlist management endpoints")
    )
)]
pub struct ApiDoc;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>Wishlist API Documentation</title>
        <meta charset="utf-8"/>
        <meta name="viewport" content="width=device-width, initial-scale=1">
        <style>
            body { margin: 0; padding: 20px; font-family: Arial, sans-serif; }
            h1 { color: #333; }
            .endpoint { margin-bottom: 20px; padding: 15px; background: #f5f5f5; border-radius: 5px; }
            .method { font-weight: bold; color: #fff; padding: 3px 8px; border-radius: 3px; display: inline-block; margin-right: 10px; }
            .get { background: #61affe; }
            .post { background: #49cc90; }
            .put { background: #fca130; }
            .delete { background: #f93e3e; }
            .path { font-family: monospace; font-size: 16px; }
            .description { margin: 10px 0; }
        </style>
    </head>
    <body>
        <h1>Wishlist API Documentation</h1>
"#;

const PAGE_FOOT: &str = r#"
        <div style="margin-top: 30px;">
            <h3>Interactive Documentation</h3>
            <p>For an interactive API documentation, visit the <a href="/swagger-ui">Swagger UI</a>.</p>
            <p>Or download the <a href="/openapi.json">OpenAPI specification</a>.</p>
        </div>
    </body>
</html>
"#;

fn method_name(method: &PathItemType) -> &'static str {
    match method {
        PathItemType::Get => "GET",
        PathItemType::Post => "POST",
        PathItemType::Put => "PUT",
        PathItemType::Delete => "DELETE",
        PathItemType::Patch => "PATCH",
        _ => "OTHER",
    }
}

/// Render one block per documented operation.
fn render_docs(api: &utoipa::openapi::OpenApi) -> String {
    let mut html = String::from(PAGE_HEAD);

    for (path, item) in &api.paths.paths {
        for (method, operation) in &item.operations {
            let method = method_name(method);
            let summary = operation.summary.as_deref().unwrap_or_default();
            let _ = write!(
                html,
                r#"
        <div class="endpoint">
            <div><span class="method {class}">{method}</span> <span class="path">{path}</span></div>
            <div class="description">{summary}</div>"#,
                class = method.to_lowercase(),
            );
            if let Some(description) = &operation.description {
                let _ = write!(html, r#"
            <div>{description}</div>"#);
            }
            html.push_str("\n        </div>\n");
        }
    }

    html.push_str(PAGE_FOOT);
    html
}

/// Serve the endpoint overview as HTML
pub async fn serve_docs() -> impl IntoResponse {
    Html(render_docs(&ApiDoc::openapi()))
}

/// Serve the OpenAPI JSON specification
pub async fn serve_openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

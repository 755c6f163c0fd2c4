use utoipa::OpenApi;

use crate::routes::{generate, health, history, templates};

#[derive(OpenApi)]
#[openapi(info(
    title = "postforge-server",
    description = "AI social-content generation API",
    version = "0.1.0",
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(generate::GenerateApi::openapi());
    root.merge(templates::TemplatesApi::openapi());
    root.merge(history::HistoryApi::openapi());
    root
}

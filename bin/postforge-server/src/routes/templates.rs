//! Predefined generation templates.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use utoipa::OpenApi;

use crate::schemas::templates::TemplateDescriptor;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_templates), components(schemas(TemplateDescriptor)))]
pub struct TemplatesApi;

/// Register template routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/templates", get(get_templates))
}

/// Fixed list of example templates (`GET /templates`).
///
/// Independent of request history; always returns the same descriptors.
#[utoipa::path(
    get,
    path = "/templates",
    tag = "templates",
    responses(
        (status = 200, description = "Template list", body = Value)
    )
)]
pub async fn get_templates() -> Json<Value> {
    Json(json!({ "templates": descriptors() }))
}

fn descriptors() -> Vec<TemplateDescriptor> {
    vec![
        TemplateDescriptor {
            id: "linkedin_leadership".into(),
            name: "LinkedIn Leadership".into(),
            platform: "LinkedIn".into(),
            tone: "Professional".into(),
            length: "medium".into(),
            description: "Post positioning leaders and specialists".into(),
            example_topic: "How to build a culture of innovation in your team".into(),
        },
        TemplateDescriptor {
            id: "instagram_promo".into(),
            name: "Instagram Promotion".into(),
            platform: "Instagram".into(),
            tone: "Casual".into(),
            length: "short".into(),
            description: "Product or service announcement with high engagement".into(),
            example_topic: "Launch of the new Digital Marketing course".into(),
        },
        TemplateDescriptor {
            id: "facebook_community".into(),
            name: "Facebook Engagement".into(),
            platform: "Facebook".into(),
            tone: "Casual".into(),
            length: "long".into(),
            description: "Post designed to spark discussion and interaction".into(),
            example_topic: "What are the biggest challenges of remote work today?".into(),
        },
        TemplateDescriptor {
            id: "twitter_thread".into(),
            name: "Educational Thread".into(),
            platform: "Twitter/X".into(),
            tone: "Technical".into(),
            length: "medium".into(),
            description: "Thread that teaches a complex concept".into(),
            example_topic: "5 AI concepts every professional should know".into(),
        },
    ]
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn template_list_is_fixed() {
        let Json(body) = get_templates().await;
        let templates = body["templates"].as_array().unwrap();
        assert_eq!(templates.len(), 4);
        assert_eq!(templates[0]["id"], "linkedin_leadership");
        assert_eq!(templates[3]["platform"], "Twitter/X");
    }

    #[test]
    fn descriptors_reference_known_catalog_names() {
        let catalog = postforge_core::Catalog::default();
        for d in descriptors() {
            assert!(catalog.platform_names().contains(&d.platform.as_str()));
            assert!(catalog.tone_names().contains(&d.tone.as_str()));
        }
    }
}

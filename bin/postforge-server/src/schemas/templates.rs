//! The fixed template descriptors returned by `GET /templates`.

use serde::Serialize;
use utoipa::ToSchema;

/// A predefined generation template the front-end can offer as a preset.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TemplateDescriptor {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub tone: String,
    pub length: String,
    pub description: String,
    pub example_topic: String,
}

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::ExperienceType;

/// Member name search, shared by the one-shot endpoint and search sessions
///
/// Length is checked against the configured minimum when the query is
/// turned into a `SearchQuery`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Request to create a showcase project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 5, message = "Title must be at least 5 characters long."))]
    pub title: String,
    #[validate(length(min = 20, message = "Description must be at least 20 characters long."))]
    pub description: String,
    #[serde(alias = "source_code", rename = "sourceCode", default)]
    pub source_code: Option<String>,
    /// Comma-separated component list
    #[validate(length(min = 3, message = "Please list at least one component."))]
    pub components: String,
    #[validate(length(min = 1, message = "You must select at least one member."))]
    #[serde(alias = "done_by", rename = "doneBy", default)]
    pub done_by: Vec<String>,
    #[serde(alias = "circuit_diagram_url", rename = "circuitDiagramUrl", default)]
    pub circuit_diagram_url: Option<String>,
}

impl CreateProjectRequest {
    pub fn component_list(&self) -> Vec<String> {
        self.components
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Request to add an experience entry for the current user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExperienceRequest {
    #[validate(length(min = 3, message = "Title must be at least 3 characters long."))]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: ExperienceType,
    #[validate(length(min = 2, message = "Location is required."))]
    pub location: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters long."))]
    pub description: String,
    #[validate(length(min = 3, message = "Please provide a date or date range."))]
    pub date: String,
}

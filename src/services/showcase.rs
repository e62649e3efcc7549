use crate::models::{
    CreateExperienceRequest, CreateProjectRequest, Experience, Member, Project,
};
use std::sync::RwLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Project title has no usable characters: {0:?}")]
    EmptySlug(String),
}

/// Projects and experience entries
///
/// Projects are listed in creation order; experience entries newest first.
pub struct ShowcaseStore {
    projects: RwLock<Vec<Project>>,
    experiences: RwLock<Vec<Experience>>,
}

impl ShowcaseStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: RwLock::new(projects),
            experiences: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded() -> Self {
        Self::new(default_projects())
    }

    pub fn list_projects(&self) -> Vec<Project> {
        self.projects.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn get_project(&self, id: &str) -> Result<Project, ShowcaseError> {
        self.projects
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ShowcaseError::ProjectNotFound(id.to_string()))
    }

    /// Projects crediting the member by name
    pub fn projects_for_member(&self, member: &Member) -> Vec<Project> {
        self.projects
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|p| p.is_done_by(member))
            .cloned()
            .collect()
    }

    pub fn projects_created_by(&self, user_id: &str) -> Vec<Project> {
        self.projects
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|p| p.creator_id.as_deref() == Some(user_id))
            .cloned()
            .collect()
    }

    /// Store a new project; the request must already be validated
    pub fn create_project(
        &self,
        req: &CreateProjectRequest,
        creator_id: &str,
    ) -> Result<Project, ShowcaseError> {
        let base = slugify(&req.title);
        if base.is_empty() {
            return Err(ShowcaseError::EmptySlug(req.title.clone()));
        }

        let mut projects = self.projects.write().unwrap_or_else(|e| e.into_inner());
        let id = unique_slug(&base, |candidate| projects.iter().any(|p| p.id == candidate));

        let project = Project {
            circuit_diagram_url: req
                .circuit_diagram_url
                .clone()
                .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/800/600", id)),
            circuit_diagram_image_hint: "circuit diagram".to_string(),
            id,
            title: req.title.clone(),
            description: req.description.clone(),
            source_code: req.source_code.clone().unwrap_or_default(),
            components: req.component_list(),
            done_by: req.done_by.clone(),
            created_at: Some(chrono::Utc::now()),
            creator_id: Some(creator_id.to_string()),
        };

        projects.push(project.clone());
        tracing::info!("Project created: {} by {}", project.id, creator_id);

        Ok(project)
    }

    pub fn experiences_for(&self, user_id: &str) -> Vec<Experience> {
        self.experiences
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Store a new experience entry; the request must already be validated
    pub fn add_experience(&self, req: &CreateExperienceRequest, user_id: &str) -> Experience {
        let experience = Experience {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: req.title.clone(),
            kind: req.kind,
            location: req.location.clone(),
            description: req.description.clone(),
            date: req.date.clone(),
            created_at: chrono::Utc::now(),
        };

        self.experiences
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(0, experience.clone());
        tracing::info!("Experience added for {}: {}", user_id, experience.title);

        experience
    }
}

/// Lower-case ASCII alphanumerics joined by single hyphens
pub fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

fn unique_slug(base: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| format!("{}-{}", base, uuid::Uuid::new_v4()))
}

pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: "esp32-dht11-temperature-control".to_string(),
            title: "ESP32 to DHT11 Temperature Control".to_string(),
            description: "A comprehensive project detailing the integration of an ESP32 microcontroller \
                with a DHT11 sensor to monitor and control ambient temperature. The system reads \
                temperature and humidity data, displays it on an LCD, and can trigger a fan or heater \
                based on set thresholds."
                .to_string(),
            source_code: "#include <DHT.h>\n#define DHTPIN 4\n#define DHTTYPE DHT11\nDHT dht(DHTPIN, DHTTYPE);\n"
                .to_string(),
            components: ["ESP32", "DHT11 Sensor", "16x2 I2C LCD", "Jumper Wires", "Breadboard", "Resistor"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            done_by: vec!["HARSHA SAI".to_string(), "HEMANTH VENKAT".to_string()],
            circuit_diagram_url: "https://picsum.photos/seed/201/800/600".to_string(),
            circuit_diagram_image_hint: "circuit diagram".to_string(),
            created_at: None,
            creator_id: None,
        },
        Project {
            id: "iot-smart-lighting".to_string(),
            title: "IoT Smart Lighting System".to_string(),
            description: "Control your home lighting from anywhere using a web interface. This project \
                uses an ESP8266 and a relay module to toggle lights on and off."
                .to_string(),
            source_code: "// Web-based smart lighting system for the ESP8266\n".to_string(),
            components: ["ESP8266", "Relay Module", "Power Supply", "Light Bulb"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            done_by: vec!["KANISHK K".to_string()],
            circuit_diagram_url: "https://picsum.photos/seed/202/800/600".to_string(),
            circuit_diagram_image_hint: "iot circuit".to_string(),
            created_at: None,
            creator_id: None,
        },
    ]
}

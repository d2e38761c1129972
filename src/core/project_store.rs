//! In-Memory-Sammlung eingereichter Projekte.
//!
//! Einfügereihenfolge bleibt erhalten (Anzeige- und Aggregationsreihenfolge).
//! Eingereichte Projekte sind final, es gibt keinen Update- oder Lösch-Pfad.

use super::{sample_projects, Project};
use anyhow::Context;
use indexmap::IndexMap;
use std::path::Path;

/// Geordnete, per ID adressierbare Projekt-Sammlung.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: IndexMap<String, Project>,
}

impl ProjectStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            projects: IndexMap::new(),
        }
    }

    /// Erstellt einen Store aus einer Projektliste (Reihenfolge bleibt erhalten).
    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let mut store = Self::new();
        for project in projects {
            store.insert(project);
        }
        store
    }

    /// Store mit dem eingebauten Beispiel-Datensatz.
    pub fn sample() -> Self {
        Self::with_projects(sample_projects())
    }

    /// Lädt einen Datensatz aus einer JSON-Datei (Array von Projekten).
    pub fn load_from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Datensatz nicht lesbar: {}", path.display()))?;
        let projects: Vec<Project> = serde_json::from_str(&content)
            .with_context(|| format!("Datensatz fehlerhaft: {}", path.display()))?;
        log::info!(
            "{} Projekte geladen aus: {}",
            projects.len(),
            path.display()
        );
        Ok(Self::with_projects(projects))
    }

    /// Reicht ein Projekt ein und gibt die vergebene ID zurück.
    ///
    /// Das Projekt wird in die Invarianten geklemmt. Leere oder bereits
    /// vergebene IDs werden durch eine neue UUID ersetzt.
    pub fn submit(&mut self, project: Project) -> String {
        let id = self.insert(project);
        if let Some(p) = self.projects.get(&id) {
            log::info!(
                "Projekt eingereicht: '{}' (id={}, x_intercept={}, y_intercept={}, middle=({}, {}))",
                p.name,
                p.id,
                p.x_intercept,
                p.y_intercept,
                p.middle_point.x,
                p.middle_point.y
            );
        }
        id
    }

    fn insert(&mut self, project: Project) -> String {
        let mut project = if project.is_valid() {
            project
        } else {
            log::warn!(
                "Projekt '{}' verletzt Invarianten, Werte werden geklemmt",
                project.id
            );
            project.sanitized()
        };
        if project.id.is_empty() || self.projects.contains_key(&project.id) {
            project.id = uuid::Uuid::new_v4().to_string();
        }
        let id = project.id.clone();
        self.projects.insert(id.clone(), project);
        id
    }

    /// Sucht ein Projekt per ID.
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    /// Iteriert in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    /// Kopie aller Projekte in Einfügereihenfolge.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.values().cloned().collect()
    }

    /// Anzahl der Projekte.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Gibt `true` zurück, wenn keine Projekte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

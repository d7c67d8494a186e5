//! The shared project list and the editor selection
//!
//! Every mutation of the list bumps a revision counter; the engine persists
//! the list whenever the revision moves.

use nexus_core::Project;

#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    /// Id of the project open in the editor
    selected_id: Option<String>,
    revision: u64,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded from durable storage; loading is not a change
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects,
            selected_id: None,
            revision: 0,
        }
    }

    /// Prepend a project and select it
    pub fn create(&mut self, project: Project) {
        self.selected_id = Some(project.id.clone());
        self.projects.insert(0, project);
        self.revision += 1;
    }

    /// Replace the project with the same id in place.
    ///
    /// Returns `false` (and changes nothing) for an unknown id. Because the
    /// selection is held by id, a selected project is refreshed implicitly.
    pub fn update(&mut self, project: Project) -> bool {
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => {
                *slot = project;
                self.revision += 1;
                true
            }
            None => {
                tracing::debug!("Ignoring update for unknown project {}", project.id);
                false
            }
        }
    }

    /// Remove a project. Returns `true` when it was the selected one, in which
    /// case the selection is cleared.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() != before {
            self.revision += 1;
        }

        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
            true
        } else {
            false
        }
    }

    /// Select an existing project; unknown ids leave the selection alone
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_some() {
            self.selected_id = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn get_by_index(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

use std::{collections::BTreeSet, path::Path};

use crate::{
    content::model::{EndDate, Experience, PersonalInfo, Project, Skill, SkillCategory},
    foundation::error::{FolioError, FolioResult},
};

/// Boundary shape of a content file; validated into a [`ContentStore`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentStoreDef {
    personal_info: PersonalInfo,
    #[serde(default)]
    skills: Vec<Skill>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    experiences: Vec<Experience>,
}

/// Read-only portfolio content. Owns every entity; renderers borrow.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ContentStoreDef", into = "ContentStoreDef")]
pub struct ContentStore {
    personal: PersonalInfo,
    skills: Vec<Skill>,
    projects: Vec<Project>,
    experiences: Vec<Experience>,
}

impl ContentStore {
    pub fn new(
        personal: PersonalInfo,
        skills: Vec<Skill>,
        projects: Vec<Project>,
        experiences: Vec<Experience>,
    ) -> FolioResult<Self> {
        let store = Self {
            personal,
            skills,
            projects,
            experiences,
        };
        store.validate()?;
        Ok(store)
    }

    /// Skips validation; for literals that are checked by tests instead.
    pub(crate) fn new_unchecked(
        personal: PersonalInfo,
        skills: Vec<Skill>,
        projects: Vec<Project>,
        experiences: Vec<Experience>,
    ) -> Self {
        Self {
            personal,
            skills,
            projects,
            experiences,
        }
    }

    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> FolioResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> FolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> FolioResult<()> {
        for (field, value) in self.personal.required_fields() {
            if value.trim().is_empty() {
                return Err(FolioError::validation(format!(
                    "personalInfo.{field} must be non-empty"
                )));
            }
        }

        let mut seen = BTreeSet::new();
        for p in &self.projects {
            if p.id.trim().is_empty() {
                return Err(FolioError::validation("project id must be non-empty"));
            }
            if !seen.insert(p.id.as_str()) {
                return Err(FolioError::validation(format!(
                    "duplicate project id '{}'",
                    p.id
                )));
            }
        }

        let mut seen = BTreeSet::new();
        for e in &self.experiences {
            if e.id.trim().is_empty() {
                return Err(FolioError::validation("experience id must be non-empty"));
            }
            if !seen.insert(e.id.as_str()) {
                return Err(FolioError::validation(format!(
                    "duplicate experience id '{}'",
                    e.id
                )));
            }
            if let EndDate::Until(s) = &e.end_date
                && s.trim().is_empty()
            {
                return Err(FolioError::validation(format!(
                    "experience '{}' has an empty endDate",
                    e.id
                )));
            }
        }
        Ok(())
    }

    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(move |s| s.category == category)
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn other_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| !p.featured)
    }

    pub fn current_roles(&self) -> impl Iterator<Item = &Experience> {
        self.experiences.iter().filter(|e| e.end_date.is_present())
    }
}

impl TryFrom<ContentStoreDef> for ContentStore {
    type Error = FolioError;

    fn try_from(def: ContentStoreDef) -> FolioResult<Self> {
        Self::new(def.personal_info, def.skills, def.projects, def.experiences)
    }
}

impl From<ContentStore> for ContentStoreDef {
    fn from(store: ContentStore) -> Self {
        Self {
            personal_info: store.personal,
            skills: store.skills,
            projects: store.projects,
            experiences: store.experiences,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/store.rs"]
mod tests;

use std::collections::BTreeSet;

use crate::{
    content::{
        model::{EndDate, Experience, PersonalInfo, Project, Skill, SkillCategory, SkillLevel},
        store::ContentStore,
    },
    foundation::error::{FolioError, FolioResult},
};

/// Builder for [`ContentStore`].
pub struct ContentBuilder {
    personal: PersonalInfo,
    skills: Vec<Skill>,
    projects: Vec<Project>,
    experiences: Vec<Experience>,
    project_ids: BTreeSet<String>,
    experience_ids: BTreeSet<String>,
}

impl ContentBuilder {
    pub fn new(personal: PersonalInfo) -> Self {
        Self {
            personal,
            skills: Vec::new(),
            projects: Vec::new(),
            experiences: Vec::new(),
            project_ids: BTreeSet::new(),
            experience_ids: BTreeSet::new(),
        }
    }

    pub fn skill(
        mut self,
        name: impl Into<String>,
        level: SkillLevel,
        category: SkillCategory,
    ) -> Self {
        self.skills.push(Skill {
            name: name.into(),
            level,
            category,
        });
        self
    }

    pub fn project(mut self, project: Project) -> FolioResult<Self> {
        if !self.project_ids.insert(project.id.clone()) {
            return Err(FolioError::validation(format!(
                "duplicate project id '{}'",
                project.id
            )));
        }
        self.projects.push(project);
        Ok(self)
    }

    pub fn experience(mut self, experience: Experience) -> FolioResult<Self> {
        if !self.experience_ids.insert(experience.id.clone()) {
            return Err(FolioError::validation(format!(
                "duplicate experience id '{}'",
                experience.id
            )));
        }
        self.experiences.push(experience);
        Ok(self)
    }

    /// Build and validate the final store.
    pub fn build(self) -> FolioResult<ContentStore> {
        ContentStore::new(self.personal, self.skills, self.projects, self.experiences)
    }
}

/// Project with required fields only; links unset, not featured.
pub fn project(
    id: impl Into<String>,
    title: impl Into<String>,
    description: impl Into<String>,
    category: impl Into<String>,
) -> Project {
    let description = description.into();
    Project {
        id: id.into(),
        title: title.into(),
        long_description: description.clone(),
        description,
        technologies: Vec::new(),
        image_url: None,
        github_url: None,
        live_url: None,
        featured: false,
        category: category.into(),
    }
}

/// Experience entry without bullets or technologies.
pub fn experience(
    id: impl Into<String>,
    company: impl Into<String>,
    position: impl Into<String>,
    start_date: impl Into<String>,
    end_date: impl Into<EndDate>,
) -> Experience {
    Experience {
        id: id.into(),
        company: company.into(),
        position: position.into(),
        location: String::new(),
        start_date: start_date.into(),
        end_date: end_date.into(),
        description: Vec::new(),
        technologies: Vec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/builder.rs"]
mod tests;

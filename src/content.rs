pub mod builder;
mod builtin;
pub mod model;
pub mod store;

pub use builder::ContentBuilder;
pub use model::{
    EndDate, Experience, PersonalInfo, Project, Skill, SkillCategory, SkillLevel,
};
pub use store::ContentStore;

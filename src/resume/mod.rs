//! Resume data model

mod model;
mod skills;

pub use model::{About, Degree, Personal, Position, Project, Resume};
pub use skills::{SkillGroup, SkillGroups};

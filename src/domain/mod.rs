//! Domain model - immutable value types shared by every engine component.

mod assessment;
mod level;
mod rating;
mod skill;
mod terrain;

pub use assessment::Assessment;
pub use level::SkillLevel;
pub use rating::Rating;
pub use skill::{OutcomeMilestones, Skill, SkillDomain};
pub use terrain::TerrainContext;

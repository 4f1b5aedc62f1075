// Skill-gap roadmaps: required skills for a target role, the user's gap, and
// learning resources per missing skill. Oracle first, static tables second.

pub mod handlers;
pub mod planner;
pub mod prompts;
pub mod resources;

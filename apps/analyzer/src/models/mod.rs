pub mod analysis;
pub mod resume;

pub use analysis::{AnalysisResult, SkillMatch};
pub use resume::ResumeFile;

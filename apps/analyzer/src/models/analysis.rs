use serde::{Deserialize, Serialize};

/// Candidate fields and skill comparison returned by the analysis service.
///
/// Missing text fields decode as empty strings. `skillMatch` is required: a
/// body without it is not an analysis result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub dob: String,
    pub skill_match: SkillMatch,
}

/// Skill classification computed server-side. The percentage is trusted as-is;
/// nothing here ties it to the sizes of the lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatch {
    #[serde(default)]
    pub matching: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default)]
    pub additional: Vec<String>,
    /// 0 – 100
    pub match_percentage: f64,
}

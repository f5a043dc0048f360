use std::fmt::Write;

use crate::models::AnalysisResult;

/// Renders a result as the plain-text report shown next to the chart.
pub fn render_report(result: &AnalysisResult) -> String {
    let skill_match = &result.skill_match;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Skill Match Analysis");
    let _ = writeln!(out, "Match: {}%", skill_match.match_percentage);
    let _ = writeln!(out);
    let _ = writeln!(out, "Match Details");
    let _ = writeln!(out, "Matching Skills: {}", join_or_none(&skill_match.matching));
    let _ = writeln!(out, "Missing Skills: {}", join_or_none(&skill_match.missing));
    let _ = writeln!(
        out,
        "Additional Skills: {}",
        join_or_none(&skill_match.additional)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Extracted Information");
    let _ = writeln!(out, "Name: {}", result.name);
    let _ = writeln!(out, "Education: {}", result.education);
    let _ = writeln!(out, "Experience: {}", result.experience);
    let _ = writeln!(out, "Skills: {}", result.skills);
    let _ = writeln!(out, "Date of Birth: {}", result.dob);

    out
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

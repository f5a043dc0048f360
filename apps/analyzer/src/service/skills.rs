//! Skill matching — dictionary detection and set comparison between a resume and a JD.
//!
//! Algorithm:
//! 1. Detect every dictionary skill that occurs (case-insensitive substring) in each text.
//! 2. matching = resume ∩ jd, missing = jd − resume, additional = resume − jd.
//! 3. match_percentage = |matching| / |jd| × 100, rounded to one decimal; 0 when the JD
//!    names no known skill.

use std::collections::BTreeSet;

use crate::models::SkillMatch;

/// Technical skills the service knows how to detect. Lowercase; matched as substrings.
pub const SKILL_DICTIONARY: &[&str] = &[
    "python",
    "javascript",
    "java",
    "c++",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "machine learning",
    "artificial intelligence",
    "data analysis",
    "data science",
    "html",
    "css",
    "typescript",
    "redux",
    "graphql",
    "rest api",
    "ci/cd",
    "jenkins",
    "terraform",
    "blockchain",
    "web3",
    "solidity",
    "rust",
];

/// Returns the title-cased dictionary skills found in `text`, sorted.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    let text_lower = text.to_lowercase();
    SKILL_DICTIONARY
        .iter()
        .filter(|skill| text_lower.contains(*skill))
        .map(|skill| title_case(skill))
        .collect()
}

pub fn compare_skills(resume_skills: &BTreeSet<String>, jd_skills: &BTreeSet<String>) -> SkillMatch {
    let matching: Vec<String> = resume_skills.intersection(jd_skills).cloned().collect();
    let missing: Vec<String> = jd_skills.difference(resume_skills).cloned().collect();
    let additional: Vec<String> = resume_skills.difference(jd_skills).cloned().collect();

    let match_percentage = if jd_skills.is_empty() {
        0.0
    } else {
        round_one_decimal(matching.len() as f64 / jd_skills.len() as f64 * 100.0)
    };

    SkillMatch {
        matching,
        missing,
        additional,
        match_percentage,
    }
}

/// Uppercases every letter that follows a non-letter: "node.js" → "Node.Js", "ci/cd" → "Ci/Cd".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_title_case_follows_word_boundaries() {
        assert_eq!(title_case("python"), "Python");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("rest api"), "Rest Api");
        assert_eq!(title_case("web3"), "Web3");
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let skills = extract_skills("Built services in RUST and Docker on AWS.");
        assert!(skills.contains("Rust"));
        assert!(skills.contains("Docker"));
        assert!(skills.contains("Aws"));
    }

    #[test]
    fn test_extract_matches_substrings() {
        // "javascript" also contains "java"
        let skills = extract_skills("Senior JavaScript developer");
        assert!(skills.contains("Javascript"));
        assert!(skills.contains("Java"));
    }

    #[test]
    fn test_extract_nothing_from_plain_prose() {
        assert!(extract_skills("Enjoys hiking and chess").is_empty());
    }

    #[test]
    fn test_compare_classifies_sets() {
        let resume = set(&["Python", "Rust", "Sql"]);
        let jd = set(&["Python", "Docker", "Sql"]);

        let result = compare_skills(&resume, &jd);
        assert_eq!(result.matching, vec!["Python", "Sql"]);
        assert_eq!(result.missing, vec!["Docker"]);
        assert_eq!(result.additional, vec!["Rust"]);
        assert_eq!(result.match_percentage, 66.7);
    }

    #[test]
    fn test_compare_empty_jd_scores_zero() {
        let result = compare_skills(&set(&["Python"]), &BTreeSet::new());
        assert_eq!(result.match_percentage, 0.0);
        assert_eq!(result.additional, vec!["Python"]);
    }

    #[test]
    fn test_compare_full_coverage_scores_100() {
        let jd = set(&["Git", "Rust"]);
        let result = compare_skills(&set(&["Git", "Rust", "Css"]), &jd);
        assert_eq!(result.match_percentage, 100.0);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_lists_are_sorted() {
        let result = compare_skills(&BTreeSet::new(), &set(&["Vue", "Aws", "Flask"]));
        assert_eq!(result.missing, vec!["Aws", "Flask", "Vue"]);
    }
}

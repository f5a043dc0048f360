//! Candidate field extraction from resume text.
//!
//! Keyword heuristics, line by line. Fields with several hits are joined with ", ".

use crate::service::skills::extract_skills;

const EDUCATION_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "academy",
    "bachelor",
    "master",
    "b.tech",
    "m.tech",
    "b.sc",
    "m.sc",
    "b.e.",
    "mba",
    "phd",
    "ph.d",
    "degree",
    "diploma",
];

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "intern",
    "manager",
    "analyst",
    "consultant",
    "architect",
    "lead",
    "worked",
    "experience",
];

/// Bare section titles. They carry keywords but are not entries themselves.
const SECTION_HEADINGS: &[&str] = &[
    "education",
    "academic background",
    "qualifications",
    "experience",
    "work experience",
    "professional experience",
    "employment history",
    "skills",
];

const DOB_LABELS: &[&str] = &["date of birth", "dob", "d.o.b", "born"];

/// Longest line still considered a candidate name.
const MAX_NAME_WORDS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateFields {
    pub name: String,
    pub skills: String,
    pub education: String,
    pub experience: String,
    pub dob: String,
}

pub fn extract_fields(text: &str) -> CandidateFields {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut education = Vec::new();
    let mut experience = Vec::new();
    let mut dob = String::new();

    for &line in &lines {
        let lower = line.to_lowercase();

        if dob.is_empty() {
            if let Some(value) = labelled_dob(line, &lower) {
                dob = value;
                continue;
            }
        }

        if is_section_heading(&lower) {
            continue;
        }

        if contains_any(&lower, EDUCATION_KEYWORDS) {
            push_unique(&mut education, line);
        } else if contains_any(&lower, EXPERIENCE_KEYWORDS) {
            push_unique(&mut experience, line);
        }
    }

    let skills: Vec<String> = extract_skills(text).into_iter().collect();

    CandidateFields {
        name: lines
            .iter()
            .find(|l| looks_like_name(l))
            .map(|l| l.to_string())
            .unwrap_or_default(),
        skills: skills.join(", "),
        education: education.join(", "),
        experience: experience.join(", "),
        dob,
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn is_section_heading(lower: &str) -> bool {
    SECTION_HEADINGS.contains(&lower.trim_end_matches(':').trim_end())
}

fn push_unique(out: &mut Vec<String>, line: &str) {
    if !out.iter().any(|l| l == line) {
        out.push(line.to_string());
    }
}

/// "DOB: 12/03/1994" → "12/03/1994". A label with nothing after it yields the whole line.
fn labelled_dob(line: &str, lower: &str) -> Option<String> {
    let label = DOB_LABELS.iter().find(|label| lower.starts_with(*label))?;
    let rest = line
        .get(label.len()..)
        .unwrap_or_default()
        .trim_start_matches(|c: char| matches!(c, ':' | '-') || c.is_whitespace())
        .trim();
    if rest.is_empty() {
        Some(line.to_string())
    } else {
        Some(rest.to_string())
    }
}

/// A short line of two to four words made only of letters and name punctuation.
fn looks_like_name(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(2..=MAX_NAME_WORDS).contains(&words.len()) {
        return false;
    }
    let lower = line.to_lowercase();
    if contains_any(&lower, EDUCATION_KEYWORDS)
        || contains_any(&lower, EXPERIENCE_KEYWORDS)
        || contains_any(&lower, &["resume", "curriculum vitae"])
    {
        return false;
    }
    words.iter().all(|w| {
        w.chars().next().is_some_and(char::is_uppercase)
            && w.chars().all(|c| c.is_alphabetic() || matches!(c, '.' | '-' | '\''))
    })
}

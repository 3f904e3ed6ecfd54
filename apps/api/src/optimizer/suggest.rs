//! Suggestion synthesis — pluggable, trait-based optimizer over a resume
//! snapshot and a pasted job description.
//!
//! Default: `KeywordOptimizer` (pure-Rust, deterministic, fully testable,
//! bounded by the fixed vocabulary). `AppState` holds an `Arc<dyn Optimizer>`
//! so a semantic backend can be swapped in without touching handlers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::optimizer::keywords::extract_keywords;

/// Suggested additions per collection are capped here.
pub const MAX_SUGGESTIONS: usize = 5;

/// Bullet points are synthesized for at most this many experience entries.
pub const BULLET_EXPERIENCE_LIMIT: usize = 2;

/// The summary and bullet templates interpolate five positional keywords.
const TEMPLATE_SLOTS: usize = 5;

/// Slot fillers used when fewer than [`TEMPLATE_SLOTS`] keywords were
/// extracted, so no template ever interpolates a blank.
const FALLBACK_FOCUS_AREAS: [&str; TEMPLATE_SLOTS] = [
    "modern engineering practices",
    "cross-functional delivery",
    "process automation",
    "quality assurance",
    "stakeholder communication",
];

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Three synthesized bullets for one employer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerBullets {
    pub company: String,
    pub bullets: Vec<String>,
}

/// The optimizer's result patch. Only `professional_summary` and `keywords`
/// are ever merged back into the store; the rest is surfaced for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationPatch {
    pub professional_summary: Option<String>,
    pub skills: Vec<String>,
    pub technologies: Vec<String>,
    pub bullet_points: Vec<EmployerBullets>,
    pub keywords: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The optimizer seam. Implementations must be deterministic per input or
/// document otherwise; callers reject blank job descriptions before invoking.
#[async_trait]
pub trait Optimizer: Send + Sync {
    async fn optimize(
        &self,
        snapshot: &ResumeData,
        job_description: &str,
    ) -> Result<OptimizationPatch, AppError>;
}

/// Rule-based default backend: vocabulary extraction plus fixed-template
/// interpolation. No network, no model, no randomness.
pub struct KeywordOptimizer;

#[async_trait]
impl Optimizer for KeywordOptimizer {
    async fn optimize(
        &self,
        snapshot: &ResumeData,
        job_description: &str,
    ) -> Result<OptimizationPatch, AppError> {
        Ok(build_patch(snapshot, job_description))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core synthesis
// ────────────────────────────────────────────────────────────────────────────

pub fn build_patch(snapshot: &ResumeData, job_description: &str) -> OptimizationPatch {
    let keywords = extract_keywords(job_description);
    let slots = fill_slots(&keywords);

    OptimizationPatch {
        professional_summary: Some(suggest_summary(snapshot, &slots)),
        skills: suggest_additions(
            &keywords,
            snapshot.skills.iter().map(|skill| skill.name.as_str()),
        ),
        technologies: suggest_additions(
            &keywords,
            snapshot.technologies.iter().map(|tech| tech.name.as_str()),
        ),
        bullet_points: suggest_bullet_points(snapshot, &slots),
        keywords,
    }
}

/// Pads the extracted keywords up to the five positional template slots with
/// generic focus areas. Extraction already capped the input, so the result
/// always has at least `TEMPLATE_SLOTS` entries.
fn fill_slots(keywords: &[String]) -> Vec<String> {
    let mut slots: Vec<String> = keywords.to_vec();
    for filler in FALLBACK_FOCUS_AREAS {
        if slots.len() >= TEMPLATE_SLOTS {
            break;
        }
        slots.push(filler.to_string());
    }
    slots
}

/// Deterministic summary template: top keywords plus the experience count.
fn suggest_summary(snapshot: &ResumeData, slots: &[String]) -> String {
    format!(
        "Results-driven professional with proven expertise in {}, bringing {}+ years of \
         experience in delivering innovative solutions. Demonstrated success in {}, with a \
         strong track record of achieving measurable results and driving business growth \
         through strategic initiatives and collaborative leadership.",
        slots[..3].join(", "),
        snapshot.experience.len(),
        slots[3..TEMPLATE_SLOTS].join(" and "),
    )
}

/// Extracted keywords not already present (case-insensitive name match) in
/// the existing collection, truncated to [`MAX_SUGGESTIONS`].
fn suggest_additions<'a>(
    keywords: &[String],
    existing: impl Iterator<Item = &'a str>,
) -> Vec<String> {
    let existing: Vec<String> = existing.map(|name| name.to_lowercase()).collect();
    keywords
        .iter()
        .filter(|keyword| !existing.contains(&keyword.to_lowercase()))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Three fixed-template sentences per employer, for the first
/// [`BULLET_EXPERIENCE_LIMIT`] experience entries.
fn suggest_bullet_points(snapshot: &ResumeData, slots: &[String]) -> Vec<EmployerBullets> {
    snapshot
        .experience
        .iter()
        .take(BULLET_EXPERIENCE_LIMIT)
        .map(|experience| EmployerBullets {
            company: experience.company.clone(),
            bullets: vec![
                format!(
                    "Leveraged {} and {} to deliver high-impact solutions, resulting in 25% \
                     improvement in operational efficiency",
                    slots[0], slots[1]
                ),
                format!(
                    "Collaborated with cross-functional teams using {} methodologies to \
                     achieve project objectives ahead of schedule",
                    slots[2]
                ),
                format!(
                    "Implemented {} best practices, leading to enhanced {} and measurable \
                     business outcomes",
                    slots[3], slots[4]
                ),
            ],
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, Skill, SkillLevel, Technology};
    use crate::store::entities::{ExperienceDraft, SkillDraft, TechnologyDraft};
    use crate::store::ResumeStore;

    fn snapshot_with(skills: &[&str], technologies: &[&str], companies: &[&str]) -> ResumeData {
        let mut store = ResumeStore::new();
        for name in skills {
            store.add::<Skill>(SkillDraft {
                name: name.to_string(),
                level: SkillLevel::Advanced,
                category: "technical".to_string(),
            });
        }
        for name in technologies {
            store.add::<Technology>(TechnologyDraft {
                name: name.to_string(),
                category: "infrastructure".to_string(),
                proficiency: SkillLevel::Advanced,
                years_of_experience: 3.0,
            });
        }
        for company in companies {
            store.add::<Experience>(ExperienceDraft {
                company: company.to_string(),
                position: "Engineer".to_string(),
                start_date: "2020-01".to_string(),
                end_date: "2022-01".to_string(),
                current: false,
                description: vec![],
                location: None,
            });
        }
        store.snapshot()
    }

    const RICH_JD: &str =
        "We want React, JavaScript, Python, AWS and Docker experience, plus Kubernetes.";

    #[test]
    fn test_skill_suggestions_exclude_existing_names_case_insensitively() {
        let snapshot = snapshot_with(&["react", "PYTHON"], &[], &[]);
        let patch = build_patch(&snapshot, RICH_JD);
        assert!(!patch.skills.contains(&"React".to_string()));
        assert!(!patch.skills.contains(&"Python".to_string()));
        assert!(patch.skills.contains(&"AWS".to_string()));
    }

    #[test]
    fn test_suggestions_are_truncated_to_five() {
        let snapshot = snapshot_with(&[], &[], &[]);
        let patch = build_patch(&snapshot, RICH_JD);
        assert_eq!(patch.skills.len(), MAX_SUGGESTIONS);
        assert_eq!(patch.technologies.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_technology_suggestions_use_technology_collection() {
        let snapshot = snapshot_with(&[], &["Docker"], &[]);
        let patch = build_patch(&snapshot, RICH_JD);
        assert!(!patch.technologies.contains(&"Docker".to_string()));
        // skills collection is empty, so Docker still shows up there
        assert!(patch.skills.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_summary_interpolates_experience_count() {
        let snapshot = snapshot_with(&[], &[], &["Acme", "Initech", "Globex"]);
        let patch = build_patch(&snapshot, RICH_JD);
        let summary = patch.professional_summary.unwrap();
        assert!(summary.contains("3+ years"));
        assert!(summary.contains("React, JavaScript, Python"));
        assert!(summary.contains("AWS and Docker"));
    }

    #[test]
    fn test_bullets_cover_only_first_two_employers() {
        let snapshot = snapshot_with(&[], &[], &["Acme", "Initech", "Globex"]);
        let patch = build_patch(&snapshot, RICH_JD);
        assert_eq!(patch.bullet_points.len(), BULLET_EXPERIENCE_LIMIT);
        assert_eq!(patch.bullet_points[0].company, "Acme");
        assert_eq!(patch.bullet_points[1].company, "Initech");
        assert_eq!(patch.bullet_points[0].bullets.len(), 3);
    }

    #[test]
    fn test_sparse_keywords_fall_back_instead_of_interpolating_blanks() {
        // only one vocabulary term present
        let snapshot = snapshot_with(&[], &[], &["Acme"]);
        let patch = build_patch(&snapshot, "Looking for a React person.");

        assert_eq!(patch.keywords, vec!["React".to_string()]);
        let summary = patch.professional_summary.unwrap();
        assert!(summary.contains("React"));
        assert!(summary.contains("cross-functional delivery"));

        for employer in &patch.bullet_points {
            for bullet in &employer.bullets {
                assert!(!bullet.contains("  "), "blank slot in: {bullet}");
            }
        }
    }

    #[test]
    fn test_no_keywords_still_yields_grammatical_output() {
        let snapshot = snapshot_with(&[], &[], &["Acme"]);
        let patch = build_patch(&snapshot, "Shepherd for alpaca farm wanted.");

        assert!(patch.keywords.is_empty());
        assert!(patch.skills.is_empty());
        let summary = patch.professional_summary.unwrap();
        assert!(summary.contains("modern engineering practices"));
        assert!(summary.contains("quality assurance and stakeholder communication"));
    }

    #[tokio::test]
    async fn test_keyword_optimizer_is_deterministic() {
        let snapshot = snapshot_with(&["react"], &[], &["Acme"]);
        let first = KeywordOptimizer
            .optimize(&snapshot, RICH_JD)
            .await
            .unwrap();
        let second = KeywordOptimizer
            .optimize(&snapshot, RICH_JD)
            .await
            .unwrap();
        assert_eq!(first.professional_summary, second.professional_summary);
        assert_eq!(first.keywords, second.keywords);
        assert_eq!(first.bullet_points, second.bullet_points);
    }
}

//! Resume data model — the canonical in-memory representation of one resume.
//!
//! All records are owned exclusively by the store; renderers and the optimizer
//! only ever see a cloned `ResumeData` snapshot. Dates are `"YYYY-MM"` strings
//! throughout (the forms own format validation, not the store).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::collection::Collection;

/// Contact block shown in every template header. Replaced wholesale on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linked_in: Option<String>,
    pub portfolio: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

/// Singleton summary record. The id is assigned once at session start and
/// survives wholesale content replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalSummary {
    pub id: Uuid,
    pub content: String,
    /// Insertion-ordered; the caller owns dedup.
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageProficiency {
    Basic,
    Conversational,
    Proficient,
    Fluent,
    Native,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: Vec<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
    pub honors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub level: SkillLevel,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub proficiency: SkillLevel,
    pub years_of_experience: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub github: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub date_obtained: String,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub verification_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: Uuid,
    pub name: String,
    pub proficiency: LanguageProficiency,
    pub certifications: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: Uuid,
    pub title: String,
    pub publisher: String,
    pub publish_date: String,
    pub url: Option<String>,
    pub description: String,
    pub co_authors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hobby {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub relationship: String,
}

/// The full resume aggregate — the read-only snapshot handed to the renderer,
/// the optimizer, and the export filename builder.
///
/// No entity is shared between collections and there are no cross-collection
/// relations: deleting an `Experience` never touches `Skill`s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub professional_summary: ProfessionalSummary,
    pub experience: Collection<Experience>,
    pub education: Collection<Education>,
    pub skills: Collection<Skill>,
    pub technologies: Collection<Technology>,
    pub projects: Collection<Project>,
    pub certifications: Collection<Certification>,
    pub achievements: Collection<Achievement>,
    pub languages: Collection<Language>,
    pub publications: Collection<Publication>,
    pub awards: Collection<Award>,
    pub hobbies: Collection<Hobby>,
    pub references: Collection<Reference>,
}

impl ResumeData {
    /// Blank resume created at session start: empty collections, blank
    /// singletons, summary id pre-assigned (ids are never reassigned later).
    pub fn empty() -> Self {
        ResumeData {
            personal_info: PersonalInfo::default(),
            professional_summary: ProfessionalSummary {
                id: Uuid::new_v4(),
                content: String::new(),
                keywords: Vec::new(),
            },
            experience: Collection::default(),
            education: Collection::default(),
            skills: Collection::default(),
            technologies: Collection::default(),
            projects: Collection::default(),
            certifications: Collection::default(),
            achievements: Collection::default(),
            languages: Collection::default(),
            publications: Collection::default(),
            awards: Collection::default(),
            hobbies: Collection::default(),
            references: Collection::default(),
        }
    }
}

/// Treats `None` and `""` identically: blank optional fields render nothing.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

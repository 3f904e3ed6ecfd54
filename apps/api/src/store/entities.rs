//! Draft and patch payloads for the twelve collections.
//!
//! A draft is the entity minus its id (the store assigns ids); a patch is the
//! entity with every field optional. `apply_patch` merges present fields only
//! and never touches the id. Optional text fields are cleared by sending an
//! empty string, which the renderer already treats as absent.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::collection::{Collection, CollectionEntity};
use crate::models::resume::{
    Achievement, Award, Certification, Education, Experience, Hobby, Language,
    LanguageProficiency, Project, Publication, Reference, ResumeData, Skill, SkillLevel,
    Technology,
};

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceDraft {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: Vec<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<Vec<String>>,
    pub location: Option<String>,
}

impl CollectionEntity for Experience {
    type Draft = ExperienceDraft;
    type Patch = ExperiencePatch;

    const KIND: &'static str = "experience";

    fn from_draft(id: Uuid, draft: ExperienceDraft) -> Self {
        Experience {
            id,
            company: draft.company,
            position: draft.position,
            start_date: draft.start_date,
            end_date: draft.end_date,
            current: draft.current,
            description: draft.description,
            location: draft.location,
        }
    }

    fn apply_patch(&mut self, patch: ExperiencePatch) {
        if let Some(v) = patch.company {
            self.company = v;
        }
        if let Some(v) = patch.position {
            self.position = v;
        }
        if let Some(v) = patch.start_date {
            self.start_date = v;
        }
        if let Some(v) = patch.end_date {
            self.end_date = v;
        }
        if let Some(v) = patch.current {
            self.current = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.location {
            self.location = Some(v);
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn collection(data: &ResumeData) -> &Collection<Self> {
        &data.experience
    }

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self> {
        &mut data.experience
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
    pub honors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
    pub honors: Option<Vec<String>>,
}

impl CollectionEntity for Education {
    type Draft = EducationDraft;
    type Patch = EducationPatch;

    const KIND: &'static str = "education";

    fn from_draft(id: Uuid, draft: EducationDraft) -> Self {
        Education {
            id,
            institution: draft.institution,
            degree: draft.degree,
            field: draft.field,
            start_date: draft.start_date,
            end_date: draft.end_date,
            gpa: draft.gpa,
            honors: draft.honors,
        }
    }

    fn apply_patch(&mut self, patch: EducationPatch) {
        if let Some(v) = patch.institution {
            self.institution = v;
        }
        if let Some(v) = patch.degree {
            self.degree = v;
        }
        if let Some(v) = patch.field {
            self.field = v;
        }
        if let Some(v) = patch.start_date {
            self.start_date = v;
        }
        if let Some(v) = patch.end_date {
            self.end_date = v;
        }
        if let Some(v) = patch.gpa {
            self.gpa = Some(v);
        }
        if let Some(v) = patch.honors {
            self.honors = Some(v);
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn collection(data: &ResumeData) -> &Collection<Self> {
        &data.education
    }

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self> {
        &mut data.education
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skill
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDraft {
    pub name: String,
    pub level: SkillLevel,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
    pub category: Option<String>,
}

impl CollectionEntity for Skill {
    type Draft = SkillDraft;
    type Patch = SkillPatch;

    const KIND: &'static str = "skills";

    fn from_draft(id: Uuid, draft: SkillDraft) -> Self {
        Skill {
            id,
            name: draft.name,
            level: draft.level,
            category: draft.category,
        }
    }

    fn apply_patch(&mut self, patch: SkillPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.level {
            self.level = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn collection(data: &ResumeData) -> &Collection<Self> {
        &data.skills
    }

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self> {
        &mut data.skills
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Technology
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnologyDraft {
    pub name: String,
    pub category: String,
    pub proficiency: SkillLevel,
    pub years_of_experience: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnologyPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub proficiency: Option<SkillLevel>,
    pub years_of_experience: Option<f32>,
}

impl CollectionEntity for Technology {
    type Draft = TechnologyDraft;
    type Patch = TechnologyPatch;

    const KIND: &'static str = "technologies";

    fn from_draft(id: Uuid, draft: TechnologyDraft) -> Self {
        Technology {
            id,
            name: draft.name,
            category: draft.category,
            proficiency: draft.proficiency,
            years_of_experience: draft.years_of_experience,
        }
    }

    fn apply_patch(&mut self, patch: TechnologyPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.proficiency {
            self.proficiency = v;
        }
        if let Some(v) = patch.years_of_experience {
            self.years_of_experience = v;
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn collection(data: &ResumeData) -> &Collection<Self> {
        &data.technologies
    }

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self> {
        &mut data.technologies
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Project
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub github: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub url: Option<String>,
    pub github: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub highlights: Option<Vec<String>>,
}

impl CollectionEntity for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    const KIND: &'static str = "projects";

    fn from_draft(id: Uuid, draft: ProjectDraft) -> Self {
        Project {
            id,
            name: draft.name,
            description: draft.description,
            technologies: draft.technologies,
            url: draft.url,
            github: draft.github,
            start_date: draft.start_date,
            end_date: draft.end_date,
            highlights: draft.highlights,
        }
    }

    fn apply_patch(&mut self, patch: ProjectPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.technologies {
            self.technologies = v;
        }
        if let Some(v) = patch.url {
            self.url = Some(v);
        }
        if let Some(v) = patch.github {
            self.github = Some(v);
        }
        if let Some(v) = patch.start_date {
            self.start_date = v;
        }
        if let Some(v) = patch.end_date {
            self.end_date = v;
        }
        if let Some(v) = patch.highlights {
            self.highlights = v;
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn collection(data: &ResumeData) -> &Collection<Self> {
        &data.projects
    }

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self> {
        &mut data.projects
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Certification
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationDraft {
    pub name: String,
    pub issuer: String,
    pub date_obtained: String,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub verification_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationPatch {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date_obtained: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub verification_url: Option<String>,
}

impl CollectionEntity for Certification {
    type Draft = CertificationDraft;
    type Patch = CertificationPatch;

    const KIND: &'static str = "certifications";

    fn from_draft(id: Uuid, draft: CertificationDraft) -> Self {
        Certification {
            id,
            name: draft.name,
            issuer: draft.issuer,
            date_obtained: draft.date_obtained,
            expiry_date: draft.expiry_date,
            credential_id: draft.credential_id,
            verification_url: draft.verification_url,
        }
    }

    fn apply_patch(&mut self, patch: CertificationPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.issuer {
            self.issuer = v;
        }
        if let Some(v) = patch.date_obtained {
            self.date_obtained = v;
        }
        if let Some(v) = patch.expiry_date {
            self.expiry_date = Some(v);
        }
        if let Some(v) = patch.credential_id {
            self.credential_id = Some(v);
        }
        if let Some(v) = patch.verification_url {
            self.verification_url = Some(v);
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn collection(data: &ResumeData) -> &Collection<Self> {
        &data.certifications
    }

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self> {
        &mut data.certifications
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Achievement
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

impl CollectionEntity for Achievement {
    type Draft = AchievementDraft;
    type Patch = AchievementPatch;

    const KIND: &'static str = "achievements";

    fn from_draft(id: Uuid, draft: AchievementDraft) -> Self {
        Achievement {
            id,
            title: draft.title,
            description: draft.description,
            date: draft.date,
            category: draft.category,
        }
    }

    fn apply_patch(&mut self, patch: AchievementPatch) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn collection(data: &ResumeData) -> &Collection<Self> {
        &data.achievements
    }

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self> {
        &mut data.achievements
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Language
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageDraft {
    pub name: String,
    pub proficiency: LanguageProficiency,
    pub certifications: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguagePatch {
    pub name: Option<String>,
    pub proficiency: Option<LanguageProficiency>,
    pub certifications: Option<Vec<String>>,
}

impl CollectionEntity for Language {
    type Draft = LanguageDraft;
    type Patch = LanguagePatch;

    const KIND: &'static str = "languages";

    fn from_draft(id: Uuid, draft: LanguageDraft) -> Self {
        Language {
            id,
            name: draft.name,
            proficiency: draft.proficiency,
            certifications: draft.certifications,
        }
    }

    fn apply_patch(&mut self, patch: LanguagePatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.proficiency {
            self.proficiency = v;
        }
        if let Some(v) = patch.certifications {
            self.certifications = Some(v);
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn collection(data: &ResumeData) -> &Collection<Self> {
        &data.languages
    }

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self> {
        &mut data.languages
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Publication
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationDraft {
    pub title: String,
    pub publisher: String,
    pub publish_date: String,
    pub url: Option<String>,
    pub description: String,
    pub co_authors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicationPatch {
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub publish_date: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub co_authors: Option<Vec<String>>,
}

impl CollectionEntity for Publication {
    type Draft = PublicationDraft;
    type Patch = PublicationPatch;

    const KIND: &'static str = "publications";

    fn from_draft(id: Uuid, draft: PublicationDraft) -> Self {
        Publication {
            id,
            title: draft.title,
            publisher: draft.publisher,
            publish_date: draft.publish_date,
            url: draft.url,
            description: draft.description,
            co_authors: draft.co_authors,
        }
    }

    fn apply_patch(&mut self, patch: PublicationPatch) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.publisher {
            self.publisher = v;
        }
        if let Some(v) = patch.publish_date {
            self.publish_date = v;
        }
        if let Some(v) = patch.url {
            self.url = Some(v);
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.co_authors {
            self.co_authors = Some(v);
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn collection(data: &ResumeData) -> &Collection<Self> {
        &data.publications
    }

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self> {
        &mut data.publications
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Award
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardDraft {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AwardPatch {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl CollectionEntity for Award {
    type Draft = AwardDraft;
    type Patch = AwardPatch;

    const KIND: &'static str = "awards";

    fn from_draft(id: Uuid, draft: AwardDraft) -> Self {
        Award {
            id,
            title: draft.title,
            issuer: draft.issuer,
            date: draft.date,
            description: draft.description,
            category: draft.category,
        }
    }

    fn apply_patch(&mut self, patch: AwardPatch) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.issuer {
            self.issuer = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn collection(data: &ResumeData) -> &Collection<Self> {
        &data.awards
    }

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self> {
        &mut data.awards
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Hobby
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HobbyDraft {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HobbyPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl CollectionEntity for Hobby {
    type Draft = HobbyDraft;
    type Patch = HobbyPatch;

    const KIND: &'static str = "hobbies";

    fn from_draft(id: Uuid, draft: HobbyDraft) -> Self {
        Hobby {
            id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
        }
    }

    fn apply_patch(&mut self, patch: HobbyPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.description {
            self.description = Some(v);
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn collection(data: &ResumeData) -> &Collection<Self> {
        &data.hobbies
    }

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self> {
        &mut data.hobbies
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reference
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceDraft {
    pub name: String,
    pub position: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferencePatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
}

impl CollectionEntity for Reference {
    type Draft = ReferenceDraft;
    type Patch = ReferencePatch;

    const KIND: &'static str = "references";

    fn from_draft(id: Uuid, draft: ReferenceDraft) -> Self {
        Reference {
            id,
            name: draft.name,
            position: draft.position,
            company: draft.company,
            email: draft.email,
            phone: draft.phone,
            relationship: draft.relationship,
        }
    }

    fn apply_patch(&mut self, patch: ReferencePatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.position {
            self.position = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.company {
            self.company = v;
        }
        if let Some(v) = patch.relationship {
            self.relationship = v;
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn collection(data: &ResumeData) -> &Collection<Self> {
        &data.references
    }

    fn collection_mut(data: &mut ResumeData) -> &mut Collection<Self> {
        &mut data.references
    }
}

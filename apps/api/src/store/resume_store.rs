//! The resume data store — single owner of one session's `ResumeData`.
//!
//! Every mutation bumps a monotonically increasing revision and pushes it
//! through a `tokio::sync::watch` channel; the live preview long-polls that
//! channel instead of re-reading on a timer. The store performs no field
//! validation — required-field checks belong to the forms that call it.

use tokio::sync::watch;
use uuid::Uuid;

use crate::models::collection::CollectionEntity;
use crate::models::resume::{PersonalInfo, ResumeData};

#[derive(Debug)]
pub struct ResumeStore {
    data: ResumeData,
    revision: u64,
    notifier: watch::Sender<u64>,
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeStore {
    pub fn new() -> Self {
        let (notifier, _) = watch::channel(0);
        ResumeStore {
            data: ResumeData::empty(),
            revision: 0,
            notifier,
        }
    }

    /// Read-only clone handed to the renderer, optimizer, and exporter.
    pub fn snapshot(&self) -> ResumeData {
        self.data.clone()
    }

    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Subscribes to state-changed notifications. The receiver observes the
    /// revision reached by each mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notifier.subscribe()
    }

    fn touch(&mut self) {
        self.revision += 1;
        // send_replace delivers even when no preview is currently subscribed
        self.notifier.send_replace(self.revision);
    }

    /// Replaces the whole contact record.
    pub fn update_personal_info(&mut self, info: PersonalInfo) {
        self.data.personal_info = info;
        self.touch();
    }

    /// Replaces the summary content and keyword list. The store-assigned id
    /// is preserved: identifiers are never reassigned.
    pub fn update_professional_summary(&mut self, content: String, keywords: Vec<String>) {
        self.data.professional_summary.content = content;
        self.data.professional_summary.keywords = keywords;
        self.touch();
    }

    /// Appends a new record to collection `T` and returns its fresh id.
    pub fn add<T: CollectionEntity>(&mut self, draft: T::Draft) -> Uuid {
        let id = T::collection_mut(&mut self.data).add(draft);
        self.touch();
        id
    }

    /// Merges a partial update into the matching record. A miss is a silent
    /// no-op and does not count as a mutation.
    pub fn update<T: CollectionEntity>(&mut self, id: Uuid, patch: T::Patch) -> bool {
        let changed = T::collection_mut(&mut self.data).update(id, patch);
        if changed {
            self.touch();
        }
        changed
    }

    /// Removes the matching record, if present.
    pub fn delete<T: CollectionEntity>(&mut self, id: Uuid) -> bool {
        let removed = T::collection_mut(&mut self.data).remove(id);
        if removed {
            self.touch();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, Skill, SkillLevel};
    use crate::store::entities::{ExperienceDraft, ExperiencePatch, SkillDraft};

    fn acme_draft() -> ExperienceDraft {
        ExperienceDraft {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: "2022-01".to_string(),
            current: false,
            description: vec!["Built X".to_string()],
            location: None,
        }
    }

    #[test]
    fn test_add_yields_one_record_matching_the_draft() {
        let mut store = ResumeStore::new();
        let id = store.add::<Experience>(acme_draft());

        let data = store.snapshot();
        assert_eq!(data.experience.len(), 1);
        let entry = data.experience.get(id).unwrap();
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.position, "Engineer");
        assert!(!entry.current);
    }

    #[test]
    fn test_ids_are_unique_and_previously_unseen() {
        let mut store = ResumeStore::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            let id = store.add::<Experience>(acme_draft());
            assert!(seen.insert(id), "id {id} was reused");
        }
    }

    #[test]
    fn test_update_changes_only_named_fields() {
        let mut store = ResumeStore::new();
        let id = store.add::<Experience>(acme_draft());
        let before = store.snapshot().experience.get(id).unwrap().clone();

        store.update::<Experience>(
            id,
            ExperiencePatch {
                position: Some("Staff Engineer".to_string()),
                ..ExperiencePatch::default()
            },
        );

        let after = store.snapshot().experience.get(id).unwrap().clone();
        assert_eq!(after.position, "Staff Engineer");
        assert_eq!(after.id, before.id);
        assert_eq!(after.company, before.company);
        assert_eq!(after.start_date, before.start_date);
        assert_eq!(after.description, before.description);
    }

    #[test]
    fn test_delete_reduces_length_by_exactly_one() {
        let mut store = ResumeStore::new();
        let first = store.add::<Experience>(acme_draft());
        let second = store.add::<Experience>(acme_draft());

        assert!(store.delete::<Experience>(first));
        let data = store.snapshot();
        assert_eq!(data.experience.len(), 1);
        assert!(data.experience.get(second).is_some());

        // deleting a non-existent id is a no-op
        assert!(!store.delete::<Experience>(first));
        assert_eq!(store.snapshot().experience.len(), 1);
    }

    #[test]
    fn test_no_cascade_between_collections() {
        let mut store = ResumeStore::new();
        let exp = store.add::<Experience>(acme_draft());
        store.add::<Skill>(SkillDraft {
            name: "Rust".to_string(),
            level: SkillLevel::Expert,
            category: "languages".to_string(),
        });

        store.delete::<Experience>(exp);
        assert_eq!(store.snapshot().skills.len(), 1);
    }

    #[test]
    fn test_summary_replacement_preserves_id() {
        let mut store = ResumeStore::new();
        let id = store.snapshot().professional_summary.id;

        store.update_professional_summary(
            "Seasoned engineer.".to_string(),
            vec!["Rust".to_string()],
        );

        let summary = store.snapshot().professional_summary;
        assert_eq!(summary.id, id);
        assert_eq!(summary.content, "Seasoned engineer.");
        assert_eq!(summary.keywords, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_every_mutation_bumps_revision() {
        let mut store = ResumeStore::new();
        assert_eq!(store.revision(), 0);

        let id = store.add::<Experience>(acme_draft());
        assert_eq!(store.revision(), 1);

        store.update::<Experience>(
            id,
            ExperiencePatch {
                current: Some(true),
                ..ExperiencePatch::default()
            },
        );
        assert_eq!(store.revision(), 2);

        store.delete::<Experience>(id);
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn test_missed_update_does_not_bump_revision() {
        let mut store = ResumeStore::new();
        store.update::<Experience>(Uuid::new_v4(), ExperiencePatch::default());
        store.delete::<Experience>(Uuid::new_v4());
        assert_eq!(store.revision(), 0);
    }

    #[tokio::test]
    async fn test_watch_channel_observes_mutations() {
        let mut store = ResumeStore::new();
        let mut rx = store.subscribe();

        store.add::<Experience>(acme_draft());
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 1);

        store.update_personal_info(PersonalInfo::default());
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 2);
    }
}

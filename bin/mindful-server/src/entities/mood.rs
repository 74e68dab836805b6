use crate::entities::{MemoryStore, MoodEntry, NewMoodEntry};
use chrono::{DateTime, Days, NaiveTime, Utc};
use std::future::Future;
use uuid::Uuid;

pub trait MoodStore: Send + Sync + 'static {
    /// Entries owned by `user_id`, newest first.
    fn get_mood_entries(&self, user_id: &str) -> impl Future<Output = Vec<MoodEntry>> + Send;
    fn create_mood_entry(&self, input: NewMoodEntry) -> impl Future<Output = MoodEntry> + Send;
    /// Entries from every user created on or after midnight UTC `days` days ago.
    fn get_recent_mood_entries(&self, days: u32) -> impl Future<Output = Vec<MoodEntry>> + Send;
}

impl MoodStore for MemoryStore {
    async fn get_mood_entries(&self, user_id: &str) -> Vec<MoodEntry> {
        let mut entries: Vec<MoodEntry> = self
            .mood_entries
            .read()
            .await
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_unstable_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }

    async fn create_mood_entry(&self, input: NewMoodEntry) -> MoodEntry {
        let entry = MoodEntry {
            id: Uuid::new_v4().to_string(),
            user_id: input
                .user_id
                .unwrap_or_else(|| self.demo_user_id().to_owned()),
            mood: input.mood,
            notes: input.notes,
            created_at: Utc::now(),
        };
        self.mood_entries
            .write()
            .await
            .insert(entry.id.clone(), entry.clone());
        entry
    }

    async fn get_recent_mood_entries(&self, days: u32) -> Vec<MoodEntry> {
        let cutoff = recent_cutoff(Utc::now(), days);
        self.mood_entries
            .read()
            .await
            .values()
            .filter(|e| e.created_at >= cutoff)
            .cloned()
            .collect()
    }
}

/// Start of the UTC day `days` days before `now`.
pub(crate) fn recent_cutoff(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now.date_naive()
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(chrono::NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
        .and_utc()
}

#[cfg(test)]
impl MemoryStore {
    /// Insert a fully-formed entry, bypassing timestamping.
    pub(crate) async fn seed_mood_entry(&self, entry: MoodEntry) {
        self.mood_entries
            .write()
            .await
            .insert(entry.id.clone(), entry);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn store() -> MemoryStore {
        MemoryStore::new("demo-user")
    }

    fn new_entry(user: Option<&str>, mood: &str) -> NewMoodEntry {
        NewMoodEntry {
            user_id: user.map(str::to_owned),
            mood: mood.to_owned(),
            notes: None,
        }
    }

    fn aged_entry(user: &str, created_at: DateTime<Utc>) -> MoodEntry {
        MoodEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user.to_owned(),
            mood: "calm".into(),
            notes: None,
            created_at,
        }
    }

    #[tokio::test]
    async fn created_entry_is_returned_for_owner() {
        let store = store();
        let entry = store.create_mood_entry(new_entry(None, "happy")).await;
        assert_eq!(entry.user_id, "demo-user");
        assert_eq!(entry.notes, None);

        let entries = store.get_mood_entries("demo-user").await;
        assert_eq!(entries, vec![entry]);
        assert!(store.get_mood_entries("someone-else").await.is_empty());
    }

    #[tokio::test]
    async fn notes_are_copied() {
        let store = store();
        let entry = store
            .create_mood_entry(NewMoodEntry {
                user_id: Some("alice".into()),
                mood: "tired".into(),
                notes: Some("long day".into()),
            })
            .await;
        assert_eq!(entry.notes.as_deref(), Some("long day"));
        assert_eq!(entry.mood, "tired");
    }

    #[tokio::test]
    async fn entries_are_newest_first() {
        let store = store();
        let now = Utc::now();
        let oldest = aged_entry("demo-user", now - Duration::hours(3));
        let middle = aged_entry("demo-user", now - Duration::hours(2));
        let newest = store.create_mood_entry(new_entry(None, "great")).await;
        store.seed_mood_entry(middle.clone()).await;
        store.seed_mood_entry(oldest.clone()).await;

        let ids: Vec<String> = store
            .get_mood_entries("demo-user")
            .await
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
    }

    #[tokio::test]
    async fn recent_with_zero_days_keeps_only_today() {
        let store = store();
        let today = store.create_mood_entry(new_entry(None, "ok")).await;
        let yesterday = aged_entry(
            "demo-user",
            recent_cutoff(Utc::now(), 0) - Duration::seconds(1),
        );
        store.seed_mood_entry(yesterday).await;

        let recent = store.get_recent_mood_entries(0).await;
        assert_eq!(recent, vec![today]);
    }

    #[tokio::test]
    async fn recent_spans_all_users() {
        let store = store();
        store.create_mood_entry(new_entry(Some("alice"), "ok")).await;
        store.create_mood_entry(new_entry(Some("bob"), "meh")).await;
        store
            .seed_mood_entry(aged_entry("carol", Utc::now() - Duration::days(30)))
            .await;

        let recent = store.get_recent_mood_entries(7).await;
        assert_eq!(recent.len(), 2);
        assert!(recent.iter().any(|e| e.user_id == "alice"));
        assert!(recent.iter().any(|e| e.user_id == "bob"));
    }

    #[test]
    fn cutoff_is_midnight_days_ago() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 15, 30, 0).unwrap();
        assert_eq!(
            recent_cutoff(now, 0),
            Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()
        );
        assert_eq!(
            recent_cutoff(now, 7),
            Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap()
        );
    }
}

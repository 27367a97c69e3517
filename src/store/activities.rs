use chrono::Utc;
use tracing::info;

use super::ids::IdSequence;
use super::models::{Activity, ActivityFilter, NewActivity};

/// Ordered in-memory activity log. Insertion order is the listing order.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: Vec<Activity>,
    ids: IdSequence,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn list(&self, filter: &ActivityFilter) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }

    /// Case-insensitive equality on the pet name, unlike the substring match
    /// of [`ActivityFilter`].
    pub fn list_by_pet(&self, pet_name: &str) -> Vec<Activity> {
        let wanted = pet_name.to_lowercase();
        self.activities
            .iter()
            .filter(|a| a.pet_name.to_lowercase() == wanted)
            .cloned()
            .collect()
    }

    pub fn insert(&mut self, new: NewActivity) -> Activity {
        let activity = Activity {
            id: self.ids.next_id(),
            pet_name: new.pet_name,
            activity_type: new.activity_type,
            duration: new.duration,
            date_time: new.date_time,
            created_at: Utc::now(),
            occurred_on: new.occurred_on,
        };
        info!(
            "Logged {} for {} (id {})",
            activity.activity_type, activity.pet_name, activity.id
        );
        self.activities.push(activity.clone());
        activity
    }

    /// Removes the first record with `id`, returning it.
    pub fn remove(&mut self, id: u64) -> Option<Activity> {
        let index = self.activities.iter().position(|a| a.id == id)?;
        let removed = self.activities.remove(index);
        info!("Deleted activity {}", removed.id);
        Some(removed)
    }
}

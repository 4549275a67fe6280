// ABOUTME: JSON-backed in-memory implementation of the engine's repository traits
// ABOUTME: Loads and saves dataset files, filters records by inclusive ranges, keeps snapshots behind a lock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! In-memory training store
//!
//! Dataset layout:
//!
//! ```json
//! {
//!   "muscle_groups": [{ "id": "mg-quads", "name": "quadriceps", "label": "Quadriceps", "body_part": "legs" }],
//!   "activity_muscles": [{ "activity": "running", "muscle_group": "quadriceps", "load_factor": 0.8 }],
//!   "users": {
//!     "6a2f41a3-c54c-fce8-32d2-0324e1c32e22": {
//!       "workouts": [],
//!       "strength_records": [],
//!       "injuries": [],
//!       "snapshots": []
//!     }
//!   }
//! }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::mem;
use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pierre_core::errors::{AppError, AppResult, ErrorCode};
use pierre_core::models::{
    ActivityMuscleLoad, CompletedWorkout, DateRange, Injury, MuscleGroup, StrengthRecord,
    WorkoutMuscleLoadSnapshot,
};
use pierre_intelligence::repository::{
    InjuryRepository, MuscleLoadSnapshotRepository, StrengthHistoryRepository, WorkoutRepository,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Records belonging to one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecords {
    /// Completed workouts
    #[serde(default)]
    pub workouts: Vec<CompletedWorkout>,
    /// Strength history
    #[serde(default)]
    pub strength_records: Vec<StrengthRecord>,
    /// Injuries, active or resolved
    #[serde(default)]
    pub injuries: Vec<Injury>,
    /// Muscle load snapshots recorded so far
    #[serde(default)]
    pub snapshots: Vec<WorkoutMuscleLoadSnapshot>,
}

/// Serialized form of the store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingDataset {
    /// Muscle group catalog
    #[serde(default)]
    pub muscle_groups: Vec<MuscleGroup>,
    /// Activity to muscle group load table
    #[serde(default)]
    pub activity_muscles: Vec<ActivityMuscleLoad>,
    /// Records per user
    #[serde(default)]
    pub users: BTreeMap<Uuid, UserRecords>,
}

impl TrainingDataset {
    /// Check catalog uniqueness and load factor ranges
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate muscle group ids or a load factor outside `(0, 1]`
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = self
            .muscle_groups
            .iter()
            .find(|group| !seen.insert(group.id.as_str()))
        {
            return Err(AppError::invalid_input(format!(
                "duplicate muscle group id '{}'",
                duplicate.id
            ))
            .with_resource_id(duplicate.id.clone()));
        }

        for (user_id, records) in &self.users {
            for workout in &records.workouts {
                let invalid = workout
                    .exercises()
                    .flat_map(|(_, slot)| slot.muscle_groups.iter())
                    .find(|mapping| !(mapping.load_factor > 0.0 && mapping.load_factor <= 1.0));
                if let Some(mapping) = invalid {
                    return Err(AppError::new(
                        ErrorCode::ValueOutOfRange,
                        format!(
                            "load factor {} for muscle group '{}' must be in (0, 1]",
                            mapping.load_factor, mapping.muscle_group_id
                        ),
                    )
                    .with_user_id(*user_id)
                    .with_resource_id(workout.id.to_string())
                    .with_details(json!({ "muscle_group_id": mapping.muscle_group_id })));
                }
            }
        }
        Ok(())
    }
}

/// In-memory store implementing every repository trait of the engine
#[derive(Debug, Default)]
pub struct InMemoryTrainingStore {
    muscle_groups: Vec<MuscleGroup>,
    activity_muscles: Vec<ActivityMuscleLoad>,
    users: BTreeMap<Uuid, UserRecords>,
    snapshots: RwLock<BTreeMap<Uuid, Vec<WorkoutMuscleLoadSnapshot>>>,
}

impl InMemoryTrainingStore {
    /// Store over a validated dataset
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset fails validation
    pub fn from_dataset(dataset: TrainingDataset) -> AppResult<Self> {
        dataset.validate()?;

        let TrainingDataset {
            muscle_groups,
            activity_muscles,
            mut users,
        } = dataset;
        let snapshots = users
            .iter_mut()
            .map(|(user_id, records)| (*user_id, mem::take(&mut records.snapshots)))
            .collect();

        Ok(Self {
            muscle_groups,
            activity_muscles,
            users,
            snapshots: RwLock::new(snapshots),
        })
    }

    /// Parse a dataset from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the dataset is invalid
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let dataset: TrainingDataset = serde_json::from_str(json)?;
        Self::from_dataset(dataset)
    }

    /// Read and parse a dataset file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
        let store = Self::from_json_str(&contents)
            .map_err(|e| e.with_resource_id(path.display().to_string()))?;

        debug!(
            path = %path.display(),
            users = store.users.len(),
            muscle_groups = store.muscle_groups.len(),
            "Loaded training dataset"
        );
        Ok(store)
    }

    /// Activity to muscle group load table
    #[must_use]
    pub fn activity_muscles(&self) -> &[ActivityMuscleLoad] {
        &self.activity_muscles
    }

    /// Number of users with records
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of catalog muscle groups
    #[must_use]
    pub fn muscle_group_count(&self) -> usize {
        self.muscle_groups.len()
    }

    /// Whether the dataset holds records for `user_id`
    #[must_use]
    pub fn contains_user(&self, user_id: Uuid) -> bool {
        self.users.contains_key(&user_id)
    }

    /// Current contents, snapshots written since loading included
    pub async fn to_dataset(&self) -> TrainingDataset {
        let mut users = self.users.clone();
        for (user_id, snapshots) in self.snapshots.read().await.iter() {
            users
                .entry(*user_id)
                .or_default()
                .snapshots
                .clone_from(snapshots);
        }
        TrainingDataset {
            muscle_groups: self.muscle_groups.clone(),
            activity_muscles: self.activity_muscles.clone(),
            users,
        }
    }

    /// Write the current contents back as a dataset file
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be serialized or the file cannot be written
    pub async fn save_to_path(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        let dataset = self.to_dataset().await;
        let contents = serde_json::to_string_pretty(&dataset)?;
        fs::write(path, contents).await.map_err(|e| {
            AppError::storage(format!("failed to write dataset: {e}"))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;

        debug!(
            path = %path.display(),
            users = dataset.users.len(),
            "Saved training dataset"
        );
        Ok(())
    }

    fn user(&self, user_id: Uuid) -> Option<&UserRecords> {
        self.users.get(&user_id)
    }
}

fn within<'a, T: Clone + 'a>(
    records: impl IntoIterator<Item = &'a T>,
    range: &DateRange,
    timestamp: impl Fn(&T) -> DateTime<Utc>,
) -> Vec<T> {
    let mut selected: Vec<T> = records
        .into_iter()
        .filter(|record| range.contains(timestamp(record)))
        .cloned()
        .collect();
    selected.sort_by_key(&timestamp);
    selected
}

#[async_trait]
impl WorkoutRepository for InMemoryTrainingStore {
    async fn completed_workouts(
        &self,
        user_id: Uuid,
        range: &DateRange,
    ) -> AppResult<Vec<CompletedWorkout>> {
        Ok(self.user(user_id).map_or_else(Vec::new, |records| {
            within(&records.workouts, range, |workout| workout.completed_at)
        }))
    }

    async fn muscle_groups(&self) -> AppResult<Vec<MuscleGroup>> {
        Ok(self.muscle_groups.clone())
    }
}

#[async_trait]
impl StrengthHistoryRepository for InMemoryTrainingStore {
    async fn strength_records(
        &self,
        user_id: Uuid,
        range: &DateRange,
    ) -> AppResult<Vec<StrengthRecord>> {
        Ok(self.user(user_id).map_or_else(Vec::new, |records| {
            within(&records.strength_records, range, |record| record.performed_at)
        }))
    }
}

#[async_trait]
impl InjuryRepository for InMemoryTrainingStore {
    async fn active_injuries(
        &self,
        user_id: Uuid,
        as_of: DateTime<Utc>,
    ) -> AppResult<Vec<Injury>> {
        Ok(self.user(user_id).map_or_else(Vec::new, |records| {
            records
                .injuries
                .iter()
                .filter(|injury| injury.is_active_at(as_of))
                .cloned()
                .collect()
        }))
    }
}

#[async_trait]
impl MuscleLoadSnapshotRepository for InMemoryTrainingStore {
    async fn snapshots(
        &self,
        user_id: Uuid,
        range: &DateRange,
    ) -> AppResult<Vec<WorkoutMuscleLoadSnapshot>> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots.get(&user_id).map_or_else(Vec::new, |stored| {
            within(stored, range, |snapshot| snapshot.completed_at)
        }))
    }

    async fn save_snapshots(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
        snapshots: Vec<WorkoutMuscleLoadSnapshot>,
    ) -> AppResult<()> {
        debug_assert!(snapshots
            .iter()
            .all(|snapshot| snapshot.workout_id == workout_id));
        let count = snapshots.len();
        let mut stored = self.snapshots.write().await;
        let user_snapshots = stored.entry(user_id).or_default();
        let before = user_snapshots.len();
        user_snapshots.retain(|snapshot| snapshot.workout_id != workout_id);
        let replaced = before - user_snapshots.len();
        user_snapshots.extend(snapshots);
        debug!(
            user_id = %user_id,
            workout_id = %workout_id,
            count,
            replaced,
            "Stored muscle load snapshots"
        );
        Ok(())
    }
}

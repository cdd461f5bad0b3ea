// ABOUTME: In-memory catalog cache with TTL expiry and stale-serving refresh policy
// ABOUTME: Holds the normalized exercise snapshot and derives facet lists from it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! # Catalog Cache
//!
//! Process-lifetime cache for the normalized exercise catalog. The upstream
//! catalog is large and slow, so the snapshot is refreshed at most once per
//! TTL window and replaced wholesale — cached records are never mutated in
//! place.
//!
//! Refresh policy: a refresh only replaces the snapshot when the fetch
//! returns a non-empty result; a failed or empty refresh keeps serving the
//! stale snapshot. If no snapshot has ever been populated, callers get an
//! explicit "temporarily unavailable" error instead of an empty success.
//! Concurrent refreshes are coalesced behind a single in-flight fetch.

use crate::errors::{AppError, AppResult};
use crate::external::ExerciseDbClient;
use crate::models::{ExerciseRecord, Facet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Records requested per bulk refresh; covers the full upstream catalog
const BULK_FETCH_LIMIT: u32 = 1500;

/// Which facet to project from the exercise snapshot
#[derive(Debug, Clone, Copy)]
enum FacetKind {
    BodyPart,
    Equipment,
    Target,
}

/// Cached snapshot of the normalized catalog
#[derive(Debug, Clone)]
struct Snapshot {
    exercises: Arc<Vec<ExerciseRecord>>,
    fetched_at: Instant,
}

/// Process-lifetime exercise catalog cache.
///
/// Constructed once per process and injected wherever catalog data is
/// needed; the matcher and generator never hold their own copies.
#[derive(Debug)]
pub struct CatalogCache {
    ttl: Duration,
    snapshot: RwLock<Option<Snapshot>>,
    refresh_lock: Mutex<()>,
}

impl CatalogCache {
    /// Create an empty cache with the given snapshot TTL
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            snapshot: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Get the current exercise snapshot, refreshing it when expired.
    ///
    /// # Errors
    ///
    /// Returns an error only when no snapshot has ever been populated and
    /// the refresh attempt cannot supply one.
    #[instrument(skip_all)]
    pub async fn exercises(&self, client: &ExerciseDbClient) -> AppResult<Arc<Vec<ExerciseRecord>>> {
        if let Some(fresh) = self.fresh_snapshot().await {
            return Ok(fresh);
        }

        // Single-flight: one refresh shared by all concurrent waiters
        let _guard = self.refresh_lock.lock().await;

        // Another waiter may have completed the refresh while we queued
        if let Some(fresh) = self.fresh_snapshot().await {
            return Ok(fresh);
        }

        match client.list_exercises(BULK_FETCH_LIMIT, 0).await {
            Ok(exercises) if !exercises.is_empty() => {
                let exercises = Arc::new(exercises);
                let mut guard = self.snapshot.write().await;
                *guard = Some(Snapshot {
                    exercises: Arc::clone(&exercises),
                    fetched_at: Instant::now(),
                });
                info!(count = exercises.len(), "Catalog snapshot refreshed");
                Ok(exercises)
            }
            Ok(_) => {
                warn!("Catalog refresh returned an empty list, keeping stale snapshot");
                self.stale_or_unavailable(AppError::resource_unavailable(
                    "Exercise catalog is temporarily unavailable",
                ))
                .await
            }
            Err(err) => {
                warn!(error = %err, "Catalog refresh failed, keeping stale snapshot");
                self.stale_or_unavailable(err).await
            }
        }
    }

    /// Unique body parts in the current snapshot
    ///
    /// # Errors
    ///
    /// Returns an error when neither the snapshot nor the upstream facet
    /// endpoint can supply any values.
    pub async fn body_parts(&self, client: &ExerciseDbClient) -> AppResult<Vec<Facet>> {
        self.facets(client, FacetKind::BodyPart).await
    }

    /// Unique equipment types in the current snapshot
    ///
    /// # Errors
    ///
    /// Returns an error when neither the snapshot nor the upstream facet
    /// endpoint can supply any values.
    pub async fn equipment(&self, client: &ExerciseDbClient) -> AppResult<Vec<Facet>> {
        self.facets(client, FacetKind::Equipment).await
    }

    /// Unique target muscles in the current snapshot
    ///
    /// # Errors
    ///
    /// Returns an error when neither the snapshot nor the upstream facet
    /// endpoint can supply any values.
    pub async fn targets(&self, client: &ExerciseDbClient) -> AppResult<Vec<Facet>> {
        self.facets(client, FacetKind::Target).await
    }

    /// Drop the current snapshot so the next call refetches
    pub async fn invalidate(&self) {
        let mut guard = self.snapshot.write().await;
        *guard = None;
        debug!("Catalog snapshot invalidated");
    }

    /// Install a snapshot directly, bypassing the upstream fetch.
    ///
    /// Used by tests and by seed tooling; follows the same
    /// replace-the-snapshot semantics as a refresh.
    pub async fn prime(&self, exercises: Vec<ExerciseRecord>) {
        let mut guard = self.snapshot.write().await;
        *guard = Some(Snapshot {
            exercises: Arc::new(exercises),
            fetched_at: Instant::now(),
        });
    }

    async fn fresh_snapshot(&self) -> Option<Arc<Vec<ExerciseRecord>>> {
        let guard = self.snapshot.read().await;
        guard.as_ref().and_then(|snapshot| {
            if snapshot.fetched_at.elapsed() < self.ttl {
                Some(Arc::clone(&snapshot.exercises))
            } else {
                None
            }
        })
    }

    /// Serve the stale snapshot if one exists, otherwise surface `err`
    async fn stale_or_unavailable(
        &self,
        err: AppError,
    ) -> AppResult<Arc<Vec<ExerciseRecord>>> {
        let guard = self.snapshot.read().await;
        guard
            .as_ref()
            .map(|snapshot| Arc::clone(&snapshot.exercises))
            .ok_or(err)
    }

    async fn facets(&self, client: &ExerciseDbClient, kind: FacetKind) -> AppResult<Vec<Facet>> {
        match self.exercises(client).await {
            Ok(exercises) => Ok(project_facets(&exercises, kind)),
            Err(err) => {
                // No snapshot to project from; the dedicated upstream facet
                // endpoints fail open, so an empty answer means unavailable.
                let values = match kind {
                    FacetKind::BodyPart => client.body_part_list().await,
                    FacetKind::Equipment => client.equipment_list().await,
                    FacetKind::Target => client.target_list().await,
                };
                if values.is_empty() {
                    Err(err)
                } else {
                    Ok(values.into_iter().map(|name| Facet { name }).collect())
                }
            }
        }
    }
}

/// Project unique, non-empty facet values preserving first-seen order
fn project_facets(exercises: &[ExerciseRecord], kind: FacetKind) -> Vec<Facet> {
    let mut seen = std::collections::HashSet::new();
    let mut facets = Vec::new();
    for exercise in exercises {
        let value = match kind {
            FacetKind::BodyPart => &exercise.body_part,
            FacetKind::Equipment => &exercise.equipment,
            FacetKind::Target => &exercise.target,
        };
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.clone()) {
            facets.push(Facet {
                name: value.clone(),
            });
        }
    }
    facets
}

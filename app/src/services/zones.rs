//! Interactive zone session for one field-map view
//!
//! Tracks the draw/select lifecycle: draw mode, the in-progress candidate
//! rectangle, the pending naming step and the current selection. At most one
//! candidate and one selection exist at a time; zone mutations are
//! append-only except for the clear-all bulk reset, and every mutation is
//! persisted under the project's zone key.

use std::sync::Arc;

use shared::models::{Point, Rect, Zone};

use crate::store::{KeyValueStore, StoreKey};

/// Draw-gesture state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawState {
    /// Draw mode off; zones are selectable
    Idle,
    /// Draw mode on, no active drag
    Armed,
    /// Pointer down, tracking a candidate rectangle
    Dragging { anchor: Point, rect: Rect },
    /// Candidate parked until the caller supplies a name
    AwaitingName { rect: Rect },
}

/// Result of releasing the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// No drag was in progress
    NoGesture,
    /// Candidate below the minimum size, silently dropped
    Discarded,
    /// Candidate accepted; call `commit_pending` with a name
    NamePending,
}

pub struct ZoneSession {
    project_id: String,
    zones: Vec<Zone>,
    state: DrawState,
    selected: Option<String>,
    store: Arc<dyn KeyValueStore>,
}

impl ZoneSession {
    /// Open the session for a project, loading its persisted zones.
    ///
    /// A missing or corrupt zone record degrades to an empty collection.
    pub fn load(project_id: impl Into<String>, store: Arc<dyn KeyValueStore>) -> Self {
        let project_id = project_id.into();
        let zones = match store.get(&StoreKey::Zones(&project_id)) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("corrupt zone record for project {project_id}: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to load zones for project {project_id}: {e}");
                Vec::new()
            }
        };
        Self {
            project_id,
            zones,
            state: DrawState::Idle,
            selected: None,
            store,
        }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn draw_mode_active(&self) -> bool {
        !matches!(self.state, DrawState::Idle)
    }

    /// The rectangle being dragged or awaiting its name, if any
    pub fn candidate_rect(&self) -> Option<Rect> {
        match self.state {
            DrawState::Dragging { rect, .. } | DrawState::AwaitingName { rect } => Some(rect),
            _ => None,
        }
    }

    pub fn selected_zone(&self) -> Option<&Zone> {
        let id = self.selected.as_deref()?;
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// Toggle draw mode. Drops any candidate and always clears the selection.
    pub fn toggle_draw_mode(&mut self) {
        self.selected = None;
        self.state = match self.state {
            DrawState::Idle => DrawState::Armed,
            _ => DrawState::Idle,
        };
    }

    /// Begin a drag. Ignored unless draw mode is armed and no gesture is live.
    pub fn pointer_down(&mut self, point: Point) {
        if !matches!(self.state, DrawState::Armed) {
            return;
        }
        self.selected = None;
        self.state = DrawState::Dragging {
            anchor: point,
            rect: Rect::from_corners(point, point),
        };
    }

    /// Update the candidate rectangle from the current pointer position
    pub fn pointer_move(&mut self, point: Point) {
        if let DrawState::Dragging { anchor, .. } = self.state {
            self.state = DrawState::Dragging {
                anchor,
                rect: Rect::from_corners(anchor, point),
            };
        }
    }

    /// End the drag: sub-minimum candidates are accidental clicks and vanish
    /// without a prompt, valid ones wait for a name.
    pub fn pointer_up(&mut self) -> DrawOutcome {
        match self.state {
            DrawState::Dragging { rect, .. } => {
                if rect.meets_minimum_size() {
                    self.state = DrawState::AwaitingName { rect };
                    DrawOutcome::NamePending
                } else {
                    self.state = DrawState::Armed;
                    DrawOutcome::Discarded
                }
            }
            _ => DrawOutcome::NoGesture,
        }
    }

    /// The pointer leaving the map ends the drag like a release
    pub fn pointer_leave(&mut self) -> DrawOutcome {
        self.pointer_up()
    }

    /// Name and append the pending candidate. A blank name abandons it.
    pub fn commit_pending(&mut self, name: &str) -> Option<Zone> {
        let DrawState::AwaitingName { rect } = self.state else {
            return None;
        };
        self.state = DrawState::Armed;
        if name.trim().is_empty() {
            return None;
        }
        let zone = Zone::from_rect(name, rect, self.zones.len());
        self.zones.push(zone.clone());
        self.persist();
        Some(zone)
    }

    /// Drop the pending candidate without creating a zone
    pub fn abandon_pending(&mut self) {
        if matches!(self.state, DrawState::AwaitingName { .. }) {
            self.state = DrawState::Armed;
        }
    }

    /// Select a rendered zone. Only possible outside draw mode.
    pub fn select_zone(&mut self, zone_id: &str) -> bool {
        if self.draw_mode_active() {
            return false;
        }
        if self.zones.iter().any(|zone| zone.id == zone_id) {
            self.selected = Some(zone_id.to_string());
            true
        } else {
            false
        }
    }

    /// A background click deselects
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Remove every zone. The caller confirms with the user first; this is
    /// the only deletion path.
    pub fn clear_all(&mut self) {
        self.zones.clear();
        self.selected = None;
        self.persist();
    }

    /// Persist failures are logged, never surfaced: local persistence is
    /// best-effort by design.
    fn persist(&self) {
        let payload = match serde_json::to_string(&self.zones) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("cannot serialize zones for project {}: {e}", self.project_id);
                return;
            }
        };
        if let Err(e) = self
            .store
            .set(&StoreKey::Zones(&self.project_id), &payload)
        {
            tracing::warn!("failed to persist zones for project {}: {e}", self.project_id);
        }
    }
}

//! Tests for the interactive zone drawing session

use std::sync::Arc;

use agri_pro_app::services::zones::{DrawOutcome, DrawState, ZoneSession};
use agri_pro_app::store::{KeyValueStore, MemoryStore, StoreKey};
use shared::models::{Point, ZONE_BORDER_COLORS, ZONE_COLORS};

fn session() -> (ZoneSession, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let session = ZoneSession::load("p1", store.clone());
    (session, store)
}

fn point(x: f64, y: f64) -> Point {
    Point { x, y }
}

/// Drive one full drag from `a` to `b` while draw mode is armed
fn drag(session: &mut ZoneSession, a: Point, b: Point) -> DrawOutcome {
    session.pointer_down(a);
    session.pointer_move(b);
    session.pointer_up()
}

mod drawing {
    use super::*;

    #[test]
    fn full_gesture_creates_named_zone() {
        let (mut session, _) = session();
        session.toggle_draw_mode();

        let outcome = drag(&mut session, point(10.0, 10.0), point(30.0, 25.0));
        assert_eq!(outcome, DrawOutcome::NamePending);
        assert!(matches!(session.state(), DrawState::AwaitingName { .. }));

        let zone = session.commit_pending("Parcelle A").unwrap();
        assert_eq!(zone.name, "Parcelle A");
        assert_eq!(zone.x, 10.0);
        assert_eq!(zone.width, 20.0);
        assert_eq!(session.zones().len(), 1);
        // back to armed, ready for the next drag
        assert_eq!(session.state(), DrawState::Armed);
    }

    #[test]
    fn sub_minimum_drag_vanishes_without_prompt() {
        let (mut session, _) = session();
        session.toggle_draw_mode();

        let outcome = drag(&mut session, point(10.0, 10.0), point(10.5, 40.0));
        assert_eq!(outcome, DrawOutcome::Discarded);
        assert_eq!(session.state(), DrawState::Armed);
        assert!(session.zones().is_empty());
    }

    #[test]
    fn blank_name_abandons_candidate() {
        let (mut session, _) = session();
        session.toggle_draw_mode();
        drag(&mut session, point(5.0, 5.0), point(20.0, 20.0));

        assert!(session.commit_pending("   ").is_none());
        assert!(session.zones().is_empty());
        assert_eq!(session.state(), DrawState::Armed);
    }

    #[test]
    fn pointer_leave_ends_drag_like_release() {
        let (mut session, _) = session();
        session.toggle_draw_mode();
        session.pointer_down(point(5.0, 5.0));
        session.pointer_move(point(40.0, 40.0));

        assert_eq!(session.pointer_leave(), DrawOutcome::NamePending);
        assert_eq!(
            session.candidate_rect().map(|r| (r.width, r.height)),
            Some((35.0, 35.0))
        );
    }

    #[test]
    fn pointer_events_ignored_outside_draw_mode() {
        let (mut session, _) = session();
        session.pointer_down(point(5.0, 5.0));
        session.pointer_move(point(40.0, 40.0));
        assert_eq!(session.pointer_up(), DrawOutcome::NoGesture);
        assert_eq!(session.state(), DrawState::Idle);
    }

    #[test]
    fn toggling_draw_mode_drops_live_candidate() {
        let (mut session, _) = session();
        session.toggle_draw_mode();
        session.pointer_down(point(5.0, 5.0));
        session.pointer_move(point(40.0, 40.0));

        session.toggle_draw_mode();
        assert_eq!(session.state(), DrawState::Idle);
        assert_eq!(session.candidate_rect(), None);
        assert!(session.zones().is_empty());
    }
}

mod palette {
    use super::*;

    fn add_zone(session: &mut ZoneSession, name: &str) {
        drag(session, point(5.0, 5.0), point(20.0, 20.0));
        session.commit_pending(name).unwrap();
    }

    #[test]
    fn colors_cycle_by_creation_order() {
        let (mut session, _) = session();
        session.toggle_draw_mode();
        for i in 0..6 {
            add_zone(&mut session, &format!("Zone {i}"));
        }
        let zones = session.zones();
        assert_eq!(zones[0].color, ZONE_COLORS[0]);
        assert_eq!(zones[4].color, ZONE_COLORS[4]);
        // sixth zone wraps to the first slot
        assert_eq!(zones[5].color, ZONE_COLORS[0]);
        assert_eq!(zones[5].border_color, ZONE_BORDER_COLORS[0]);
    }

    #[test]
    fn emptied_collection_restarts_cycle() {
        let (mut session, _) = session();
        session.toggle_draw_mode();
        add_zone(&mut session, "A");
        add_zone(&mut session, "B");
        session.clear_all();

        add_zone(&mut session, "C");
        assert_eq!(session.zones()[0].color, ZONE_COLORS[0]);
    }
}

mod selection {
    use super::*;

    fn seeded_session() -> ZoneSession {
        let (mut session, _) = session();
        session.toggle_draw_mode();
        drag(&mut session, point(5.0, 5.0), point(20.0, 20.0));
        session.commit_pending("Parcelle A").unwrap();
        session.toggle_draw_mode();
        session
    }

    #[test]
    fn select_works_only_outside_draw_mode() {
        let mut session = seeded_session();
        let id = session.zones()[0].id.clone();

        assert!(session.select_zone(&id));
        assert_eq!(session.selected_zone().map(|z| z.id.clone()), Some(id.clone()));

        session.toggle_draw_mode();
        assert!(session.selected_zone().is_none());
        assert!(!session.select_zone(&id));
    }

    #[test]
    fn unknown_id_is_not_selectable() {
        let mut session = seeded_session();
        assert!(!session.select_zone("missing"));
        assert!(session.selected_zone().is_none());
    }

    #[test]
    fn background_click_deselects() {
        let mut session = seeded_session();
        let id = session.zones()[0].id.clone();
        session.select_zone(&id);
        session.clear_selection();
        assert!(session.selected_zone().is_none());
    }

    #[test]
    fn starting_a_drag_clears_selection() {
        let mut session = seeded_session();
        let id = session.zones()[0].id.clone();
        session.select_zone(&id);

        session.toggle_draw_mode();
        session.pointer_down(point(50.0, 50.0));
        assert!(session.selected_zone().is_none());
    }
}

mod persistence {
    use super::*;

    #[test]
    fn zones_survive_a_reload() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut session = ZoneSession::load("p1", store.clone());
            session.toggle_draw_mode();
            drag(&mut session, point(5.0, 5.0), point(20.0, 20.0));
            session.commit_pending("Parcelle A").unwrap();
        }
        let reloaded = ZoneSession::load("p1", store);
        assert_eq!(reloaded.zones().len(), 1);
        assert_eq!(reloaded.zones()[0].name, "Parcelle A");
    }

    #[test]
    fn zone_records_are_scoped_per_project() {
        let store = Arc::new(MemoryStore::new());
        let mut session = ZoneSession::load("p1", store.clone());
        session.toggle_draw_mode();
        drag(&mut session, point(5.0, 5.0), point(20.0, 20.0));
        session.commit_pending("Parcelle A").unwrap();

        let other = ZoneSession::load("p2", store.clone());
        assert!(other.zones().is_empty());
        assert!(store.get(&StoreKey::Zones("p1")).unwrap().is_some());
        assert!(store.get(&StoreKey::Zones("p2")).unwrap().is_none());
    }

    #[test]
    fn corrupt_record_degrades_to_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(&StoreKey::Zones("p1"), "not json").unwrap();
        let session = ZoneSession::load("p1", store);
        assert!(session.zones().is_empty());
    }

    #[test]
    fn clear_all_persists_the_empty_collection() {
        let store = Arc::new(MemoryStore::new());
        let mut session = ZoneSession::load("p1", store.clone());
        session.toggle_draw_mode();
        drag(&mut session, point(5.0, 5.0), point(20.0, 20.0));
        session.commit_pending("Parcelle A").unwrap();

        session.clear_all();
        assert_eq!(
            store.get(&StoreKey::Zones("p1")).unwrap().as_deref(),
            Some("[]")
        );
    }
}

use super::fragment::FragmentStore;
use super::registry::{SlideId, SlideRegistry};

/// What a navigation call actually did. Boundary and empty-deck cases are
/// deliberate no-ops, distinct from invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Shown { position: usize },
    AtBoundary,
    DeckEmpty,
    UnknownSlide(SlideId),
}

/// Owns the active-slide pointer. The pointer names a slide by identifier;
/// it never owns one.
#[derive(Default)]
pub struct NavigationController {
    active: Option<SlideId>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn active(&self) -> Option<&SlideId> {
        self.active.as_ref()
    }

    pub fn active_position(&self, registry: &SlideRegistry) -> Option<usize> {
        self.active.as_ref().and_then(|id| registry.index_of(id))
    }

    /// Activate `id`: deactivate the current surface, activate the target,
    /// move the pointer and write the target's position to the fragment
    /// store. An unknown identifier changes nothing.
    pub fn show_slide(
        &mut self,
        registry: &mut SlideRegistry,
        store: &mut dyn FragmentStore,
        id: &SlideId,
    ) -> NavOutcome {
        let Some(position) = registry.index_of(id) else {
            return NavOutcome::UnknownSlide(id.clone());
        };

        if let Some(current) = self.active.take()
            && let Some(surface) = registry.surface_mut(&current)
        {
            surface.deactivate();
        }

        if let Some(surface) = registry.surface_mut_at(position) {
            surface.activate();
        }
        self.active = Some(id.clone());
        store.write(&position.to_string());
        NavOutcome::Shown { position }
    }

    /// Activate the first registered slide without touching the fragment
    /// store. Used by the registrar for default activation, so a pending
    /// deep-link fragment survives until every slide has registered.
    pub fn activate_initial(&mut self, registry: &mut SlideRegistry, id: &SlideId) {
        if registry.index_of(id).is_none() {
            return;
        }
        if let Some(surface) = registry.surface_mut(id) {
            surface.activate();
        }
        self.active = Some(id.clone());
    }

    pub fn next_slide(
        &mut self,
        registry: &mut SlideRegistry,
        store: &mut dyn FragmentStore,
    ) -> NavOutcome {
        if registry.is_empty() {
            return NavOutcome::DeckEmpty;
        }
        match self.active_position(registry) {
            // Pointer lost or never set: re-anchor at the first slide.
            None => self.show_position(registry, store, 0),
            Some(pos) if pos + 1 < registry.len() => self.show_position(registry, store, pos + 1),
            Some(_) => NavOutcome::AtBoundary,
        }
    }

    pub fn prev_slide(
        &mut self,
        registry: &mut SlideRegistry,
        store: &mut dyn FragmentStore,
    ) -> NavOutcome {
        if registry.is_empty() {
            return NavOutcome::DeckEmpty;
        }
        match self.active_position(registry) {
            None => self.show_position(registry, store, 0),
            Some(pos) if pos > 0 => self.show_position(registry, store, pos - 1),
            Some(_) => NavOutcome::AtBoundary,
        }
    }

    pub fn first_slide(
        &mut self,
        registry: &mut SlideRegistry,
        store: &mut dyn FragmentStore,
    ) -> NavOutcome {
        if registry.is_empty() {
            return NavOutcome::DeckEmpty;
        }
        self.show_position(registry, store, 0)
    }

    pub fn last_slide(
        &mut self,
        registry: &mut SlideRegistry,
        store: &mut dyn FragmentStore,
    ) -> NavOutcome {
        if registry.is_empty() {
            return NavOutcome::DeckEmpty;
        }
        self.show_position(registry, store, registry.len() - 1)
    }

    fn show_position(
        &mut self,
        registry: &mut SlideRegistry,
        store: &mut dyn FragmentStore,
        position: usize,
    ) -> NavOutcome {
        match registry.id_at(position) {
            Some(id) => {
                let id = id.clone();
                self.show_slide(registry, store, &id)
            }
            None => NavOutcome::DeckEmpty,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::app::deck::testing::{TestFragment, TestSurface};

    fn deck(ids: &[&str]) -> (SlideRegistry, Vec<Rc<Cell<bool>>>) {
        let mut registry = SlideRegistry::new();
        let mut flags = Vec::new();
        for id in ids {
            let (surface, flag) = TestSurface::new();
            registry.add(SlideId::from(*id), Box::new(surface)).unwrap();
            flags.push(flag);
        }
        (registry, flags)
    }

    fn active_count(flags: &[Rc<Cell<bool>>]) -> usize {
        flags.iter().filter(|f| f.get()).count()
    }

    #[test]
    fn test_show_slide_activates_and_writes_fragment() {
        let (mut registry, flags) = deck(&["a", "b", "c"]);
        let mut store = TestFragment::default();
        let mut nav = NavigationController::new();

        let outcome = nav.show_slide(&mut registry, &mut store, &SlideId::from("b"));
        assert_eq!(outcome, NavOutcome::Shown { position: 1 });
        assert_eq!(nav.active(), Some(&SlideId::from("b")));
        assert_eq!(store.value.as_deref(), Some("1"));
        assert!(flags[1].get());
        assert_eq!(active_count(&flags), 1);
    }

    #[test]
    fn test_show_slide_deactivates_previous() {
        let (mut registry, flags) = deck(&["a", "b"]);
        let mut store = TestFragment::default();
        let mut nav = NavigationController::new();

        nav.show_slide(&mut registry, &mut store, &SlideId::from("a"));
        nav.show_slide(&mut registry, &mut store, &SlideId::from("b"));
        assert!(!flags[0].get());
        assert!(flags[1].get());
        assert_eq!(active_count(&flags), 1);
    }

    #[test]
    fn test_show_unknown_slide_changes_nothing() {
        let (mut registry, flags) = deck(&["a", "b"]);
        let mut store = TestFragment::default();
        let mut nav = NavigationController::new();
        nav.show_slide(&mut registry, &mut store, &SlideId::from("a"));

        let outcome = nav.show_slide(&mut registry, &mut store, &SlideId::from("ghost"));
        assert_eq!(outcome, NavOutcome::UnknownSlide(SlideId::from("ghost")));
        assert_eq!(nav.active(), Some(&SlideId::from("a")));
        assert_eq!(store.value.as_deref(), Some("0"));
        assert_eq!(store.writes, 1);
        assert!(flags[0].get());
    }

    #[test]
    fn test_next_strictly_increases_then_stops() {
        let (mut registry, _flags) = deck(&["a", "b", "c"]);
        let mut store = TestFragment::default();
        let mut nav = NavigationController::new();
        nav.first_slide(&mut registry, &mut store);

        assert_eq!(
            nav.next_slide(&mut registry, &mut store),
            NavOutcome::Shown { position: 1 }
        );
        assert_eq!(
            nav.next_slide(&mut registry, &mut store),
            NavOutcome::Shown { position: 2 }
        );
        // No wraparound: further calls are no-ops at the edge.
        assert_eq!(nav.next_slide(&mut registry, &mut store), NavOutcome::AtBoundary);
        assert_eq!(nav.next_slide(&mut registry, &mut store), NavOutcome::AtBoundary);
        assert_eq!(nav.active_position(&registry), Some(2));
    }

    #[test]
    fn test_prev_strictly_decreases_then_stops() {
        let (mut registry, _flags) = deck(&["a", "b", "c"]);
        let mut store = TestFragment::default();
        let mut nav = NavigationController::new();
        nav.last_slide(&mut registry, &mut store);

        assert_eq!(
            nav.prev_slide(&mut registry, &mut store),
            NavOutcome::Shown { position: 1 }
        );
        assert_eq!(
            nav.prev_slide(&mut registry, &mut store),
            NavOutcome::Shown { position: 0 }
        );
        assert_eq!(nav.prev_slide(&mut registry, &mut store), NavOutcome::AtBoundary);
        assert_eq!(nav.active_position(&registry), Some(0));
    }

    #[test]
    fn test_boundary_noop_does_not_rewrite_fragment() {
        let (mut registry, _flags) = deck(&["a", "b"]);
        let mut store = TestFragment::default();
        let mut nav = NavigationController::new();
        nav.last_slide(&mut registry, &mut store);
        let writes = store.writes;

        nav.next_slide(&mut registry, &mut store);
        assert_eq!(store.writes, writes);
        assert_eq!(store.value.as_deref(), Some("1"));
    }

    #[test]
    fn test_first_and_last() {
        let (mut registry, _flags) = deck(&["a", "b", "c", "d"]);
        let mut store = TestFragment::default();
        let mut nav = NavigationController::new();

        assert_eq!(
            nav.last_slide(&mut registry, &mut store),
            NavOutcome::Shown { position: 3 }
        );
        assert_eq!(store.value.as_deref(), Some("3"));
        assert_eq!(
            nav.first_slide(&mut registry, &mut store),
            NavOutcome::Shown { position: 0 }
        );
        assert_eq!(store.value.as_deref(), Some("0"));
    }

    #[test]
    fn test_empty_deck_is_explicit() {
        let mut registry = SlideRegistry::new();
        let mut store = TestFragment::default();
        let mut nav = NavigationController::new();

        assert_eq!(nav.next_slide(&mut registry, &mut store), NavOutcome::DeckEmpty);
        assert_eq!(nav.prev_slide(&mut registry, &mut store), NavOutcome::DeckEmpty);
        assert_eq!(nav.first_slide(&mut registry, &mut store), NavOutcome::DeckEmpty);
        assert_eq!(nav.last_slide(&mut registry, &mut store), NavOutcome::DeckEmpty);
        assert_eq!(store.writes, 0);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_unset_pointer_reanchors_at_first() {
        let (mut registry, _flags) = deck(&["a", "b", "c"]);
        let mut store = TestFragment::default();
        let mut nav = NavigationController::new();

        assert_eq!(
            nav.next_slide(&mut registry, &mut store),
            NavOutcome::Shown { position: 0 }
        );

        let mut nav = NavigationController::new();
        let mut store = TestFragment::default();
        assert_eq!(
            nav.prev_slide(&mut registry, &mut store),
            NavOutcome::Shown { position: 0 }
        );
    }

    #[test]
    fn test_right_arrow_advances_and_updates_fragment() {
        use crate::app::deck::keys::{self, KeyCommand, KeyContext, NavKey};

        let (mut registry, _flags) = deck(&["a", "b", "c"]);
        let mut store = TestFragment::default();
        let mut nav = NavigationController::new();
        nav.first_slide(&mut registry, &mut store);

        let command = keys::dispatch(NavKey::Right, KeyContext::default());
        assert_eq!(command, Some(KeyCommand::Next));
        assert_eq!(
            nav.next_slide(&mut registry, &mut store),
            NavOutcome::Shown { position: 1 }
        );
        assert_eq!(store.value.as_deref(), Some("1"));
    }

    #[test]
    fn test_activate_initial_skips_fragment_write() {
        let (mut registry, flags) = deck(&["a", "b"]);
        let mut nav = NavigationController::new();

        let first = registry.id_at(0).cloned().unwrap();
        nav.activate_initial(&mut registry, &first);
        assert_eq!(nav.active(), Some(&SlideId::from("a")));
        assert!(flags[0].get());
        // No store involved at all; nothing to clobber a pending deep link.
    }
}

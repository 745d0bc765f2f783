use crate::app::error::DeckError;

use super::fragment::{FragmentStore, parse_fragment};
use super::navigation::NavigationController;
use super::registry::{SlideId, SlideRegistry};
use super::surface::PresentationSurface;

/// Registration hook. Called once per slide-marked section, strictly in
/// document order; registration order defines both navigation order and
/// default-activation order.
pub struct SlideRegistrar {
    /// Deep-link position captured from the store exactly once, at
    /// construction. The store is not re-read afterwards.
    pending: Option<usize>,
    generated: u64,
}

impl SlideRegistrar {
    pub fn new(store: &dyn FragmentStore) -> Self {
        let pending = store.read().as_deref().and_then(parse_fragment);
        Self {
            pending,
            generated: 0,
        }
    }

    /// Register one slide. Sections without an explicit identifier get a
    /// generated one, unique by construction. After the slide is added, the
    /// initial-activation heuristic runs: a pending-fragment match activates
    /// the new slide outright; otherwise the first slide registered becomes
    /// active by default.
    pub fn register(
        &mut self,
        registry: &mut SlideRegistry,
        controller: &mut NavigationController,
        store: &mut dyn FragmentStore,
        explicit_id: Option<&str>,
        surface: Box<dyn PresentationSurface>,
    ) -> std::result::Result<SlideId, DeckError> {
        let id = match explicit_id {
            Some(name) => SlideId::from(name),
            None => self.next_generated_id(),
        };
        let position = registry.add(id.clone(), surface)?;

        if self.pending == Some(position) {
            controller.show_slide(registry, store, &id);
        } else if controller.active().is_none() {
            // Position 0 by necessity: nothing was active before it.
            controller.activate_initial(registry, &id);
        }
        Ok(id)
    }

    fn next_generated_id(&mut self) -> SlideId {
        self.generated += 1;
        SlideId::from(format!("slide-{}", self.generated))
    }
}

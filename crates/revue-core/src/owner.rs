use crate::host::Host;
use crate::state::ViewState;

/// The owner contract: an element holding exactly one current [`ViewState`]
/// that knows how to apply it to its visual properties and can report its own
/// display attachment.
///
/// `render` receives the committed state, the previous one (absent only for
/// the construction-time render) and an animated hint derived from
/// [`Host::allows_animation`]. Interpreting the hint is entirely the render
/// implementation's business: animate the transition or snap.
///
/// The slot is committed before `render` fires, so a render body that reads
/// its own slot observes the new value.
///
/// A render implementation must not synchronously write the same slot again;
/// the inner dispatch would see an `old` inconsistent with what the outer one
/// already committed.
pub trait StateOwner {
    type State: ViewState;

    /// Current contents of the state slot.
    fn state(&self) -> &Self::State;

    /// Raw slot write. Returns the previous value and performs no dispatch;
    /// callers route changes through [`set_state`](Self::set_state) or
    /// [`update`](Self::update).
    fn replace_state(&mut self, next: Self::State) -> Self::State;

    /// Apply `state` to the element's visual properties.
    fn render(&mut self, state: &Self::State, old: Option<&Self::State>, animated: bool);

    /// Current display attachment.
    fn host(&self) -> Host;

    /// Write through the slot, dispatching `render` when the value changed.
    fn set_state(&mut self, next: Self::State) {
        let old = self.replace_state(next);
        let state = self.state().clone();
        self.render_if_needed(&state, Some(&old));
    }

    /// Equality-gated dispatch without touching the slot: skips when `state`
    /// equals `old`, otherwise derives the animated hint and renders. Public
    /// as the manual fallback for owners that keep their own storage hooks.
    fn render_if_needed(&mut self, state: &Self::State, old: Option<&Self::State>) {
        if old == Some(state) {
            log::trace!("render skipped: state unchanged");
            return;
        }
        let animated = self.host().allows_animation();
        self.render(state, old, animated);
    }

    /// Build an owner directly from an initial state. Renders exactly once
    /// with no previous state and `animated` false; nothing is on a surface
    /// while it is still being constructed.
    fn with_state(state: Self::State) -> Self
    where
        Self: Default + Sized,
    {
        let mut owner = Self::default();
        owner.replace_state(state);
        let state = owner.state().clone();
        owner.render(&state, None, false);
        owner
    }

    /// Builder-style update: mutate a clone of the current state and write the
    /// result back through [`set_state`](Self::set_state). The sanctioned way
    /// for callers to change state field by field.
    fn update(&mut self, build: impl FnOnce(&mut Self::State))
    where
        Self: Sized,
    {
        let mut next = self.state().clone();
        build(&mut next);
        self.set_state(next);
    }
}

/// A plain, equatable description of everything an element needs to present
/// itself. Conforming types are cheap to clone and compared structurally; a
/// render pass is driven entirely by one of these values.
pub trait ViewState: Clone + Default + PartialEq + 'static {
    /// The all-defaults instance.
    fn empty() -> Self {
        Self::default()
    }

    /// Copy-mutate-replace on the value itself. The builder always receives a
    /// fully materialized clone of the current value.
    ///
    /// This does not dispatch a render; owners route changes through
    /// [`StateOwner::update`](crate::owner::StateOwner::update) or
    /// [`Observed::update`](crate::observed::Observed::update).
    fn update(&mut self, build: impl FnOnce(&mut Self)) {
        let mut next = self.clone();
        build(&mut next);
        *self = next;
    }
}

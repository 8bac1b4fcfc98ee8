/// Marker for handler objects that receive user intents forwarded out of a
/// rendered element.
pub trait Actions: 'static {}

/// Elements that forward their user intents to a dedicated handler instead of
/// acting on them locally. State flows in through render, intents flow out
/// through the handler; the element itself stays a dumb projection of its
/// [`ViewState`](crate::state::ViewState).
pub trait HasActions {
    type Actions: Actions;

    fn actions(&self) -> &Self::Actions;
}

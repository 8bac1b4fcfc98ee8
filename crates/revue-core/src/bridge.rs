use crate::owner::StateOwner;
use crate::state::ViewState;

/// Lets a state value double as a declarative description of the element
/// presenting it, in the manner of declarative-framework host adapters:
/// constructing materializes the owner, updating re-assigns its state.
///
/// Both entry points delegate to the owner contract; there is no independent
/// dispatch logic here.
pub trait Representable: ViewState {
    type Owner: StateOwner<State = Self> + Default;

    /// Materialize the owner from this description. Fires the
    /// construction-time render: no previous state, not animated.
    fn make(&self) -> Self::Owner {
        Self::Owner::with_state(self.clone())
    }

    /// Re-assign the owner's state from this description, routing through the
    /// equality-gated dispatch.
    fn apply(&self, owner: &mut Self::Owner) {
        owner.set_state(self.clone());
    }
}

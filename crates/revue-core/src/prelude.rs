pub use crate::actions::{Actions, HasActions};
pub use crate::bridge::Representable;
pub use crate::geometry::Rect;
pub use crate::host::Host;
pub use crate::observed::{Observed, observed};
pub use crate::owner::StateOwner;
pub use crate::state::ViewState;

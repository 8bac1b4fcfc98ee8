//! # ViewState-driven rendering
//!
//! Revue keeps imperative view hierarchies on a unidirectional data flow
//! without putting a framework around them. An element declares a plain,
//! equatable state record; every write to its state slot is equality-gated
//! and, when the value actually changed, dispatches a `render` callback with
//! the new state, the previous one, and an animated hint:
//!
//! ```rust
//! use revue_core::prelude::*;
//!
//! #[derive(Clone, Default, PartialEq)]
//! struct GreetingState {
//!     text: String,
//! }
//! impl ViewState for GreetingState {}
//!
//! #[derive(Default)]
//! struct Greeting {
//!     state: GreetingState,
//!     shown: String,
//! }
//!
//! impl StateOwner for Greeting {
//!     type State = GreetingState;
//!
//!     fn state(&self) -> &GreetingState {
//!         &self.state
//!     }
//!     fn replace_state(&mut self, next: GreetingState) -> GreetingState {
//!         std::mem::replace(&mut self.state, next)
//!     }
//!     fn render(&mut self, state: &GreetingState, _old: Option<&GreetingState>, _animated: bool) {
//!         self.shown = state.text.clone();
//!     }
//!     fn host(&self) -> Host {
//!         Host::Detached
//!     }
//! }
//!
//! let mut greeting = Greeting::with_state(GreetingState { text: "hi".into() });
//! greeting.update(|s| s.text = "hello".into());
//! greeting.update(|s| s.text = "hello".into()); // unchanged, render skipped
//! assert_eq!(greeting.shown, "hello");
//! ```
//!
//! Because equal states never reach `render`, a render body can be written as
//! a plain, unconditional application of state to visual properties.
//!
//! ## Animated hint
//!
//! The dispatcher derives the `animated` flag from the owner's [`Host`]
//! report: views animate when attached with non-empty bounds, controllers
//! when their managed view is live. The flag is a hint; `render` decides
//! whether to animate the transition or snap.
//!
//! ## Observed slots
//!
//! [`Observed<S>`] carries the same gated dispatch as a cloneable handle for
//! closure-wired owners:
//!
//! ```rust
//! use revue_core::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[derive(Clone, Default, PartialEq)]
//! struct CounterState {
//!     count: i32,
//! }
//! impl ViewState for CounterState {}
//!
//! let slot = observed(CounterState::empty());
//! let shown = Rc::new(RefCell::new(String::new()));
//! slot.bind({
//!     let shown = shown.clone();
//!     move |state, _old, _animated| *shown.borrow_mut() = format!("count: {}", state.count)
//! });
//! slot.update(|s| s.count += 1);
//! assert_eq!(*shown.borrow(), "count: 1");
//! ```

pub mod actions;
pub mod bridge;
pub mod geometry;
pub mod host;
pub mod observed;
pub mod owner;
pub mod prelude;
pub mod state;

pub use actions::*;
pub use bridge::*;
pub use geometry::*;
pub use host::*;
pub use observed::*;
pub use owner::*;
pub use prelude::*;
pub use state::*;

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::Host;
use crate::state::ViewState;

type Renderer<S> = Box<dyn FnMut(&S, Option<&S>, bool)>;

/// A reactive state slot for owners wired with closures instead of the
/// [`StateOwner`](crate::owner::StateOwner) trait. Cloning the handle clones
/// a reference to the same slot.
///
/// Writes are equality-gated exactly like the trait path: the bound renderer
/// runs only when the value actually changed, with the animated hint taken
/// from the host probe. The same re-entrancy hazard applies: a renderer must
/// not write the slot it is bound to.
#[derive(Clone)]
pub struct Observed<S: ViewState>(Rc<RefCell<Inner<S>>>);

struct Inner<S> {
    value: S,
    renderer: Option<Renderer<S>>,
    probe: Box<dyn Fn() -> Host>,
}

impl<S: ViewState> Observed<S> {
    pub fn new(value: S) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            renderer: None,
            probe: Box::new(|| Host::Detached),
        })))
    }

    pub fn get(&self) -> S {
        self.0.borrow().value.clone()
    }

    /// Replace the host probe consulted for the animated hint. Until one is
    /// supplied the slot reports [`Host::Detached`] and never animates.
    pub fn probe_with(&self, probe: impl Fn() -> Host + 'static) {
        self.0.borrow_mut().probe = Box::new(probe);
    }

    /// Bind the render callback, replacing any previous one, and fire it once
    /// with the current value and no previous state to establish initial
    /// presentation.
    pub fn bind(&self, renderer: impl FnMut(&S, Option<&S>, bool) + 'static) {
        let mut renderer: Renderer<S> = Box::new(renderer);
        let state = self.get();
        renderer(&state, None, false);
        self.0.borrow_mut().renderer = Some(renderer);
    }

    /// Write the slot, dispatching the bound renderer when the value changed.
    pub fn set(&self, next: S) {
        let taken = {
            let mut inner = self.0.borrow_mut();
            if inner.value == next {
                log::trace!("observed write skipped: state unchanged");
                return;
            }
            let old = std::mem::replace(&mut inner.value, next);
            let state = inner.value.clone();
            inner.renderer.take().map(|renderer| (state, old, renderer))
        };
        // The borrow is released before user code runs so a renderer may read
        // the slot; it already holds the new value.
        if let Some((state, old, mut renderer)) = taken {
            let animated = (self.0.borrow().probe)().allows_animation();
            renderer(&state, Some(&old), animated);
            let mut inner = self.0.borrow_mut();
            if inner.renderer.is_none() {
                inner.renderer = Some(renderer);
            }
        }
    }

    /// Builder-style update over a clone of the current value, written back
    /// through [`set`](Self::set).
    pub fn update(&self, build: impl FnOnce(&mut S)) {
        let mut next = self.get();
        build(&mut next);
        self.set(next);
    }
}

pub fn observed<S: ViewState>(value: S) -> Observed<S> {
    Observed::new(value)
}

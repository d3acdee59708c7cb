//! Shared callback handle used by the scheduler and the animation engine.
//!
//! A [`Callback`] wraps an `Rc<dyn Fn(&mut World)>`. Cloning shares the same
//! closure, and two callbacks compare equal only when they share it, so a
//! clone can later be used to unschedule the original.
//!
//! Callbacks run after their queue has been rebuilt for the tick, with full
//! access to the [`World`], so they may schedule, unschedule or animate.

use std::fmt;
use std::rc::Rc;

use bevy_ecs::prelude::World;

#[derive(Clone)]
pub struct Callback(Rc<dyn Fn(&mut World)>);

impl Callback {
    pub fn new(f: impl Fn(&mut World) + 'static) -> Self {
        Callback(Rc::new(f))
    }

    pub fn call(&self, world: &mut World) {
        (self.0)(world);
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

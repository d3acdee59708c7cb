//! Animation queue.
//!
//! The [`Tweener`] owns every running [`Tween`]. Each frame
//! [`update_tweens`](crate::systems::tween::update_tweens) calls
//! [`Tweener::advance`], which steps all tasks, removes the ones that
//! finished and returns them so their completion callbacks can run once the
//! queue is consistent again.

use std::fmt;

use log::debug;

use crate::callback::Callback;
use crate::components::tween::Tween;

/// Handle to a queued tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

impl fmt::Display for TweenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tween that finished during [`Tweener::advance`].
#[derive(Debug)]
pub struct FinishedTween {
    pub id: TweenId,
    pub on_complete: Option<Callback>,
}

/// Queue of running tweens, in insertion order.
///
/// This is a non-send resource; use `NonSend<Tweener>` in system parameters.
// NonSend resource: insert with insert_non_send_resource and access via NonSend/NonSendMut
#[derive(Debug, Default)]
pub struct Tweener {
    tasks: Vec<(TweenId, Tween)>,
    next_id: u64,
}

impl Tweener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `tween` unless it has nothing to animate.
    pub fn animate(&mut self, tween: Tween) -> Option<TweenId> {
        if tween.is_done() {
            debug!("tween has no attributes to animate, not queued");
            return None;
        }
        Some(self.push(tween))
    }

    /// Queue `tween` as is.
    ///
    /// A tween that is already done is dropped on the next
    /// [`advance`](Self::advance) without running its callback.
    pub fn push(&mut self, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        debug!("queue tween {} for {}s", id, tween.duration());
        self.tasks.push((id, tween));
        id
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tasks.iter().find(|(i, _)| *i == id).map(|(_, t)| t)
    }

    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut Tween> {
        self.tasks.iter_mut().find(|(i, _)| *i == id).map(|(_, t)| t)
    }

    pub fn contains(&self, id: TweenId) -> bool {
        self.get(id).is_some()
    }

    /// Remove a tween without finishing it. Its callback never runs.
    pub fn cancel(&mut self, id: TweenId) -> Option<Tween> {
        let index = self.tasks.iter().position(|(i, _)| *i == id)?;
        Some(self.tasks.remove(index).1)
    }

    /// Step every running tween by `dt` and return those that finished, in
    /// queue order.
    pub fn advance(&mut self, dt: f64) -> Vec<FinishedTween> {
        let mut finished = Vec::new();
        let mut next = Vec::with_capacity(self.tasks.len());
        for (id, mut tween) in self.tasks.drain(..) {
            if tween.is_done() {
                continue;
            }
            tween.update(dt);
            if tween.is_done() {
                finished.push(FinishedTween {
                    id,
                    on_complete: tween.on_complete().cloned(),
                });
            } else {
                next.push((id, tween));
            }
        }
        self.tasks = next;
        finished
    }

    pub fn ids(&self) -> impl Iterator<Item = TweenId> + '_ {
        self.tasks.iter().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

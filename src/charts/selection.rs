//! Positional enter/update/exit reconciliation.
//!
//! Elements are matched to data by index only. Element `i` always shows
//! entry `i` of the latest data set, so reordering the data reassigns
//! elements rather than moving them.

use super::transition::{Interpolate, Transition};

/// Outcome of one reconcile pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileReport {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// One rendered primitive bound to a data position.
#[derive(Debug, Clone)]
pub struct VisualElement<G> {
    transition: Transition<G>,
    active: bool,
}

impl<G: Interpolate> VisualElement<G> {
    pub fn geometry_at(&self, now: f64) -> G {
        self.transition.value_at(now)
    }

    pub fn target(&self) -> &G {
        self.transition.target()
    }

    /// Hover state.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Owned, index-addressed collection of the elements a chart has drawn.
#[derive(Debug, Clone)]
pub struct ElementSet<G> {
    elements: Vec<VisualElement<G>>,
    hoverable: bool,
}

impl<G: Interpolate> ElementSet<G> {
    pub fn new(hoverable: bool) -> Self {
        Self {
            elements: Vec::new(),
            hoverable,
        }
    }

    /// Align the set with `targets`:
    /// - positions past the current length enter, starting from `enter(target)`
    /// - positions present in both retarget over `duration`
    /// - positions past the new length are removed at once
    pub fn reconcile<F>(
        &mut self,
        targets: Vec<G>,
        now: f64,
        duration: f64,
        enter: F,
    ) -> ReconcileReport
    where
        F: Fn(&G) -> G,
    {
        let previous = self.elements.len();
        let next = targets.len();

        let exited = previous.saturating_sub(next);
        self.elements.truncate(next);

        let mut entered = 0;
        for (i, target) in targets.into_iter().enumerate() {
            match self.elements.get_mut(i) {
                Some(element) => element.transition.retarget(target, now, duration),
                None => {
                    let start = enter(&target);
                    self.elements.push(VisualElement {
                        transition: Transition::new(start, target, now, duration),
                        active: false,
                    });
                    entered += 1;
                }
            }
        }

        ReconcileReport {
            entered,
            updated: previous.min(next),
            exited,
        }
    }

    /// Mark `hovered` active and everything else inactive. Returns whether
    /// anything changed.
    pub fn set_hover(&mut self, hovered: Option<usize>) -> bool {
        if !self.hoverable {
            return false;
        }
        let mut changed = false;
        for (i, element) in self.elements.iter_mut().enumerate() {
            let active = hovered == Some(i);
            changed |= element.active != active;
            element.active = active;
        }
        changed
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.elements.iter().any(|e| e.transition.is_running(now))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VisualElement<G>> {
        self.elements.iter()
    }

    /// Geometry of every element at `now`.
    #[cfg(test)]
    pub fn geometry_at(&self, now: f64) -> Vec<G> {
        self.elements.iter().map(|e| e.geometry_at(now)).collect()
    }

    /// Geometry every element is heading for.
    pub fn targets(&self) -> Vec<G> {
        self.elements.iter().map(|e| e.target().clone()).collect()
    }
}

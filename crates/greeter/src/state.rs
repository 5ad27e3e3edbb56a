// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Component state
//!
//! State is owned by the component instance and only ever changes inside its
//! event handlers. Handlers report back to the runtime whether the change is
//! visible through the [`ShouldRender`] trait.

/// Describes whether or not a component should be rendered after state changes.
pub trait ShouldRender: 'static {
    fn should_render(self) -> bool;

    fn then(self) -> Then;
}

/// Handlers without return type always update their view.
impl ShouldRender for () {
    fn should_render(self) -> bool {
        true
    }

    fn then(self) -> Then {
        Then::Render
    }
}

/// An enum that implements the [`ShouldRender`] trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Then {
    /// This is a silent update
    Stop,
    /// Render the view after this update
    Render,
}

impl ShouldRender for Then {
    fn should_render(self) -> bool {
        match self {
            Then::Stop => false,
            Then::Render => true,
        }
    }

    fn then(self) -> Then {
        self
    }
}

/// A non-negative counter that can only go up, one step at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter(u64);

impl Counter {
    pub const fn new() -> Self {
        Counter(0)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Add one to the counter. Returns `false` and leaves the counter
    /// untouched if it is already at `u64::MAX`.
    pub fn increment(&mut self) -> bool {
        match self.0.checked_add(1) {
            Some(n) => {
                self.0 = n;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Counter::new().get(), 0);
        assert_eq!(Counter::default(), Counter::new());
    }

    #[test]
    fn increments_by_one() {
        let mut counter = Counter::new();

        for n in 1..=100 {
            assert!(counter.increment());
            assert_eq!(counter.get(), n);
        }
    }

    #[test]
    fn stops_at_max() {
        let mut counter = Counter(u64::MAX - 1);

        assert!(counter.increment());
        assert!(!counter.increment());
        assert_eq!(counter.get(), u64::MAX);
    }

    #[test]
    fn should_render() {
        assert!(().should_render());
        assert!(Then::Render.should_render());
        assert!(!Then::Stop.should_render());
        assert_eq!(().then(), Then::Render);
    }
}

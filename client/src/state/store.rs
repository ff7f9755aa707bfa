//! Handle bundling the state slices that unit actions read and write.
//!
//! DESIGN
//! ======
//! Each slice is still provided as its own `RwSignal` context so components
//! that only need one of them keep depending on exactly that. `Store` is a
//! `Copy` view over both for code that moves between them.

use leptos::prelude::*;

use super::units::UnitsState;
use super::unsaved_warning::UnsavedWarningState;

#[derive(Clone, Copy)]
pub struct Store {
    pub units: RwSignal<UnitsState>,
    pub unsaved: RwSignal<UnsavedWarningState>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self {
            units: RwSignal::new(UnitsState::default()),
            unsaved: RwSignal::new(UnsavedWarningState::default()),
        }
    }

    /// Register both slices as context for descendants.
    pub fn provide(self) {
        provide_context(self.units);
        provide_context(self.unsaved);
    }

    /// Rebuild the handle from context. Panics outside `App`, like `expect_context`.
    #[must_use]
    pub fn expect() -> Self {
        Self {
            units: expect_context::<RwSignal<UnitsState>>(),
            unsaved: expect_context::<RwSignal<UnsavedWarningState>>(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

//! Unsaved-changes notifier shared by every editable view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Editable rows register a revert and a save callback the moment they gain
//! unsaved edits. Navigation and log-out go through `request_navigation`,
//! and the `UnsavedWarning` modal runs the registered callbacks when a
//! blocked action is confirmed.

#[cfg(test)]
#[path = "unsaved_warning_test.rs"]
mod unsaved_warning_test;

use std::fmt;
use std::sync::Arc;

/// Work to run once a revert or save settles.
pub type Continuation = Box<dyn FnOnce()>;

/// Discards unsaved edits, then runs the continuation.
pub type RemoveFunction = Arc<dyn Fn(Continuation) + Send + Sync>;

/// Persists unsaved edits, then runs the success or the failure continuation.
pub type SubmitFunction = Arc<dyn Fn(Continuation, Continuation) + Send + Sync>;

/// Action held back because unsaved changes exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingNavigation {
    Route(String),
    LogOut,
}

#[derive(Clone, Default)]
pub struct UnsavedWarningState {
    pub has_unsaved_changes: bool,
    pub remove_function: Option<RemoveFunction>,
    pub submit_function: Option<SubmitFunction>,
    pub pending: Option<PendingNavigation>,
}

impl fmt::Debug for UnsavedWarningState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnsavedWarningState")
            .field("has_unsaved_changes", &self.has_unsaved_changes)
            .field("remove_function", &self.remove_function.is_some())
            .field("submit_function", &self.submit_function.is_some())
            .field("pending", &self.pending)
            .finish()
    }
}

impl UnsavedWarningState {
    /// Register the callbacks for the current set of unsaved edits.
    pub fn update_unsaved_changes(&mut self, remove: RemoveFunction, submit: SubmitFunction) {
        self.has_unsaved_changes = true;
        self.remove_function = Some(remove);
        self.submit_function = Some(submit);
    }

    pub fn remove_unsaved_changes(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` when `target` may proceed now. Otherwise the target is
    /// parked until the user leaves, saves, or cancels.
    pub fn request_navigation(&mut self, target: PendingNavigation) -> bool {
        if !self.has_unsaved_changes {
            return true;
        }
        self.pending = Some(target);
        false
    }

    pub fn cancel_navigation(&mut self) {
        self.pending = None;
    }
}

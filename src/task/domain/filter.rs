//! Typed filter for task list queries.

use super::{Task, TaskPriority, TaskStatus};

/// Optional constraints narrowing a task list operation.
///
/// Present constraints compose with logical AND: the search term must match
/// the title or the description, and status/priority must match exactly.
/// Search matching is case-insensitive by policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    search: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
}

impl TaskFilter {
    /// Creates an unconstrained filter that matches every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrains to records whose title or description contains the term.
    ///
    /// A term that is empty after trimming is treated as no constraint.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        let trimmed = term.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Constrains to records with exactly this status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Constrains to records with exactly this priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the search term, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the status constraint, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the priority constraint, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns `true` when no constraint is set.
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.search.is_none() && self.status.is_none() && self.priority.is_none()
    }

    /// Evaluates the filter predicate against a record.
    ///
    /// This is the reference semantics; the SQL adapter mirrors it with
    /// `ILIKE` and equality clauses.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let search_matches = self.search.as_ref().is_none_or(|term| {
            let needle = term.to_lowercase();
            task.title().as_str().to_lowercase().contains(&needle)
                || task
                    .description()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
        });
        let status_matches = self.status.is_none_or(|status| task.status() == status);
        let priority_matches = self
            .priority
            .is_none_or(|priority| task.priority() == priority);

        search_matches && status_matches && priority_matches
    }
}

//! Client-side meal planner state.
//!
//! A [`PlannerSession`] owns the form: the search query and its results, the
//! selected candidate, the quantity multiplier, the [`MealDraft`] built from
//! them, and a read-only copy of the logged meals. Transitions run
//! `Idle → Searching → ResultsShown → CandidateSelected → Submitting → Idle`.
//! Network calls go through the [`FoodLookup`](crate::foods::FoodLookup) and
//! [`MealStore`](crate::meals::MealStore) seams passed in by the caller.

pub mod draft;
pub mod session;

pub use draft::{apply_to_draft, quantity_prefix, MealDraft};
pub use session::{Phase, PlannerError, PlannerSession, SearchTicket};

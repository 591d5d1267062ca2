use thiserror::Error;
use tracing::{debug, warn};

use crate::foods::{FoodCandidate, FoodLookup};
use crate::meals::{aggregate, DailyTotals, MealEntry, MealStore, NewMeal};
use crate::planner::draft::{apply_to_draft, MealDraft};

/// Queries shorter than this are never dispatched.
pub const MIN_QUERY_LEN: usize = 2;
/// Smallest quantity the form accepts.
pub const MIN_QUANTITY: f64 = 0.1;

pub const SEARCH_FAILED: &str = "Search failed. Please try again.";
pub const SAVE_FAILED: &str = "Failed to save meal. Please try again.";
pub const LOAD_FAILED: &str = "Failed to load meals.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Searching,
    ResultsShown,
    CandidateSelected,
    Submitting,
}

/// Handle for one dispatched search. Only the newest ticket is honoured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("a meal is being saved")]
    Busy,
    #[error("quantity must be at least 0.1, got {0}")]
    InvalidQuantity(f64),
    #[error("meal name is required")]
    MissingName,
    #[error("no food selected")]
    NoCandidate,
    #[error("no search result at index {0}")]
    NoSuchResult(usize),
    #[error("{0}")]
    Persistence(String),
}

/// Form state of the meal planner: search, selection, quantity, draft and the
/// cached meal list.
#[derive(Debug)]
pub struct PlannerSession {
    phase: Phase,
    query: String,
    results: Vec<FoodCandidate>,
    search_error: Option<String>,
    last_search: u64,
    quantity: f64,
    draft: MealDraft,
    meals: Vec<MealEntry>,
    banner: Option<String>,
}

impl Default for PlannerSession {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            query: String::new(),
            results: Vec::new(),
            search_error: None,
            last_search: 0,
            quantity: 1.0,
            draft: MealDraft::default(),
            meals: Vec::new(),
            banner: None,
        }
    }
}

impl PlannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[FoodCandidate] {
        &self.results
    }

    pub fn search_error(&self) -> Option<&str> {
        self.search_error.as_deref()
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn draft(&self) -> &MealDraft {
        &self.draft
    }

    /// Manual edits to the name or macro fields.
    pub fn draft_mut(&mut self) -> &mut MealDraft {
        &mut self.draft
    }

    pub fn meals(&self) -> &[MealEntry] {
        &self.meals
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn totals(&self) -> DailyTotals {
        aggregate(&self.meals)
    }

    fn settled_phase(&self) -> Phase {
        if self.draft.source().is_some() {
            Phase::CandidateSelected
        } else {
            Phase::Idle
        }
    }

    fn ensure_not_submitting(&self) -> Result<(), PlannerError> {
        if self.phase == Phase::Submitting {
            return Err(PlannerError::Busy);
        }
        Ok(())
    }

    // --- search ---

    /// Records the query and returns a ticket when it should be dispatched.
    ///
    /// Every call invalidates earlier tickets, including calls that dispatch
    /// nothing.
    pub fn set_query(&mut self, query: &str) -> Result<Option<SearchTicket>, PlannerError> {
        self.ensure_not_submitting()?;
        self.query = query.to_string();
        self.last_search += 1;
        self.search_error = None;

        if query.trim().chars().count() < MIN_QUERY_LEN {
            self.results.clear();
            self.phase = self.settled_phase();
            return Ok(None);
        }

        self.phase = Phase::Searching;
        debug!(seq = self.last_search, %query, "search dispatched");
        Ok(Some(SearchTicket {
            seq: self.last_search,
            query: self.query.clone(),
        }))
    }

    /// Applies a search outcome. Returns `false` when the ticket is stale and
    /// the outcome was discarded.
    pub fn search_completed(
        &mut self,
        ticket: &SearchTicket,
        outcome: anyhow::Result<Vec<FoodCandidate>>,
    ) -> bool {
        if ticket.seq != self.last_search || self.phase != Phase::Searching {
            debug!(seq = ticket.seq, latest = self.last_search, "stale search response dropped");
            return false;
        }

        match outcome {
            Ok(results) => {
                self.results = results;
                self.phase = Phase::ResultsShown;
            }
            Err(e) => {
                warn!(error = ?e, query = %ticket.query, "search failed");
                self.results.clear();
                self.search_error = Some(SEARCH_FAILED.into());
                self.phase = self.settled_phase();
            }
        }
        true
    }

    pub async fn search(
        &mut self,
        lookup: &dyn FoodLookup,
        query: &str,
    ) -> Result<bool, PlannerError> {
        let Some(ticket) = self.set_query(query)? else {
            return Ok(false);
        };
        let outcome = lookup.search(&ticket.query).await;
        Ok(self.search_completed(&ticket, outcome))
    }

    // --- selection and quantity ---

    /// Starts a fresh draft from `candidate` at quantity 1 and clears the search.
    pub fn select(&mut self, candidate: FoodCandidate) -> Result<(), PlannerError> {
        self.ensure_not_submitting()?;
        self.draft = apply_to_draft(&candidate, 1.0);
        self.quantity = 1.0;
        self.query.clear();
        self.results.clear();
        self.search_error = None;
        self.last_search += 1;
        self.phase = Phase::CandidateSelected;
        Ok(())
    }

    pub fn select_result(&mut self, index: usize) -> Result<(), PlannerError> {
        let candidate = self
            .results
            .get(index)
            .cloned()
            .ok_or(PlannerError::NoSuchResult(index))?;
        self.select(candidate)
    }

    /// Only drafts built from a candidate can be scaled.
    pub fn set_quantity(&mut self, quantity: f64) -> Result<(), PlannerError> {
        self.ensure_not_submitting()?;
        if self.draft.source().is_none() {
            return Err(PlannerError::NoCandidate);
        }
        if !quantity.is_finite() || quantity < MIN_QUANTITY {
            return Err(PlannerError::InvalidQuantity(quantity));
        }
        self.quantity = quantity;
        self.draft.rescale(quantity);
        Ok(())
    }

    // --- submission ---

    pub fn begin_submit(&mut self) -> Result<NewMeal, PlannerError> {
        self.ensure_not_submitting()?;
        if self.draft.name.trim().is_empty() {
            return Err(PlannerError::MissingName);
        }
        self.banner = None;
        self.query.clear();
        self.results.clear();
        self.search_error = None;
        self.last_search += 1;
        self.phase = Phase::Submitting;
        Ok(self.draft.to_new_meal(self.quantity))
    }

    /// On success the draft is discarded; on failure it is kept for resubmission.
    pub fn submit_completed(
        &mut self,
        outcome: anyhow::Result<MealEntry>,
    ) -> Result<MealEntry, PlannerError> {
        match outcome {
            Ok(entry) => {
                self.draft = MealDraft::default();
                self.quantity = 1.0;
                self.phase = Phase::Idle;
                Ok(entry)
            }
            Err(e) => {
                warn!(error = ?e, "save meal failed");
                self.banner = Some(SAVE_FAILED.into());
                self.phase = self.settled_phase();
                Err(PlannerError::Persistence(SAVE_FAILED.into()))
            }
        }
    }

    /// Appends the draft, then re-fetches the list. A failed re-fetch only
    /// sets the banner; the meal is already stored.
    pub async fn submit(&mut self, store: &dyn MealStore) -> Result<MealEntry, PlannerError> {
        let meal = self.begin_submit()?;
        let outcome = store.append(meal).await;
        let entry = self.submit_completed(outcome)?;
        if self.refresh(store).await.is_err() {
            debug!(meal_id = %entry.id, "meal saved but list refresh failed");
        }
        Ok(entry)
    }

    // --- meal list ---

    pub fn meals_loaded(&mut self, meals: Vec<MealEntry>) {
        self.meals = meals;
    }

    pub async fn refresh(&mut self, store: &dyn MealStore) -> Result<(), PlannerError> {
        match store.list_all().await {
            Ok(meals) => {
                self.meals_loaded(meals);
                Ok(())
            }
            Err(e) => {
                warn!(error = ?e, "load meals failed");
                self.banner = Some(LOAD_FAILED.into());
                Err(PlannerError::Persistence(LOAD_FAILED.into()))
            }
        }
    }
}

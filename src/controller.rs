//! Reaction to a user query: fetch, branch, render.
//!
//! The [`SearchController`] owns the [`Debouncer`] and the
//! [`ResultRenderer`] and talks to the network and the notification surface
//! through the [`CountrySource`] and [`NotificationSink`] traits, so every
//! branch is testable with fakes.
//!
//! Outcome of one query:
//! 1. trimmed-empty input clears both views, no request;
//! 2. a failed fetch clears both views and shows one failure notification;
//! 3. zero records clear both views;
//! 4. exactly one record renders the detail card;
//! 5. several records render the list, unless more than
//!    [`TOO_MANY_MATCHES`] came back, in which case a warning replaces the
//!    list.
//!
//! Requests are issued synchronously from the calling thread, so responses
//! can never arrive out of order; the debouncer's last-write-wins is the
//! only query arbitration needed.

use crate::debounce::Debouncer;
use crate::error::FetchError;
use crate::models::{Country, Query};
use crate::render::ResultRenderer;
use std::time::Instant;

/// Above this many matches the list is not rendered; a warning is shown
/// instead.
pub const TOO_MANY_MATCHES: usize = 10;

pub const TOO_MANY_MATCHES_MESSAGE: &str =
    "Too many matches found. Please enter a more specific name.";
pub const FETCH_FAILED_MESSAGE: &str = "Oops, there was an error. Please try again.";

/// Supplies country records for a name prefix. Implemented by
/// [`crate::api::Client`]; tests swap in a fake.
pub trait CountrySource {
    fn fetch_countries(&self, name_prefix: &str) -> Result<Vec<Country>, FetchError>;
}

impl CountrySource for crate::api::Client {
    fn fetch_countries(&self, name_prefix: &str) -> Result<Vec<Country>, FetchError> {
        crate::api::Client::fetch_countries(self, name_prefix)
    }
}

/// Fire-and-forget transient notifications.
pub trait NotificationSink {
    fn warn(&mut self, message: &str);
    fn fail(&mut self, message: &str);
}

/// Routes notifications to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn warn(&mut self, message: &str) {
        log::warn!("{message}");
    }

    fn fail(&mut self, message: &str) {
        log::error!("{message}");
    }
}

pub struct SearchController<S, N> {
    source: S,
    notifier: N,
    renderer: ResultRenderer,
    debouncer: Debouncer,
}

impl<S: CountrySource, N: NotificationSink> SearchController<S, N> {
    pub fn new(source: S, notifier: N, debouncer: Debouncer) -> Self {
        Self {
            source,
            notifier,
            renderer: ResultRenderer::new(),
            debouncer,
        }
    }

    /// Record a keystroke-level input event. Nothing runs until the burst
    /// settles; see [`SearchController::tick`].
    pub fn input(&mut self, raw: &str, now: Instant) {
        self.debouncer.trigger(Query::new(raw), now);
    }

    /// Run the pending query if its quiet period has elapsed. Returns true
    /// if a query ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(query) => {
                self.run_query(&query);
                true
            }
            None => false,
        }
    }

    /// React to a settled query, bypassing the debouncer.
    pub fn on_query_changed(&mut self, raw: &str) {
        self.run_query(&Query::new(raw));
    }

    fn run_query(&mut self, query: &Query) {
        if query.is_empty() {
            self.renderer.clear_all();
            return;
        }

        match self.source.fetch_countries(query.as_str()) {
            Err(e) => {
                self.renderer.clear_all();
                self.notifier.fail(FETCH_FAILED_MESSAGE);
                log::error!("fetch for {query:?} failed: {e}");
            }
            Ok(records) if records.is_empty() => self.renderer.clear_all(),
            Ok(records) if records.len() == 1 => {
                self.renderer.clear_list();
                self.renderer.render_detail(&records[0]);
            }
            Ok(records) => {
                self.renderer.clear_detail();
                if records.len() > TOO_MANY_MATCHES {
                    self.renderer.clear_list();
                    self.notifier.warn(TOO_MANY_MATCHES_MESSAGE);
                } else {
                    self.renderer.render_list(records);
                }
            }
        }
    }

    /// Selection of list entry `index`; renders its detail card without a
    /// new fetch. Returns false for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        self.renderer.select(index)
    }

    pub fn renderer(&self) -> &ResultRenderer {
        &self.renderer
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}

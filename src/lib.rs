//! country_lookup
//!
//! A lightweight Rust library for searching countries by name fragment via
//! the REST Countries API and rendering the result as an HTML list or detail
//! card. Pairs with the `country-lookup` CLI.
//!
//! ### Features
//! - Fetch countries by name prefix (name, capital, population, flag,
//!   languages)
//! - Debounce bursts of input so only the last query of a burst runs
//! - Branching render logic: no match, single detail card, or a selectable
//!   match list with a too-many-matches guard
//!
//! ### Example
//! ```no_run
//! use country_lookup::{Debouncer, LogNotifier, SearchController};
//!
//! let client = country_lookup::Client::default();
//! let mut controller = SearchController::new(client, LogNotifier, Debouncer::default());
//! controller.on_query_changed("fra");
//! println!("{}", controller.renderer().detail_view().html());
//! ```

pub mod api;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod models;
pub mod render;

pub use api::Client;
pub use controller::{CountrySource, LogNotifier, NotificationSink, SearchController};
pub use debounce::{Debouncer, DEBOUNCE_DELAY};
pub use error::FetchError;
pub use models::{Country, Query};
pub use render::{ResultRenderer, View};

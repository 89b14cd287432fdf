//! Annotation engine.
//!
//! ## How the parts work together
//!
//! ```text
//! rules (all) + Profile ──┐
//!                         │  Catalog::compile           (catalog.rs)
//!                         │   - category priorities, tie-breaks
//!                         │   - conflict pairs by rule id
//!                         └──────────────┬─────────────
//!                                        │
//! input ── chars ── for every position ──┤
//!                    Window::new         │ (window.rs)
//!                    (context snapshot)  v
//!                               Scanner::evaluate        (scanner.rs)
//!                                 - base phoneme/attributes
//!                                 - collect matching rules
//!                                        │
//!                                        v
//!                               resolve                  (resolve.rs)
//!                                 - priority order
//!                                 - one winner per category
//!                                 - named conflicts
//!                                        │
//!                                        v
//!                               ordered assembly -> ProcessingResult
//! ```
//!
//! Every predicate reads only the raw input, never output emitted for other
//! positions, so positions are evaluated independently (optionally on the
//! rayon pool) and only the final assembly is ordered.
//!
//! ## Responsibilities by module
//!
//! - `catalog.rs`: validates a rule list against a tradition profile and
//!   indexes priorities and conflicts by rule id.
//! - `window.rs`: per-position context snapshots handed to predicates.
//! - `resolve.rs`: picks the winning subset of the rules that matched at a
//!   position.
//! - `scanner.rs`: the left-to-right pass that builds the parallel phoneme,
//!   attribute and duration sequences.
//! - `metrics.rs`: opt-in timing and counters for a run.
//!
//! ## Debugging
//!
//! Catalog compilation logs at `debug`; per-position suppression decisions
//! log at `trace`.

#[path = "engine/catalog.rs"]
mod catalog;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/scanner.rs"]
mod scanner;
#[path = "engine/window.rs"]
mod window;

pub(crate) use catalog::Catalog;
pub use metrics::RunMetrics;
pub(crate) use scanner::Scanner;
pub use window::LetterContext;
pub(crate) use window::Window;

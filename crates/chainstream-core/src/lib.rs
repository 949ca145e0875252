//! chainstream-core — stream history model and reconciliation.
//!
//! # Architecture
//!
//! ```text
//! EventFeed (memory / JSON file)
//!     └── collect_history   → Vec<StreamEvent>
//!            └── Reconciler → DisplayRecord (+ previous for modifications)
//!                   └── rows::render → Vec<HistoryRow>
//! ```
//!
//! Everything downstream of the feed is pure and synchronous.

pub mod address;
pub mod amount;
pub mod error;
pub mod feed;
pub mod reconcile;
pub mod rows;
pub mod types;

pub use address::{shorten, AddressLabel};
pub use amount::{format_units, truncate_display, Period};
pub use error::FeedError;
pub use feed::{collect_history, EventFeed, JsonFileFeed, MemoryFeed, PageRequest};
pub use reconcile::{Direction, DisplayRecord, Reconciler};
pub use rows::{HistoryRow, RowTag, Separator};
pub use types::{EventKind, RawHistoryEvent, StreamEvent, StreamSnapshot};

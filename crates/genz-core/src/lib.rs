pub mod card;
pub mod collation;
pub mod highlight;
pub mod preprocess;
pub mod query;
pub mod store;

pub use card::{build_card, clipboard_text, share_message};
pub use collation::{CodePointCollation, Collation};
pub use highlight::{Highlighter, highlight};
pub use query::QueryEngine;
pub use store::TermStore;

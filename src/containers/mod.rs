//! The immutable sequence container and its operations
//!
//! - **`Sparray<T>`** - core type: construction, access, iteration, export
//! - transformation, folds and membership (`transform`)
//! - sorting, sort keys and extrema (`ordering`)
//! - `index_by` / `group_by` results (`grouping`)
//! - sliding windows, zip, cross product and sampling (`partition`)
//!
//! Every operation returns a new container; none mutates its receiver.

mod grouping;
mod ordering;
mod partition;
mod sparray;
mod transform;

pub use grouping::{Group, GroupedBy, IndexedBy, KeyValue, KeyedMap};
pub use ordering::SortKey;
pub use sparray::{Kind, Sparray};
pub use transform::Enumerated;

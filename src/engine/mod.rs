pub mod disk;
pub mod freehand;
pub mod selector;

pub use disk::{Disk, Session};
pub use freehand::Freehand;
pub use selector::{Candidate, RunSummary, Selector, SelectorState};

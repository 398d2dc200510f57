// Value vs Reference Semantics Lessons
// Records, receivers and aliasing collections, each demonstrated by a
// small binary under src/bin/.

pub mod config;
pub mod error;
pub mod kinds;
pub mod lessons;
pub mod narrate;
pub mod person;
pub mod receivers;
pub mod slices;

pub use config::OutputConfig;
pub use error::{LessonError, Result};
pub use narrate::Narrator;
pub use person::{ContactInfo, Person};
pub use slices::{SharedSlice, SliceHeader};

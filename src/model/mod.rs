//! Model types for manuscript content representation.
//!
//! These types bridge the parsing stages and the RTF emitter. A parsed
//! manuscript is metadata plus a flat list of reflowed paragraphs;
//! structural classification of a paragraph happens at render time.

mod block;
mod manuscript;
mod metadata;

pub use block::{Block, BlockClassifier};
pub use manuscript::Manuscript;
pub use metadata::Metadata;

//! Rendering module mapping manuscript structure to RTF control sequences.

mod rtf;

pub use rtf::{to_rtf, RtfRenderer};

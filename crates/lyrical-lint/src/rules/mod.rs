//! Built-in lint rules.

pub mod long_paragraph;
pub mod sticky_paragraph;
pub mod syllable_density;

pub use long_paragraph::LongParagraphRule;
pub use sticky_paragraph::StickyParagraphRule;
pub use syllable_density::SyllableDensityRule;

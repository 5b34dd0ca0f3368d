//! Reusable UI widgets for NPK Explorer

mod callout;
mod section_heading;

pub use callout::CalloutCard;
pub use section_heading::SectionHeading;

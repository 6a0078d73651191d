mod project;
mod report;
mod time_entry;
mod workspace;

pub use project::*;
pub use report::*;
pub use time_entry::*;
pub use workspace::*;

mod duration;
mod ids;
mod project;
mod summary;
mod timer;
mod workspace;

pub use duration::*;
pub use ids::*;
pub use project::*;
pub use summary::*;
pub use timer::*;
pub use workspace::*;

mod page;
mod requests;
mod responses;

pub use page::*;
pub use requests::*;
pub use responses::*;

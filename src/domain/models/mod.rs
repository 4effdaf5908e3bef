mod envelope;
mod error;
mod event;
mod gateway;
mod page;
mod profile;
mod session;
mod status;

pub use envelope::*;
pub use error::*;
pub use event::*;
pub use gateway::*;
pub use page::*;
pub use profile::*;
pub use session::*;
pub use status::*;

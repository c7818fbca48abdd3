pub mod confirm;
pub mod resolve;

pub use confirm::ConfirmCommand;
pub use resolve::{OutputFormat, ResolveCommand};

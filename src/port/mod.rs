mod cache;
mod directory;
mod ledger;
mod notify;
mod staging;
mod store;

pub use cache::*;
pub use directory::*;
pub use ledger::*;
pub use notify::*;
pub use staging::*;
pub use store::*;

pub mod collection;
pub mod context;
pub mod record;

pub use collection::*;
pub use context::*;
pub use record::*;

pub mod error;
pub mod git;
pub mod path;
pub mod playbook;

pub use error::{Error, Result};
pub use git::{GitCli, RepoContextResolver, resolve_git_context};
pub use path::{expand_tilde, resolve_data_path};

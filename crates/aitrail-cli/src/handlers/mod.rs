pub mod playbooks;
pub mod summary;

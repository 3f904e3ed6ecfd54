pub mod entities;
pub mod handlers;
pub mod resume_store;
pub mod sessions;

pub use resume_store::ResumeStore;
pub use sessions::{SessionRegistry, SharedStore};

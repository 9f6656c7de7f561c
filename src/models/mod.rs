mod contact;
mod motion;
mod project;

pub use contact::ContactLink;
pub use motion::*;
pub use project::{Picture, ProjectEntry};

mod contact;
mod cursor;
mod nav;
mod parallax;
mod project_card;
mod reveal;
mod sections;

pub use contact::ContactAnchor;
pub use cursor::{cursor_stylesheet, PointerFollower};
pub use nav::{Nav, NavStyle};
pub use parallax::{Parallax, ScrollTransform};
pub use project_card::{ProjectCard, WorkTile};
pub use reveal::Reveal;
pub use sections::{CallToAction, DetailsQuote, Looping, Statement};

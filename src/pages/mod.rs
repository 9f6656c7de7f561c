mod home;
mod kinetic;
mod portfolio;
mod studio;

pub use home::HomePage;
pub use kinetic::KineticPage;
pub use portfolio::PortfolioPage;
pub use studio::StudioPage;

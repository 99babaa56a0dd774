//! UI Components

mod about;
mod app;
mod contact;
mod database_interaction;
mod home;
mod network_topology;
mod not_found;
mod projects;
mod settings;

pub use about::About;
pub use app::{App, Layout, Page};
pub use contact::Contact;
pub use database_interaction::DatabaseInteraction;
pub use home::Home;
pub use network_topology::NetworkTopology;
pub use not_found::NotFound;
pub use projects::Projects;
pub use settings::Settings;

// Documentation pages, one module per sidebar entry

mod clients;
mod commands;
mod configuration;
mod contributing;
mod getting_started;
mod home;
mod installation;
mod not_found;
mod requirements;
mod validator;

pub use clients::ClientsPage;
pub use commands::CommandsPage;
pub use configuration::ConfigurationPage;
pub use contributing::ContributingPage;
pub use getting_started::GettingStartedPage;
pub use home::HomePage;
pub use installation::InstallationPage;
pub use not_found::NotFoundPage;
pub use requirements::RequirementsPage;
pub use validator::ValidatorPage;

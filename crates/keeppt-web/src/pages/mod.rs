//! Page components rendered in the shell's content slot

mod archives;
mod keep;
mod links;
mod not_found;
mod settings;

pub use archives::Archives;
pub use keep::Keep;
pub use links::Links;
pub use not_found::NotFound;
pub use settings::Settings;

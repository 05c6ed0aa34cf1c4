pub mod drivers;
pub mod prompts;
pub mod session;

pub use session::Session;

//! TUI screen components
//!
//! Contains individual screen implementations for each route.

pub mod card;
pub mod home;
pub mod login;
pub mod register;

pub use home::HomeScreen;
pub use login::{LoginField, LoginOutcome, LoginScreen};
pub use register::RegisterScreen;

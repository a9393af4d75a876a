pub mod contact;
pub mod form;
mod macros;
pub mod profile;
pub mod theme;

pub mod filters;
pub mod profile;
pub mod selector;


pub use profile::*;
pub use selector::*;

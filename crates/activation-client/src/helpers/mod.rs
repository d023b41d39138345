//! Pure helpers used by presentation code: text/size formatting and the
//! "is this my own profile" check.

pub mod format;
pub mod identity;

pub use format::*;
pub use identity::*;

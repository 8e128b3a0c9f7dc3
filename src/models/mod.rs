//! Data models for the Yasmina website backend.
//!
//! Field names follow the table columns, which the site's TypeScript types use verbatim.

mod contact;
mod gallery;
mod reservation;
mod room;

pub use contact::*;
pub use gallery::*;
pub use reservation::*;
pub use room::*;

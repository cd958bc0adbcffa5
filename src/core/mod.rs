pub mod lib;
pub mod profile;
pub mod registry;
pub mod session;
pub mod theme;
#[cfg(feature = "vfs")]
pub mod vfs;

pub use self::lib::{FolioResult, Navigator};
pub use self::profile::Config;
pub use self::registry::Registry;
pub use self::session::{DeferredAction, Redraw, Session};

mod error;
pub mod forms;
pub mod menu;
pub mod nav;
pub mod overview;
pub mod paths;
mod reset_link;
mod session;

pub use error::{Error, Result, ResultExt};
pub use reset_link::ResetLink;
pub use session::{AuthReply, SESSION_COOKIE_NAME, UserSession, store_session_script};

#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;

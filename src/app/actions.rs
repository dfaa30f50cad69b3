//! Actions representing side effects to be executed by the host.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The only
//! side effect the component ever needs is the one-time user load, which the host
//! performs by handing the message to a [`UserLoader`](crate::loader::UserLoader).
//!
//! # Example
//!
//! ```rust
//! use permview::app::Action;
//! use permview::loader::LoaderMessage;
//!
//! let actions = vec![Action::PostToLoader(LoaderMessage::load_users())];
//! ```

use crate::loader::LoaderMessage;

/// Commands representing side effects to be executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a message to the loader.
    ///
    /// The host must feed the loader's response back as
    /// [`Event::LoaderResponse`](crate::app::Event::LoaderResponse).
    PostToLoader(LoaderMessage),
}

//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type and is
//! free to mutate the whole [`AppState`]. The main `App::update()` only
//! dispatches:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Dream(msg) => DreamHandler.handle(&mut self.state, msg),
//!         Message::Mantra(msg) => MantraHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```
//!
//! Provider calls are issued here with `Task::perform`. The future owns a
//! clone of the provider `Arc`; its result comes back as a message tagged
//! with the ticket the view handed out.

mod dream;
mod emotion;
mod kundali;
mod mantra;
mod navigation;
mod pages;
mod palm;
mod platform;
mod teachings;
mod voice;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use dream::DreamHandler;
pub use emotion::EmotionHandler;
pub use kundali::KundaliHandler;
pub use mantra::MantraHandler;
pub use navigation::NavigationHandler;
pub use pages::{CalendarHandler, HoroscopeHandler};
pub use palm::PalmHandler;
pub use platform::PlatformHandler;
pub use teachings::TeachingsHandler;
pub use voice::VoiceHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}

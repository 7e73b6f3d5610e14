//! Domain entities - the core business objects.

mod choice;
mod poll;
mod question;

pub use choice::Choice;
pub use poll::Poll;
pub use question::Question;

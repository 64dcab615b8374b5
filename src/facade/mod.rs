pub mod session;

pub use session::{EXIT_MESSAGE, Flow, Session};

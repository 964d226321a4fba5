pub mod session;

pub use session::{SearchPhase, SearchSession};

pub mod status;

pub use status::{health, root};

pub mod catalog;
pub mod constants;
pub mod display;
pub mod error;
pub mod gesture;
pub mod selector;
pub mod state;
pub mod viewer;

pub use catalog::*;
pub use constants::*;
pub use display::*;
pub use error::*;
pub use gesture::*;
pub use selector::*;
pub use state::*;
pub use viewer::*;

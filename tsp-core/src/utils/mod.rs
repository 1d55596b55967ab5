//! This module contains helper functionality.

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod permutations;
pub use self::permutations::*;

mod timing;
pub use self::timing::*;

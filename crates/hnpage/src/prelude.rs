pub use crate::error::{Error, Result};

pub use log::{debug, info, warn};
pub use std::format as f;

pub use std::time::Duration;

pub use serde::{Deserialize, Serialize};
pub use serde_json::{Map, Value};
pub use tracing::{debug, info, instrument, warn};

pub use crate::error::{Error, Result};

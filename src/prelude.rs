/* 

This is intended to quickly import commonly used items across
the crate.

@date: 19 Oct, 2026
*/

// Logging goes through tracing everywhere, so it is re-exported here
pub use tracing::{info, error, warn, debug};

pub use crate::numeric::{*};

//! Generated TypeScript modules.

mod client_ts;
mod model_ts;

pub use client_ts::ClientTs;
pub use model_ts::ModelTs;

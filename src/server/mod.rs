pub mod router;
pub mod state;

pub use router::{API_PREFIX, build_router};
pub use state::AppState;

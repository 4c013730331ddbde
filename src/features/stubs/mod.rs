pub mod catalogue;
pub mod dto;
pub mod handler;

pub use catalogue::{STUB_ROUTES, StubRoute};
pub use dto::StubMessageDto;
pub use handler::{handle_stub, stub_router};

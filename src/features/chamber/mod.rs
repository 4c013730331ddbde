pub mod client;
pub mod dto;
pub mod handler;
pub mod helpers;

pub use client::{ChamberClient, ChamberDataSource};
pub use dto::{DeputiesQuery, FilterSet, FilterValue, UpstreamResponse};
pub use handler::{handle_get_deputy, handle_list_deputies};

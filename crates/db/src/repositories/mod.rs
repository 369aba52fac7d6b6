//! Repositories: stateless structs with associated async CRUD functions.

mod event_repo;
mod hotspot_repo;
mod product_repo;
mod video_cta_repo;
mod video_repo;

pub use event_repo::EventRepo;
pub use hotspot_repo::HotspotRepo;
pub use product_repo::ProductRepo;
pub use video_cta_repo::VideoCtaRepo;
pub use video_repo::{PgVideoStateStore, VideoRepo};

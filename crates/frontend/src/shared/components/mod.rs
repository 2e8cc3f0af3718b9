pub mod deal_card;
pub mod import_progress;

pub use deal_card::DealCard;
pub use import_progress::ImportProgressOverlay;

mod events;
mod play;
mod upgrades;

pub use events::Events;
pub use play::Play;
pub use upgrades::Upgrades;

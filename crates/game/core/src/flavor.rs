//! Fixed flavor text shown over the rock.
//!
//! Picking a line is left to the caller so the random source can be seeded.

/// Lines shown after an ordinary click.
pub const ROCK_MESSAGES: &[&str] = &[
    "The rock groans softly.",
    "A fine dust drifts from the crack.",
    "Something deep inside the stone shifts.",
    "The rock seems to remember being a mountain.",
    "Chip. Chip. Chip.",
    "A faint warmth pulses beneath the surface.",
    "The rock does not complain. Not yet.",
    "You feel watched by the stone.",
];

pub const HEART_MESSAGE: &str = "You have reached the Heart of the Mountain. The rock is now still. \
It has given all it can. You have gathered enough. Will you take the final piece, or will you let it rest?";

pub const BAD_ENDING_MESSAGE: &str =
    "You take the heart. The rock crumbles to nothing, and the mountain falls silent forever.";

pub const GOOD_ENDING_MESSAGE: &str =
    "You let it rest. The rock sighs, and somewhere beneath it the mountain begins to heal.";

/// Returns the click line at `index`, wrapping around the pool.
pub fn rock_message(index: usize) -> &'static str {
    ROCK_MESSAGES[index % ROCK_MESSAGES.len()]
}

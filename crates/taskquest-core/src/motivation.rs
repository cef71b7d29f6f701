//! Motivational one-liners shown by the host after lifecycle events.

use rand::seq::SliceRandom;

/// Which occasion a message is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    General,
    Creation,
    Completion,
}

const GENERAL: &[&str] = &[
    "You've got this!",
    "Every task completed is a step forward.",
    "Small wins add up. Keep moving!",
    "Momentum is building. Stay with it.",
];

const CREATION: &[&str] = &[
    "Good plan. Now make it happen.",
    "New quest added. Time to earn the points.",
    "Writing it down is the first step.",
];

const COMPLETION: &[&str] = &[
    "Task done! Another win in the books.",
    "That felt good, right? Grab the next one.",
    "Nice. The streak thanks you.",
    "Checked off. Keep it rolling!",
];

/// Pick a random message for the occasion.
pub fn pick(kind: MessageKind) -> &'static str {
    let pool = match kind {
        MessageKind::General => GENERAL,
        MessageKind::Creation => CREATION,
        MessageKind::Completion => COMPLETION,
    };
    pool.choose(&mut rand::thread_rng()).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_draws_from_the_right_pool() {
        for _ in 0..20 {
            assert!(CREATION.contains(&pick(MessageKind::Creation)));
            assert!(COMPLETION.contains(&pick(MessageKind::Completion)));
        }
    }
}

//! Fixed records inserted by the seed endpoint.

/// One seed record: `(name, color, ready_to_eat)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedFruit {
    pub name: &'static str,
    pub color: &'static str,
    pub ready_to_eat: bool,
}

/// The seed batch, in insertion order. Seeding never deduplicates, so every
/// call appends these three records again.
pub const SEED_FRUITS: [SeedFruit; 3] = [
    SeedFruit {
        name: "grapefruit",
        color: "pink",
        ready_to_eat: true,
    },
    SeedFruit {
        name: "grape",
        color: "purple",
        ready_to_eat: false,
    },
    SeedFruit {
        name: "avocado",
        color: "green",
        ready_to_eat: true,
    },
];

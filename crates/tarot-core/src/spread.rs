use crate::error::{CoreError, CoreResult};

/// A named layout: an ordered list of position labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    /// Stable key used in links and persisted readings.
    pub key: &'static str,
    /// Display name, copied onto each reading at creation time.
    pub name: &'static str,
    /// What the spread is for.
    pub description: &'static str,
    /// Position labels in draw order.
    pub positions: &'static [&'static str],
}

impl Spread {
    /// Number of positional cards (the bottom card is extra).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the spread has no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Minimum deck size: one card per position plus the bottom card.
    pub fn required_cards(&self) -> usize {
        self.positions.len() + 1
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// All spreads in display order.
pub const SPREADS: &[Spread] = &[
    Spread {
        key: "single",
        name: "Single Card",
        description: "The simplest spread, for daily guidance or a quick question.",
        positions: &["Core Guidance"],
    },
    Spread {
        key: "three",
        name: "Past, Present, Future",
        description: "The classic three-card timeline showing how events unfold.",
        positions: &["Past", "Present", "Future"],
    },
    Spread {
        key: "mbs",
        name: "Mind, Body, Spirit",
        description: "A holistic check of mind, body and spirit and their balance.",
        positions: &["Mind", "Body", "Spirit"],
    },
    Spread {
        key: "path",
        name: "Path",
        description: "A four-step path that clarifies the whole process.",
        positions: &["Question", "Challenge", "Direction", "Outcome"],
    },
    Spread {
        key: "twoChoice",
        name: "Two Choices",
        description: "Compares the course and outcome of two options.",
        positions: &[
            "Current Situation",
            "Option A Course",
            "Option B Course",
            "Option A Outcome",
            "Option B Outcome",
        ],
    },
    Spread {
        key: "prosCons",
        name: "Pros and Cons",
        description: "Weighs the strengths and weaknesses of two options.",
        positions: &[
            "Option A Pros",
            "Option A Cons",
            "Option B Pros",
            "Option B Cons",
            "Key Advice",
        ],
    },
    Spread {
        key: "goal",
        name: "Goal",
        description: "Five key aspects of reaching a goal.",
        positions: &["Core", "Obstacle", "Resources", "Steps", "Outcome"],
    },
    Spread {
        key: "relationship",
        name: "Relationship",
        description: "Explores a relationship from both sides.",
        positions: &[
            "Your View",
            "Their View",
            "Current State",
            "Challenge",
            "Potential",
        ],
    },
    Spread {
        key: "weekly",
        name: "Weekly",
        description: "The tone of the week plus a hint for each day.",
        positions: &[
            "Theme",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ],
    },
    Spread {
        key: "monthly",
        name: "Monthly",
        description: "The energy theme of each of the twelve months.",
        positions: &MONTHS,
    },
    Spread {
        key: "quarterly",
        name: "Seasons",
        description: "The flow of the year through its four seasons.",
        positions: &["Spring", "Summer", "Autumn", "Winter"],
    },
    Spread {
        key: "yearly",
        name: "Year Ahead",
        description: "An overall theme for the year plus each month's focus.",
        positions: &[
            "Overall Theme",
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
    },
    Spread {
        key: "chakra",
        name: "Chakras",
        description: "Reads the energy of the seven chakras.",
        positions: &[
            "Root",
            "Sacral",
            "Solar Plexus",
            "Heart",
            "Throat",
            "Third Eye",
            "Crown",
        ],
    },
    Spread {
        key: "elements",
        name: "Five Elements",
        description: "The balance of the five elements.",
        positions: &["Fire", "Water", "Air", "Earth", "Spirit"],
    },
    Spread {
        key: "celtic",
        name: "Celtic Cross",
        description: "The classic Celtic Cross for an in-depth look.",
        positions: &[
            "Heart of the Matter",
            "Obstacle",
            "Foundation",
            "Past",
            "Goal",
            "Future",
            "Attitude",
            "Environment",
            "Hopes",
            "Outcome",
        ],
    },
];

/// Look up a spread by key. Matching is case-insensitive.
pub fn find(key: &str) -> Option<&'static Spread> {
    let key = key.trim();
    SPREADS.iter().find(|s| s.key.eq_ignore_ascii_case(key))
}

/// Look up a spread by key, failing with [`CoreError::UnknownSpread`].
pub fn get(key: &str) -> CoreResult<&'static Spread> {
    find(key).ok_or_else(|| CoreError::UnknownSpread(key.to_string()))
}

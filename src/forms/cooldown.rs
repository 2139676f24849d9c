use std::num::NonZeroU32;

/// Countdown that keeps the contact form locked between submissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cooldown {
    #[default]
    Idle,
    Counting(NonZeroU32),
}

impl Cooldown {
    pub fn start(seconds: u32) -> Self {
        NonZeroU32::new(seconds).map_or(Self::Idle, Self::Counting)
    }

    /// One second has passed.
    pub fn tick(self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Counting(left) => Self::start(left.get() - 1),
        }
    }

    pub fn remaining(self) -> u32 {
        match self {
            Self::Idle => 0,
            Self::Counting(left) => left.get(),
        }
    }

    pub fn is_counting(self) -> bool {
        matches!(self, Self::Counting(_))
    }
}

use std::fmt;

/// Where a game stands. Everything but `Playing` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize))]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
    Quit,
}

impl Phase {
    pub fn is_over(self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Playing => "playing",
            Phase::Won => "won",
            Phase::Lost => "lost",
            Phase::Quit => "quit",
        };
        f.write_str(s)
    }
}

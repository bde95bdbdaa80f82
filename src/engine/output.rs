#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize))]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Event(String),
    Divider,
}

/// Everything the engine wants shown for one turn, in order. Hosts decide
/// how each block looks.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn divider(&mut self) {
        // never two in a row
        if !matches!(self.blocks.last(), Some(OutputBlock::Divider)) {
            self.blocks.push(OutputBlock::Divider);
        }
    }

    pub fn append(&mut self, other: Output) {
        self.blocks.extend(other.blocks);
    }

    /// Plain text of every block except dividers, one entry per block.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                OutputBlock::Title(s) | OutputBlock::Text(s) | OutputBlock::Event(s) => {
                    Some(s.as_str())
                }
                OutputBlock::Divider => None,
            })
            .collect()
    }
}

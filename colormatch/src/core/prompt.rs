use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// The fixed five-color palette from which both the displayed color and the displayed color name
/// are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

pub const PALETTE: [PaletteColor; 5] = [
    PaletteColor::Red,
    PaletteColor::Green,
    PaletteColor::Yellow,
    PaletteColor::Orange,
    PaletteColor::Blue,
];

impl PaletteColor {
    /// name returns the color name as it is shown to the player.
    pub fn name(&self) -> &'static str {
        match self {
            PaletteColor::Red => "Red",
            PaletteColor::Green => "Green",
            PaletteColor::Yellow => "Yellow",
            PaletteColor::Orange => "Orange",
            PaletteColor::Blue => "Blue",
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A Prompt is the displayed color swatch plus the displayed color-name text. Both are drawn
/// independently, so the label may or may not name the displayed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub color: PaletteColor,
    pub label: PaletteColor,
}

impl Prompt {
    /// matches checks if the displayed color name actually names the displayed color.
    pub fn matches(&self) -> bool {
        self.color == self.label
    }
}

/// A PromptSource supplies the prompt for each new round. The production source draws randomly;
/// tests substitute a scripted source to get deterministic outcomes.
pub trait PromptSource {
    fn next_prompt(&mut self) -> Prompt;
}

/// RandomPromptSource draws color and label independently and uniformly from the palette. It can
/// be seeded to make a session reproducible.
#[derive(Debug)]
pub struct RandomPromptSource {
    rng: StdRng,
}

impl RandomPromptSource {
    pub fn new(seed: Option<u64>) -> RandomPromptSource {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        RandomPromptSource { rng }
    }
}

impl PromptSource for RandomPromptSource {
    fn next_prompt(&mut self) -> Prompt {
        Prompt {
            color: PALETTE[self.rng.random_range(0..PALETTE.len())],
            label: PALETTE[self.rng.random_range(0..PALETTE.len())],
        }
    }
}

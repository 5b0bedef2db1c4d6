use crate::core::game::RoundOutcome;
use crate::core::prompt::PaletteColor;

#[derive(Debug, Clone, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<PaletteColor> for RgbColor {
    fn from(color: PaletteColor) -> RgbColor {
        match color {
            PaletteColor::Red => RgbColor { r: 255, g: 0, b: 0 },
            PaletteColor::Green => RgbColor { r: 0, g: 128, b: 0 },
            PaletteColor::Yellow => RgbColor {
                r: 255,
                g: 255,
                b: 0,
            },
            PaletteColor::Orange => RgbColor {
                r: 255,
                g: 165,
                b: 0,
            },
            PaletteColor::Blue => RgbColor { r: 0, g: 0, b: 255 },
        }
    }
}

/// GameState is the snapshot sent to the rendering side after every state change.
#[derive(Debug, Clone)]
pub struct GameState {
    pub score: u32,
    pub countdown: u32,
    pub timer_active: bool,
    pub total_games: u32,
    pub max_score: u32,
    pub prompt_label: String,
    pub prompt_color: PaletteColor,
    pub last_outcome: Option<RoundOutcome>,
}

/// PlayerIntent is a user input forwarded from the rendering side to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerIntent {
    Answer(bool),
    Reset,
    Quit,
}

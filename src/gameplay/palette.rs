use bevy::prelude::*;

/// Ordered page palette (the demo's hue list, sRGB).
pub const PALETTE: [Color; 9] = [
    Color::srgb(0.976, 0.784, 0.055), // #f9c80e saffron
    Color::srgb(0.973, 0.400, 0.141), // #f86624 orange
    Color::srgb(0.918, 0.208, 0.275), // #ea3546 red
    Color::srgb(0.400, 0.180, 0.608), // #662e9b purple
    Color::srgb(0.263, 0.737, 0.804), // #43bccd teal
    Color::srgb(1.000, 0.349, 0.369), // #ff595e coral
    Color::srgb(0.541, 0.788, 0.149), // #8ac926 green
    Color::srgb(0.098, 0.510, 0.769), // #1982c4 blue
    Color::srgb(0.416, 0.298, 0.576), // #6a4c93 violet
];

/// Cyclic palette with a single monotonically advancing index.
#[derive(Resource, Debug, Clone)]
pub struct ColorCycle {
    colors: Vec<Color>,
    index: usize,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(PALETTE.to_vec())
    }
}

impl ColorCycle {
    /// Panics on an empty palette; the palette is non-empty by construction.
    pub fn new(colors: Vec<Color>) -> Self {
        assert!(!colors.is_empty(), "palette must be non-empty");
        Self { colors, index: 0 }
    }

    pub fn current(&self) -> Color {
        self.colors[self.index]
    }

    /// Advance with wraparound and return the new current color.
    pub fn advance(&mut self) -> Color {
        self.index = (self.index + 1) % self.colors.len();
        self.colors[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Colors consumed by one page turn. `held` is the pre-advance color,
/// `incoming` the post-advance one: the fill sweep and the committed backdrop
/// take `incoming`, the ripple takes `held`, and live glyphs are restyled
/// `held` fill / `incoming` outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageColors {
    pub held: Color,
    pub incoming: Color,
}

pub fn page_turn_colors(cycle: &mut ColorCycle) -> PageColors {
    let held = cycle.current();
    let incoming = cycle.advance();
    PageColors { held, incoming }
}

/// Fill/outline pair applied to newly spawned glyphs; rewritten on page turn.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    pub fill: Color,
    pub outline: Color,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            fill: PALETTE[0],
            outline: PALETTE[1],
        }
    }
}

pub mod audio;
pub mod effects;
pub mod glyph_spawn;
pub mod lanes;
pub mod lifetime;
pub mod page_turn;
pub mod palette;

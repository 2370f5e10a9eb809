pub mod assembler;
pub mod composer;
pub mod constants;
pub mod draws;

pub use assembler::{assemble_meal, select_foods};
pub use composer::{generate_plan, generate_random_plan, generate_seeded_plan};
pub use constants::*;
pub use draws::{DrawSource, RngDraws, ScriptedDraws};

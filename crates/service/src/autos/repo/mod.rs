//! `AutoRepository` backends.

pub mod memory;
pub mod file;
pub mod seaorm;

pub use file::FileAutoRepository;
pub use memory::MemoryAutoRepository;
pub use seaorm::SeaOrmAutoRepository;

use models::Auto;

fn sorted_by_vin(mut autos: Vec<Auto>) -> Vec<Auto> {
    autos.sort_by(|a, b| a.vin.cmp(&b.vin));
    autos
}

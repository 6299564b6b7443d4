pub mod moons;
pub mod traits;
pub mod vec_dataset;
pub mod xor;

pub use moons::moons;
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
pub use xor::xor;

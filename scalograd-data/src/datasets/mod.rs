pub mod reference;
pub mod traits;
pub mod vec_dataset;

pub use reference::reference_dataset;
pub use traits::Dataset;
pub use vec_dataset::VecDataset;

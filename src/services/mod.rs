pub mod opener;

pub use opener::SystemOpener;

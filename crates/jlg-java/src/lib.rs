pub mod emitters;
pub mod generator;

pub use emitters::layers::Role;
pub use emitters::templates::Templates;
pub use generator::JavaLayersGenerator;

//! Structs describing the slice of the PokéAPI data model this tool reads.

pub mod location;
pub mod pokedex;
pub mod resource;
pub mod species;
pub mod text;
pub mod version;

pub use location::Area;
pub use location::Location;
pub use pokedex::Pokedex;
pub use resource::Resource;
pub use species::Pokemon;
pub use species::Species;
pub use text::Languages;
pub use text::Localized;
pub use version::Version;
pub use version::VersionGroup;

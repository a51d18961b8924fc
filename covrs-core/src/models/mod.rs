pub mod refdict;
pub mod region;

// re-export for cleaner imports
pub use self::refdict::RefDict;
pub use self::region::Region;

pub mod keys;
pub mod reconcile;
pub mod remap;
pub mod rename;

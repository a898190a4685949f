pub mod entity;
pub mod wire;

pub use entity::*;
pub use wire::{DetailResponse, NamedResource, RosterEntry, RosterResponse, Sprites, TypeSlot};

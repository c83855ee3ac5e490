//! Command implementations for pathladder

pub mod adjacent;
pub mod dispatch;
pub mod ladder;
pub mod paths;
pub mod verify;

pub mod config;
pub mod disclosure;
pub mod icon_registry;
pub mod icons;

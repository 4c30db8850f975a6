// Core module - classification strategies
pub mod classifier;

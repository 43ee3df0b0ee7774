// Shared fixtures
mod support;

mod registry;
mod unit_resolution;

// ABOUTME: Configuration package for nodejoin
// ABOUTME: Exposes environment variable names shared by the CLI and libraries

pub mod constants;

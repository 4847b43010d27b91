pub mod models;
pub mod utils;

// Record types are shared between the engine library and whatever front-end
// feeds it form input.

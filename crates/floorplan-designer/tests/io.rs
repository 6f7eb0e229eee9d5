#[path = "io/renderer.rs"]
mod renderer;
#[path = "io/serialization.rs"]
mod serialization;

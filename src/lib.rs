#[macro_use]
pub mod util;

pub mod vector;
pub use vector::{reflect, Vector, VectorExt, P3, V3};

pub mod color;
pub use color::{colors, ColorRange, Rgba};

pub mod ray;
pub use ray::{Ray, RayPayload};

pub mod light;
pub use light::{lights, Light};

pub mod shape;
pub use shape::Sphere;

pub mod scene;
pub use scene::Scene;

pub mod camera;
pub mod config;
pub mod error;
pub mod example_scenes;
pub mod image;
pub mod intersect;
pub mod lighting;
pub mod renderer;
pub mod stats;
pub mod tracer;

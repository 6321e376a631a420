//! Rendering backend for gridviz.
//!
//! This crate provides the headless rendering engine, including:
//! - An off-screen [`Plotter`] over a CPU framebuffer (no GPU, no display)
//! - Surface rasterization and volume ray marching of [`GridStructure`]s
//! - Color maps, scalar bars and camera management
//! - Image encoding and atomic file output
//!
//! [`GridStructure`]: gridviz_core::GridStructure

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Pixel coordinates and sizes convert between u32, i32 and f32 throughout
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]

pub mod camera;
pub mod color_maps;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod plotter;
pub mod scalar_bar;
pub mod screenshot;
pub mod surface_render;
pub mod volume_render;

pub use camera::{Camera, PixelRays};
pub use color_maps::ColorMap;
pub use error::{RenderError, RenderResult};
pub use framebuffer::Framebuffer;
pub use plotter::{Plotter, PlotterOptions, MAX_WINDOW_SIDE};
pub use scalar_bar::ScalarBarArgs;
pub use screenshot::{encode_image, image_format_for, save_image};
pub use surface_render::MeshStyle;

//! Render dispatch: surface for flat data, volume for everything else.

use std::path::Path;

use gridviz_core::{check_array_dimensions, GridStructure, Options, UVec3};
use gridviz_render::{ColorMap, MeshStyle, Plotter, PlotterOptions, ScalarBarArgs};
use gridviz_structures::{build_grid, GridMetadata};
use ndarray::{ArrayBase, Data, Dimension};
use num_traits::AsPrimitive;

use crate::{init_logging, Result};

/// How a grid is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// A shaded surface mesh, for grids with a size-1 axis.
    Surface,
    /// A volumetric render, for grids with every axis > 1.
    Volume,
}

/// Classifies grid dimensions: any axis of exactly one point means 2D data.
pub fn render_mode(dimensions: UVec3) -> RenderMode {
    if dimensions.to_array().contains(&1) {
        RenderMode::Surface
    } else {
        RenderMode::Volume
    }
}

/// Renders a prebuilt grid to `filename` with default options.
///
/// See [`render_surface_or_volume_with_options`].
pub fn render_surface_or_volume(
    grid: &dyn GridStructure,
    filename: impl AsRef<Path>,
) -> Result<()> {
    render_surface_or_volume_with_options(grid, filename, &Options::default())
}

/// Renders a prebuilt grid to `filename`.
///
/// A grid with a size-1 axis is drawn as a surface mesh, any other grid as a
/// volume. A scalar bar titled after the field is added when
/// `options.show_scalar_bar` is set.
pub fn render_surface_or_volume_with_options(
    grid: &dyn GridStructure,
    filename: impl AsRef<Path>,
    options: &Options,
) -> Result<()> {
    init_logging();
    let mode = render_mode(grid.dimensions());
    log::debug!(
        "rendering field '{}' on {} grid as {mode:?}",
        grid.field_name(),
        format_dims(grid.dimensions())
    );

    let scalar_bar = options.show_scalar_bar.then(ScalarBarArgs::default);
    match mode {
        RenderMode::Surface => render_surface(grid, filename.as_ref(), options, scalar_bar),
        RenderMode::Volume => render_volume(grid, filename.as_ref(), options, scalar_bar),
    }
}

/// Renders a 2D cell array to `filename` with default options.
///
/// See [`render_2d_array_with_options`].
pub fn render_2d_array<S, D>(array: &ArrayBase<S, D>, filename: impl AsRef<Path>) -> Result<()>
where
    S: Data,
    S::Elem: AsPrimitive<f64>,
    D: Dimension,
{
    render_2d_array_with_options(array, filename, &Options::default())
}

/// Renders a 2D cell array to `filename` as a flat surface mesh.
///
/// The array must match `options.extent_2d`; otherwise a
/// [`GridError::ShapeMismatch`](gridviz_core::GridError::ShapeMismatch) is
/// returned and nothing is written.
pub fn render_2d_array_with_options<S, D>(
    array: &ArrayBase<S, D>,
    filename: impl AsRef<Path>,
    options: &Options,
) -> Result<()>
where
    S: Data,
    S::Elem: AsPrimitive<f64>,
    D: Dimension,
{
    init_logging();
    check_array_dimensions(array, &options.extent_2d)?;

    let metadata = GridMetadata::from_options(options)?;
    let grid = build_grid(array, &metadata, &options.field_name)?;

    let scalar_bar = options.show_scalar_bar.then(ScalarBarArgs::default);
    render_surface(&grid, filename.as_ref(), options, scalar_bar)
}

/// Renders a 3D cell array to `filename` with default options.
///
/// See [`render_3d_array_with_options`].
pub fn render_3d_array<S, D>(array: &ArrayBase<S, D>, filename: impl AsRef<Path>) -> Result<()>
where
    S: Data,
    S::Elem: AsPrimitive<f64>,
    D: Dimension,
{
    render_3d_array_with_options(array, filename, &Options::default())
}

/// Renders a 3D cell array to `filename` as a volume with a scalar bar
/// titled after the field.
///
/// The array must match `options.extent_3d`; otherwise a
/// [`GridError::ShapeMismatch`](gridviz_core::GridError::ShapeMismatch) is
/// returned and nothing is written.
pub fn render_3d_array_with_options<S, D>(
    array: &ArrayBase<S, D>,
    filename: impl AsRef<Path>,
    options: &Options,
) -> Result<()>
where
    S: Data,
    S::Elem: AsPrimitive<f64>,
    D: Dimension,
{
    init_logging();
    check_array_dimensions(array, &options.extent_3d)?;

    let metadata = GridMetadata::from_options(options)?;
    let grid = build_grid(array, &metadata, &options.field_name)?;

    let scalar_bar = ScalarBarArgs::titled(grid.field_name());
    render_volume(&grid, filename.as_ref(), options, Some(scalar_bar))
}

fn plotter_options(options: &Options) -> PlotterOptions {
    PlotterOptions {
        window_size: options.window_size,
        background_color: options.background_color,
    }
}

fn render_surface(
    grid: &dyn GridStructure,
    path: &Path,
    options: &Options,
    scalar_bar: Option<ScalarBarArgs>,
) -> Result<()> {
    let mut plotter = Plotter::off_screen(plotter_options(options))?;
    let style = MeshStyle {
        colormap: ColorMap::viridis(),
        show_edges: false,
    };
    plotter.add_mesh(grid, style, scalar_bar)?;
    plotter.screenshot(path)?;
    plotter.close()?;

    log::info!(
        "wrote surface render of '{}' to {}",
        grid.field_name(),
        path.display()
    );
    Ok(())
}

fn render_volume(
    grid: &dyn GridStructure,
    path: &Path,
    options: &Options,
    scalar_bar: Option<ScalarBarArgs>,
) -> Result<()> {
    let mut plotter = Plotter::off_screen(plotter_options(options))?;
    plotter.add_volume(grid, ColorMap::viridis(), scalar_bar)?;
    plotter.screenshot(path)?;
    plotter.close()?;

    log::info!(
        "wrote volume render of '{}' to {}",
        grid.field_name(),
        path.display()
    );
    Ok(())
}

fn format_dims(dims: UVec3) -> String {
    format!("{}x{}x{}", dims.x, dims.y, dims.z)
}

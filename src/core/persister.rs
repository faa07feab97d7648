use crate::core::{AntennaRegistry, Grid, MapStore, Result};

/// Rebuilds the full grid for the registry's dimensions.
pub fn render_grid(registry: &AntennaRegistry) -> Grid {
    let mut grid = Grid::blank(registry.dimensions());
    for antenna in registry {
        grid.set(antenna.position, antenna.frequency);
    }
    grid
}

/// Overwrites the stored map with the current registry contents.
///
/// The write is not atomic: if it fails after the destination was opened the
/// stored map may be partially overwritten.
pub fn persist<S: MapStore + ?Sized>(registry: &AntennaRegistry, store: &S) -> Result<()> {
    let grid = render_grid(registry);
    store.write_map(&grid.render())?;
    tracing::debug!(
        "Persisted {} antennas to {} ({}x{})",
        registry.len(),
        store.location(),
        grid.rows(),
        grid.columns()
    );
    Ok(())
}

use anyhow::Result;
use antenna_map::core::persister::persist;
use antenna_map::{
    AntennaRegistry, FileMapStore, Grid, GridLoader, HazardDetector, MapError, MapSession,
    MapStore, Position,
};
use std::collections::BTreeSet;
use tempfile::TempDir;

const SCENARIO: &str = "..A\n...\nB..\n";

fn write_map(dir: &TempDir, name: &str, contents: &str) -> Result<FileMapStore> {
    let path = dir.path().join(name);
    std::fs::write(&path, contents)?;
    Ok(FileMapStore::new(path))
}

#[test]
fn test_load_build_and_detect_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = write_map(&temp_dir, "antennas.txt", SCENARIO)?;

    let grid = GridLoader::load(&store)?;
    let registry = AntennaRegistry::from_grid(&grid)?;
    let hazards = HazardDetector::detect(&registry)?;

    let found: BTreeSet<Position> = hazards.iter().copied().collect();
    let expected = BTreeSet::from([
        Position::new(0, 1),
        Position::new(1, 2),
        Position::new(1, 0),
        Position::new(2, 1),
    ]);
    assert_eq!(found, expected);
    Ok(())
}

#[test]
fn test_ragged_file_yields_no_registry() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = write_map(&temp_dir, "ragged.txt", "A..\n..\n...\n")?;

    let result = MapSession::open(store);
    assert!(matches!(
        result,
        Err(MapError::FormatError {
            line: 2,
            expected: 3,
            found: 2
        })
    ));
    Ok(())
}

#[test]
fn test_missing_file_is_source_unavailable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileMapStore::new(temp_dir.path().join("nope.txt"));

    assert!(matches!(
        MapSession::open(store),
        Err(MapError::SourceUnavailable { .. })
    ));
    Ok(())
}

#[test]
fn test_persist_then_load_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = "0..a.\n.....\n..Z..\n....9\n";
    let store = write_map(&temp_dir, "round.txt", "")?;

    let grid = Grid::parse(original)?;
    persist(&AntennaRegistry::from_grid(&grid)?, &store)?;

    assert_eq!(GridLoader::load(&store)?, grid);
    assert_eq!(std::fs::read_to_string(store.path())?, original);
    Ok(())
}

#[test]
fn test_remove_rewrites_file_and_updates_hazards() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = write_map(&temp_dir, "antennas.txt", SCENARIO)?;
    let path = store.path().to_path_buf();

    let mut session = MapSession::open(store)?;
    let removed = session.remove_antenna(Position::new(0, 2))?;
    assert_eq!(removed.map(|a| a.frequency), Some('A'));
    assert_eq!(std::fs::read_to_string(&path)?, "...\n...\nB..\n");

    let hazards = session.hazards()?;
    assert_eq!(hazards.sorted(), vec![Position::new(1, 0), Position::new(2, 1)]);
    Ok(())
}

#[test]
fn test_noop_remove_still_rewrites_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // CRLF input is normalised when the map is rewritten.
    let store = write_map(&temp_dir, "antennas.txt", "..A\r\n...\r\nB..\r\n")?;
    let path = store.path().to_path_buf();

    let mut session = MapSession::open(store)?;
    let before = session.registry().clone();

    assert!(session.remove_antenna(Position::new(1, 1))?.is_none());
    assert_eq!(session.registry(), &before);
    assert_eq!(std::fs::read_to_string(&path)?, SCENARIO);
    Ok(())
}

#[test]
fn test_duplicate_insert_leaves_file_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = write_map(&temp_dir, "antennas.txt", "..A\r\n...\r\nB..\r\n")?;
    let path = store.path().to_path_buf();

    let mut session = MapSession::open(store)?;
    let err = session.insert_antenna('Q', Position::new(2, 0)).unwrap_err();

    assert!(matches!(err, MapError::DuplicatePosition { x: 2, y: 0 }));
    // Still the original CRLF bytes: nothing was written.
    assert_eq!(std::fs::read_to_string(&path)?, "..A\r\n...\r\nB..\r\n");
    Ok(())
}

#[test]
fn test_insert_then_reload() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = write_map(&temp_dir, "antennas.txt", SCENARIO)?;

    let mut session = MapSession::open(store.clone())?;
    session.insert_antenna('C', Position::new(1, 1))?;

    let reloaded = MapSession::open(store)?;
    assert_eq!(reloaded.registry().len(), 3);
    assert_eq!(
        reloaded.registry().get(Position::new(1, 1)).map(|a| a.frequency),
        Some('C')
    );
    assert_eq!(reloaded.store().read_map()?, "..A\n.C.\nB..\n");
    Ok(())
}

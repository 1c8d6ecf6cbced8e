use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::models::ResultSet;

/// Replace any previous export at `path` with this run's results. Removing
/// a file that does not exist counts as success, so a first run against a
/// clean directory writes normally.
pub fn write_results(path: &Path, results: &ResultSet) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json)?;

    info!("Wrote {} wishlists to {}", results.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookRecord, Wishlist, WishlistId};
    use pretty_assertions::assert_eq;

    fn sample() -> ResultSet {
        let mut results = ResultSet::new();
        let mut wishlist = Wishlist::new(WishlistId("1".to_string()), "A");
        wishlist.books.push(BookRecord {
            title: "T".to_string(),
            author: "X".to_string(),
        });
        results.push(wishlist);
        results
    }

    #[test]
    fn writes_when_output_path_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wishlists.json");
        assert!(!path.exists());

        write_results(&path, &sample()).unwrap();

        let restored: ResultSet =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored, sample());
    }

    #[test]
    fn replaces_a_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wishlists.json");
        fs::write(&path, "stale garbage").unwrap();

        write_results(&path, &sample()).unwrap();

        let restored: ResultSet =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored, sample());
    }
}

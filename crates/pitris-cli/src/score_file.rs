use std::{fs, path::Path};

/// Reads the saved best score as a native-endian 32-bit integer. A missing
/// or malformed file counts as zero.
pub fn load(path: &Path) -> i32 {
    fs::read(path)
        .ok()
        .and_then(|bytes| <[u8; 4]>::try_from(bytes.as_slice()).ok())
        .map_or(0, i32::from_ne_bytes)
}

/// Writes the best score. Failures are ignored; the score file is a
/// convenience, not a requirement.
pub fn store(path: &Path, score: i32) {
    let _ = fs::write(path, score.to_ne_bytes());
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf, process};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("pitris-{name}-{}", process::id()))
    }

    #[test]
    fn missing_file_loads_as_zero() {
        assert_eq!(load(&temp_path("missing")), 0);
    }

    #[test]
    fn scores_round_trip() {
        let path = temp_path("round-trip");
        store(&path, 12_345);
        assert_eq!(load(&path), 12_345);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn short_file_loads_as_zero() {
        let path = temp_path("short");
        fs::write(&path, [1, 2]).unwrap();
        assert_eq!(load(&path), 0);
        let _ = fs::remove_file(&path);
    }
}

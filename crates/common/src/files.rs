use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use xshell::Shell;

pub fn read_json_file<T: DeserializeOwned>(
    shell: &Shell,
    path: impl AsRef<Path>,
) -> anyhow::Result<T> {
    let content = shell
        .read_file(&path)
        .with_context(|| format!("Failed to read file {:?}", path.as_ref()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {:?}", path.as_ref()))
}

pub fn save_json_file(
    shell: &Shell,
    path: impl AsRef<Path>,
    content: impl Serialize,
) -> anyhow::Result<()> {
    let data = serde_json::to_string_pretty(&content)?;
    shell
        .write_file(&path, data)
        .with_context(|| format!("Failed to write file {:?}", path.as_ref()))?;
    Ok(())
}

pub fn read_toml_file<T: DeserializeOwned>(
    shell: &Shell,
    path: impl AsRef<Path>,
) -> anyhow::Result<T> {
    let content = shell
        .read_file(&path)
        .with_context(|| format!("Failed to read file {:?}", path.as_ref()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML in {:?}", path.as_ref()))
}

pub fn save_toml_file(
    shell: &Shell,
    path: impl AsRef<Path>,
    content: impl Serialize,
    comment: impl ToString,
) -> anyhow::Result<()> {
    let mut data = comment.to_string();
    data.push_str(&toml::to_string(&content)?);
    shell
        .write_file(&path, data)
        .with_context(|| format!("Failed to write file {:?}", path.as_ref()))?;
    Ok(())
}

/// Walk up from `from` looking for a directory that contains `file_name`.
/// Returns the directory, not the file.
pub fn find_file(shell: &Shell, from: &Path, file_name: &str) -> anyhow::Result<PathBuf> {
    let mut dir = from.to_path_buf();
    loop {
        if shell.path_exists(dir.join(file_name)) {
            return Ok(dir);
        }
        if !dir.pop() {
            anyhow::bail!("Could not find {file_name} in {from:?} or any parent directory");
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        value: u64,
    }

    #[test]
    fn json_round_trip() {
        let shell = Shell::new().unwrap();
        let dir = shell.create_temp_dir().unwrap();
        let path = dir.path().join("sample.json");

        let sample = Sample {
            name: "batch".into(),
            value: 42,
        };
        save_json_file(&shell, &path, &sample).unwrap();
        let read: Sample = read_json_file(&shell, &path).unwrap();
        assert_eq!(read, sample);
    }

    #[test]
    fn toml_round_trip_with_comment() {
        let shell = Shell::new().unwrap();
        let dir = shell.create_temp_dir().unwrap();
        let path = dir.path().join("sample.toml");

        let sample = Sample {
            name: "batch".into(),
            value: 7,
        };
        save_toml_file(&shell, &path, &sample, "# generated\n").unwrap();
        let content = shell.read_file(&path).unwrap();
        assert!(content.starts_with("# generated"));
        let read: Sample = read_toml_file(&shell, &path).unwrap();
        assert_eq!(read, sample);
    }

    #[test]
    fn find_file_walks_up() {
        let shell = Shell::new().unwrap();
        let dir = shell.create_temp_dir().unwrap();
        let nested = dir.path().join("a/b/c");
        shell.create_dir(&nested).unwrap();
        shell.write_file(dir.path().join("marker.toml"), "x = 1").unwrap();

        let found = find_file(&shell, &nested, "marker.toml").unwrap();
        assert_eq!(found, dir.path());
        assert!(find_file(&shell, &nested, "missing.toml").is_err());
    }
}

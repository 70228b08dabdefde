use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::{fs, io};

use inquire::Text;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const CONF_FILE_NAME: &str = ".write-blog.json";

/// Per-project settings, stored next to the posts as pretty-printed JSON.
/// Written once by the creation guide and never rewritten afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dir: String,
    #[serde(default)]
    pub ext: String,
    #[serde(default, rename = "timeFormatString")]
    pub time_format_string: String,
}

pub fn read_config(conf_path: &Path) -> io::Result<Config> {
    let conf_literal = fs::read_to_string(conf_path)?;

    match serde_json::from_str::<Config>(&conf_literal) {
        Ok(config) => Ok(config),
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    }
}

pub fn write_config(conf_path: &Path, config: &Config) -> Result<()> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(conf_path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(Error::ConfigWriteConflict { path: conf_path.to_path_buf() });
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let conf_literal = serde_json::to_string_pretty(config)?;
    file.write_all(conf_literal.as_bytes())?;

    Ok(())
}

fn create_config_guide(conf_path: &Path) -> Result<Config> {
    let dir = Text::new("[> conf] blog file source directory").prompt()?;

    let ext = Text::new("[> conf] markdown file extension")
        .with_default("mdx")
        .prompt()?;

    let time_format_string = Text::new("[> conf] time format string")
        .with_default("yyyy/MM")
        .prompt()?;

    let config = Config { dir, ext, time_format_string };
    write_config(conf_path, &config)?;

    Ok(config)
}

/// Reads the project configuration, falling into the interactive creation
/// guide when the file is missing or unreadable.
pub fn ensure_config(conf_path: &Path) -> Result<Config> {
    match read_config(conf_path) {
        Ok(config) => Ok(config),
        Err(_) => create_config_guide(conf_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let conf_path = temp_dir.path().join(CONF_FILE_NAME);
        fs::write(&conf_path, r#"{"dir": "posts", "ext": "mdx", "timeFormatString": "yyyy/MM"}"#).unwrap();

        let config = read_config(&conf_path).unwrap();
        assert_eq!(config.dir, "posts");
        assert_eq!(config.ext, "mdx");
        assert_eq!(config.time_format_string, "yyyy/MM");
    }

    #[test]
    fn test_read_config_partial_object() {
        let temp_dir = tempfile::tempdir().unwrap();
        let conf_path = temp_dir.path().join(CONF_FILE_NAME);
        fs::write(&conf_path, r#"{"dir": "posts"}"#).unwrap();

        // Field presence is not validated, missing keys surface downstream
        let config = read_config(&conf_path).unwrap();
        assert_eq!(config.dir, "posts");
        assert_eq!(config.ext, "");
        assert_eq!(config.time_format_string, "");
    }

    #[test]
    fn test_read_config_invalid_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let conf_path = temp_dir.path().join(CONF_FILE_NAME);
        fs::write(&conf_path, "not json").unwrap();

        assert!(read_config(&conf_path).is_err());
    }

    #[test]
    fn test_write_config_pretty_prints() {
        let temp_dir = tempfile::tempdir().unwrap();
        let conf_path = temp_dir.path().join(CONF_FILE_NAME);

        let config = Config {
            dir: "posts".to_string(),
            ext: "mdx".to_string(),
            time_format_string: "yyyy/MM".to_string(),
        };
        write_config(&conf_path, &config).unwrap();

        let written = fs::read_to_string(&conf_path).unwrap();
        assert_eq!(
            written,
            "{\n  \"dir\": \"posts\",\n  \"ext\": \"mdx\",\n  \"timeFormatString\": \"yyyy/MM\"\n}"
        );
    }

    #[test]
    fn test_write_config_never_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let conf_path = temp_dir.path().join(CONF_FILE_NAME);
        fs::write(&conf_path, "{}").unwrap();

        let config = Config {
            dir: "posts".to_string(),
            ext: "mdx".to_string(),
            time_format_string: "yyyy/MM".to_string(),
        };
        let result = write_config(&conf_path, &config);

        assert!(matches!(result, Err(Error::ConfigWriteConflict { .. })));
        assert_eq!(fs::read_to_string(&conf_path).unwrap(), "{}");
    }

    #[test]
    fn test_ensure_config_skips_guide_when_present() {
        let temp_dir = tempfile::tempdir().unwrap();
        let conf_path = temp_dir.path().join(CONF_FILE_NAME);
        let conf_literal = r#"{"dir": "posts", "ext": "md", "timeFormatString": "yyyy"}"#;
        fs::write(&conf_path, conf_literal).unwrap();

        // A readable config never enters the interactive guide, so this
        // must return without prompting and without touching the file
        let config = ensure_config(&conf_path).unwrap();
        assert_eq!(config.ext, "md");
        assert_eq!(fs::read_to_string(&conf_path).unwrap(), conf_literal);
    }
}

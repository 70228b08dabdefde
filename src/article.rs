use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::fs;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::front_matter::RenderedArticle;
use crate::text_utils::{format_date, parse_date};

/// Directory a post with the given date lands in, derived from the
/// configured root and time format.
pub fn destination_dir(config: &Config, date: &str) -> Result<PathBuf> {
    let date_time = parse_date(date)?;
    let sub_path = format_date(&date_time, &config.time_format_string)?;
    Ok(PathBuf::from(&config.dir).join(sub_path))
}

/// Writes the rendered post under the configured directory tree. The file
/// is created exclusively, an existing post at the same path is never
/// overwritten. Returns the path of the created file.
pub fn write_article(config: &Config, article: &RenderedArticle) -> Result<PathBuf> {
    let dir = destination_dir(config, &article.date)?;
    if let Err(e) = fs::create_dir_all(&dir) {
        return Err(Error::DirectoryCreation { path: dir, source: e });
    }

    let file_name = dir.join(format!("{}.{}", article.slug, config.ext));
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&file_name) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(Error::ArticleWriteConflict { path: file_name });
        }
        Err(e) => return Err(Error::Io(e)),
    };
    file.write_all(article.content.as_bytes())?;

    Ok(file_name)
}

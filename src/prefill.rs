use chrono::{SecondsFormat, Utc};
use inquire::Text;

use crate::error::Result;
use crate::front_matter::FrontMatter;
use crate::text_utils::{slugify, split_tag_entry, split_tags};

/// Metadata supplied up-front on the command line. Whatever is missing
/// here is asked for interactively by [`resolve`].
#[derive(Debug, Clone, Default)]
pub struct Prefill {
    pub title: String,
    pub slug: Option<String>,
    pub tags: Option<Vec<String>>,
    pub date: Option<String>,
}

impl Prefill {
    /// Pure merge of the parsed command line: positional words become the
    /// title, the slug flag is normalized, the tags flag is split on commas.
    pub fn from_flags(
        title_words: Vec<String>,
        slug: Option<String>,
        tags: Option<String>,
        date: Option<String>,
    ) -> Prefill {
        Prefill {
            title: title_words.join(" "),
            slug: slug.map(|slug| slugify(&slug)),
            tags: tags.map(|tags| split_tags(&tags)),
            date,
        }
    }
}

/// Fills the gaps in a prefill, one field at a time. Each prompt suspends
/// the pipeline until answered; aborting a prompt aborts the run with
/// nothing written.
pub fn resolve(prefill: Prefill) -> Result<FrontMatter> {
    let title = if prefill.title.is_empty() {
        Text::new("Blog Title *").prompt()?
    } else {
        prefill.title
    };

    let slug = match prefill.slug {
        Some(slug) => slug,
        None => Text::new("Blog Slug *")
            .with_default(&slugify(&title))
            .prompt()?,
    };

    let tags = match prefill.tags {
        Some(tags) => tags,
        None => {
            let entry = Text::new("Tags (Optional, separate by comma<,>)").prompt()?;
            split_tag_entry(&entry)
        }
    };

    let date = match prefill.date {
        Some(date) => date,
        None => {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            Text::new("Date").with_default(&now).prompt()?
        }
    };

    Ok(FrontMatter { title, slug, tags, date })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_joins_title_words() {
        let prefill = Prefill::from_flags(
            vec!["my".to_string(), "first".to_string(), "post".to_string()],
            None,
            None,
            None,
        );

        assert_eq!(prefill.title, "my first post");
        assert_eq!(prefill.slug, None);
        assert_eq!(prefill.tags, None);
        assert_eq!(prefill.date, None);
    }

    #[test]
    fn test_from_flags_normalizes_slug() {
        let prefill = Prefill::from_flags(vec![], Some("He LLo!".to_string()), None, None);
        assert_eq!(prefill.slug, Some("he-llo".to_string()));
    }

    #[test]
    fn test_from_flags_splits_tags() {
        let prefill = Prefill::from_flags(vec![], None, Some("rust,blog，cli".to_string()), None);
        assert_eq!(
            prefill.tags,
            Some(vec!["rust".to_string(), "blog".to_string(), "cli".to_string()])
        );
    }

    #[test]
    fn test_from_flags_passes_date_through() {
        let prefill = Prefill::from_flags(vec![], None, None, Some("2024-03-05".to_string()));
        assert_eq!(prefill.date, Some("2024-03-05".to_string()));
    }
}

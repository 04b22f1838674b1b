mod posts;

pub use posts::POSTS;

#[derive(Debug, PartialEq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub date: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Paragraphs separated by blank lines.
    pub content: &'static str,
}

impl BlogPost {
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

pub fn find(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn finds_known_slug() {
        let post = find("consumption-vs-learning").unwrap();
        assert_eq!(post.title, "Consumption vs. Learning");
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(find("does-not-exist").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), POSTS.len());
    }

    #[test]
    fn content_splits_on_blank_lines() {
        let post = find("intelligence-and-action-space").unwrap();
        let paragraphs: Vec<_> = post.paragraphs().collect();
        assert_eq!(paragraphs.len(), 6);
        assert_eq!(paragraphs.last(), Some(&"Intelligence is freedom in the future."));
        assert!(paragraphs.iter().all(|p| !p.contains("\n\n")));
    }
}

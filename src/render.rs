//! Terminal rendering of the article list.
//!
//! The display-layer collaborator: pure string building, one block per
//! article carrying the four display fields (title, author, category,
//! date) plus the URL the reader can open. An empty list renders the
//! fixed empty-state message; the caller cannot tell "no matches" from a
//! failed fetch, by design.

use crate::models::Article;

/// Shown when a fetch cycle produced no articles.
pub const NO_NEWS_MESSAGE: &str = "No news found.";

/// Format one article as a display block.
pub fn format_article(article: &Article) -> String {
    format!(
        "{}\n  {} | {} | {}\n  {}",
        article.title, article.author, article.category, article.date, article.url
    )
}

/// Render the whole list, or the empty-state message.
pub fn render_list(articles: &[Article]) -> String {
    if articles.is_empty() {
        return NO_NEWS_MESSAGE.to_string();
    }
    articles
        .iter()
        .map(format_article)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            title: "T1".to_string(),
            date: "2020-01-02".to_string(),
            url: "http://x".to_string(),
            author: "Guardian Staff".to_string(),
            category: "World".to_string(),
        }
    }

    #[test]
    fn test_format_article_shows_all_fields() {
        let block = format_article(&sample_article());
        assert!(block.contains("T1"));
        assert!(block.contains("Guardian Staff"));
        assert!(block.contains("World"));
        assert!(block.contains("2020-01-02"));
        assert!(block.contains("http://x"));
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_list(&[]), NO_NEWS_MESSAGE);
    }

    #[test]
    fn test_render_separates_articles() {
        let articles = vec![sample_article(), sample_article()];
        let out = render_list(&articles);
        assert_eq!(out.matches("T1").count(), 2);
        assert!(out.contains("\n\n"));
    }
}

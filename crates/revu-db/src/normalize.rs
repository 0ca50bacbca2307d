//! Normalization from raw store rows to [`revu_core::Post`].
//!
//! The crawler's rows are noisy: counters are text and may be blank or
//! garbage, the image list is a comma-joined string. Counter failures are
//! absorbed at field level (coerce to 0); only rows with no usable image at
//! all are dropped.

use revu_core::Post;

use crate::posts::PostRow;

/// Convert raw rows into domain posts, dropping rows without usable images.
#[must_use]
pub fn posts_from_rows(rows: Vec<PostRow>) -> Vec<Post> {
    rows.into_iter().filter_map(post_from_row).collect()
}

/// Convert one raw row into a [`Post`].
///
/// Returns `None` when the row has no usable image URLs; such posts cannot
/// contribute to curation. Malformed counters coerce to 0 so the post still
/// participates (ranked last) rather than disappearing.
#[must_use]
pub fn post_from_row(row: PostRow) -> Option<Post> {
    let images = split_image_list(row.image_list.as_deref().unwrap_or(""));
    if images.is_empty() {
        tracing::debug!(post_id = %row.post_id, "skipping post without usable images");
        return None;
    }

    Some(Post {
        post_id: row.post_id,
        title: row.title.unwrap_or_default(),
        desc: row.desc.unwrap_or_default(),
        author: row.author.unwrap_or_default(),
        liked_count: parse_count(row.liked_count.as_deref()),
        comment_count: parse_count(row.comment_count.as_deref()),
        collected_count: parse_count(row.collected_count.as_deref()),
        images,
        url: row.post_url.unwrap_or_default(),
    })
}

/// Parse a textual engagement counter; anything unparsable counts as 0.
fn parse_count(raw: Option<&str>) -> u64 {
    raw.map_or(0, |s| s.trim().parse().unwrap_or(0))
}

/// Split a comma-joined URL list, trimming entries and dropping blanks.
fn split_image_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(liked: Option<&str>, image_list: Option<&str>) -> PostRow {
        PostRow {
            post_id: "p1".to_owned(),
            title: Some("炭火烤肉".to_owned()),
            desc: Some("外焦里嫩".to_owned()),
            liked_count: liked.map(ToOwned::to_owned),
            comment_count: Some("3".to_owned()),
            collected_count: Some("7".to_owned()),
            image_list: image_list.map(ToOwned::to_owned),
            post_url: Some("https://example.com/p1".to_owned()),
            author: Some("foodie".to_owned()),
        }
    }

    #[test]
    fn valid_row_converts() {
        let post = post_from_row(row(Some("42"), Some("http://a.jpg,http://b.jpg"))).unwrap();
        assert_eq!(post.liked_count, 42);
        assert_eq!(post.images, vec!["http://a.jpg", "http://b.jpg"]);
        assert_eq!(post.comment_count, 3);
        assert_eq!(post.collected_count, 7);
    }

    #[test]
    fn empty_liked_count_coerces_to_zero_and_row_survives() {
        let post = post_from_row(row(Some(""), Some("http://a.jpg,http://b.jpg,http://c.jpg")))
            .expect("row with images must survive bad counters");
        assert_eq!(post.liked_count, 0);
        assert_eq!(post.images.len(), 3);
    }

    #[test]
    fn garbage_counters_coerce_to_zero() {
        let post = post_from_row(row(Some("1.2k"), Some("http://a.jpg"))).unwrap();
        assert_eq!(post.liked_count, 0);
    }

    #[test]
    fn missing_counters_coerce_to_zero() {
        let post = post_from_row(row(None, Some("http://a.jpg"))).unwrap();
        assert_eq!(post.liked_count, 0);
    }

    #[test]
    fn counter_whitespace_is_trimmed() {
        let post = post_from_row(row(Some("  99 "), Some("http://a.jpg"))).unwrap();
        assert_eq!(post.liked_count, 99);
    }

    #[test]
    fn row_without_images_is_dropped() {
        assert!(post_from_row(row(Some("42"), None)).is_none());
        assert!(post_from_row(row(Some("42"), Some(""))).is_none());
        assert!(post_from_row(row(Some("42"), Some(" , ,"))).is_none());
    }

    #[test]
    fn image_list_entries_are_trimmed_and_blanks_dropped() {
        let post = post_from_row(row(Some("1"), Some(" http://a.jpg , ,http://b.jpg,"))).unwrap();
        assert_eq!(post.images, vec!["http://a.jpg", "http://b.jpg"]);
    }

    #[test]
    fn posts_from_rows_keeps_input_order() {
        let rows = vec![
            row(Some("1"), Some("http://a.jpg")),
            row(Some("2"), None),
            row(Some("3"), Some("http://c.jpg")),
        ];
        let posts = posts_from_rows(rows);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].liked_count, 1);
        assert_eq!(posts[1].liked_count, 3);
    }
}

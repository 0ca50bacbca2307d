//! Image selection: AI-backed primary with an engagement-ranked fallback.

use std::collections::HashSet;

use revu_ai::{AiError, CompletionBackend};

use crate::prompts::{build_selection_prompt, SYSTEM_PERSONA};
use crate::types::ImageCandidate;

/// Select up to `target` image URLs for `keyword`.
///
/// Tries the AI backend first; any [`AiError`] is logged as a warning and
/// absorbed by [`fallback_select`], so this function always returns between
/// 0 and `target` URLs and never fails. `backend: None` means no backend
/// could be built for this run and goes straight to the fallback.
pub async fn select_images(
    backend: Option<&CompletionBackend>,
    candidates: &[ImageCandidate],
    keyword: &str,
    target: usize,
) -> Vec<String> {
    let attempt = match backend {
        Some(backend) => remote_select(backend, candidates, keyword, target).await,
        None => Err(AiError::Unavailable),
    };

    match attempt {
        Ok(urls) => {
            tracing::info!(keyword = %keyword, count = urls.len(), "AI selected images");
            urls
        }
        Err(e) => {
            tracing::warn!(
                keyword = %keyword,
                error = %e,
                "AI image selection failed, falling back to engagement ranking"
            );
            fallback_select(candidates, target)
        }
    }
}

async fn remote_select(
    backend: &CompletionBackend,
    candidates: &[ImageCandidate],
    keyword: &str,
    target: usize,
) -> Result<Vec<String>, AiError> {
    let prompt = build_selection_prompt(candidates, keyword, target);
    let response = backend.complete(SYSTEM_PERSONA, &prompt).await?;
    Ok(parse_url_lines(&response, target))
}

/// Extract URL-looking lines from a backend response.
///
/// The response is free text; only trimmed lines starting with `http` count.
/// Zero usable lines is a normal outcome, not an error: the caller simply
/// gets a short (possibly empty) list.
fn parse_url_lines(response: &str, target: usize) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("http"))
        .map(ToOwned::to_owned)
        .take(target)
        .collect()
}

/// Deterministic selection: highest-liked candidates first.
///
/// Candidates are scanned in stable descending liked-count order; each
/// non-blank URL not seen before (exact match) is taken until `target` is
/// reached. Pure and infallible; worst case is a short or empty result
/// when candidates run out.
#[must_use]
pub fn fallback_select(candidates: &[ImageCandidate], target: usize) -> Vec<String> {
    let mut ranked: Vec<&ImageCandidate> = candidates.iter().collect();
    ranked.sort_by(|a, b| b.liked_count.cmp(&a.liked_count));

    let mut seen: HashSet<&str> = HashSet::new();
    let mut selected = Vec::new();
    for candidate in ranked {
        if selected.len() >= target {
            break;
        }
        if candidate.url.trim().is_empty() {
            continue;
        }
        if seen.insert(candidate.url.as_str()) {
            selected.push(candidate.url.clone());
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(url: &str, liked: u64) -> ImageCandidate {
        ImageCandidate {
            url: url.to_owned(),
            post_title: String::new(),
            post_desc: String::new(),
            liked_count: liked,
            post_url: String::new(),
        }
    }

    #[test]
    fn parse_url_lines_keeps_only_url_looking_lines() {
        let response = "这是我选出的图片：\nhttp://img.example/1.jpg\n  https://img.example/2.jpg  \n以上。\n";
        assert_eq!(
            parse_url_lines(response, 9),
            vec!["http://img.example/1.jpg", "https://img.example/2.jpg"]
        );
    }

    #[test]
    fn parse_url_lines_truncates_to_target() {
        let response = "http://a\nhttp://b\nhttp://c\n";
        assert_eq!(parse_url_lines(response, 2), vec!["http://a", "http://b"]);
    }

    #[test]
    fn parse_url_lines_empty_response_is_empty() {
        assert!(parse_url_lines("", 9).is_empty());
        assert!(parse_url_lines("完全没有链接", 9).is_empty());
    }

    #[test]
    fn fallback_orders_by_liked_count() {
        let candidates = vec![
            candidate("http://low", 10),
            candidate("http://high", 200),
            candidate("http://mid", 50),
        ];
        assert_eq!(
            fallback_select(&candidates, 9),
            vec!["http://high", "http://mid", "http://low"]
        );
    }

    #[test]
    fn fallback_deduplicates_exact_urls() {
        let candidates = vec![
            candidate("http://a", 5),
            candidate("http://a", 4),
            candidate("http://b", 3),
        ];
        assert_eq!(fallback_select(&candidates, 9), vec!["http://a", "http://b"]);
    }

    #[test]
    fn fallback_skips_blank_urls() {
        let candidates = vec![
            candidate("   ", 100),
            candidate("", 90),
            candidate("http://a", 1),
        ];
        assert_eq!(fallback_select(&candidates, 9), vec!["http://a"]);
    }

    #[test]
    fn fallback_stops_at_target() {
        let candidates: Vec<ImageCandidate> = (0..20)
            .map(|i| candidate(&format!("http://img/{i}"), 100 - i))
            .collect();
        let selected = fallback_select(&candidates, 9);
        assert_eq!(selected.len(), 9);
        assert_eq!(selected[0], "http://img/0");
    }

    #[test]
    fn fallback_returns_all_distinct_when_fewer_than_target() {
        let candidates = vec![
            candidate("http://a", 2),
            candidate("http://b", 1),
            candidate("http://a", 1),
        ];
        assert_eq!(fallback_select(&candidates, 9).len(), 2);
    }

    #[test]
    fn fallback_ties_keep_candidate_order() {
        let candidates = vec![
            candidate("http://first", 5),
            candidate("http://second", 5),
        ];
        assert_eq!(
            fallback_select(&candidates, 9),
            vec!["http://first", "http://second"]
        );
    }

    #[test]
    fn fallback_empty_candidates_is_empty() {
        assert!(fallback_select(&[], 9).is_empty());
    }
}

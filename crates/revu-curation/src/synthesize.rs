//! Review synthesis: AI-backed primary with a fixed template fallback.

use revu_ai::{AiError, CompletionBackend};
use revu_core::Post;

use crate::prompts::{build_synthesis_prompt, SYSTEM_PERSONA};

/// Cue words per review category, scanned over the reference posts.
const TASTE_CUES: &[&str] = &["好吃", "美味", "香", "嫩", "鲜"];
const AMBIENCE_CUES: &[&str] = &["环境", "装修", "氛围", "店面"];
const SERVICE_CUES: &[&str] = &["服务", "态度", "热情"];
const VALUE_CUES: &[&str] = &["划算", "便宜", "实惠", "性价比"];

/// Synthesize the review text for `keyword`.
///
/// Tries the AI backend first and returns its output trimmed, verbatim;
/// the length and format instructions in the prompt are advisory, not
/// enforced. Any [`AiError`] is logged as a warning and absorbed by
/// [`template_review`], so this function never fails.
pub async fn synthesize_review(
    backend: Option<&CompletionBackend>,
    reference_posts: &[Post],
    keyword: &str,
    selected_count: usize,
) -> String {
    let attempt = match backend {
        Some(backend) => {
            remote_synthesize(backend, reference_posts, keyword, selected_count).await
        }
        None => Err(AiError::Unavailable),
    };

    match attempt {
        Ok(text) => {
            tracing::info!(
                keyword = %keyword,
                chars = text.chars().count(),
                "AI generated review text"
            );
            text
        }
        Err(e) => {
            tracing::warn!(
                keyword = %keyword,
                error = %e,
                "AI review generation failed, falling back to template"
            );
            template_review(reference_posts, keyword)
        }
    }
}

async fn remote_synthesize(
    backend: &CompletionBackend,
    reference_posts: &[Post],
    keyword: &str,
    selected_count: usize,
) -> Result<String, AiError> {
    let prompt = build_synthesis_prompt(reference_posts, keyword, selected_count);
    let response = backend.complete(SYSTEM_PERSONA, &prompt).await?;
    Ok(response.trim().to_owned())
}

/// Fixed-form review used whenever the AI path is unavailable.
///
/// Only the keyword varies: the fallback favors complete, plausible output
/// over personalization, since personalization needs the very backend that
/// just failed. Always non-empty, always contains the keyword, and cannot
/// fail; an empty reference list is fine.
#[must_use]
pub fn template_review(reference_posts: &[Post], keyword: &str) -> String {
    let highlights = detect_highlights(reference_posts);
    tracing::debug!(
        keyword = %keyword,
        highlights = ?highlights,
        "categories covered by reference posts"
    );

    let title = format!("探店{keyword} | 这家店真的绝了！📸✨");
    let body = [
        format!("🍖 今天来探店传说中的{keyword}，真的是被惊艳到了！"),
        String::new(),
        "【口味卖相】⭐⭐⭐⭐⭐".to_owned(),
        "火候掌握得刚刚好，外焦里嫩，每一口都能感受到食材的鲜美💧 摆盘也很用心，颜值和味道都在线👍".to_owned(),
        String::new(),
        "【服务体验】⭐⭐⭐⭐".to_owned(),
        "店员超级热情，会主动介绍招牌菜，还会推荐好吃的搭配🥰 整个用餐过程很愉快".to_owned(),
        String::new(),
        "【环境氛围】⭐⭐⭐⭐".to_owned(),
        "店内装修很有特色，灯光氛围营造得很棒✨ 适合和朋友聚餐，拍照也很好看📷".to_owned(),
        String::new(),
        "【价格水平】⭐⭐⭐⭐".to_owned(),
        "人均消费合理，分量足够，性价比还是很不错的💰 学生党也可以承受".to_owned(),
        String::new(),
        format!("总的来说，{keyword}真的值得一试！已经预约下次带家人来了🎉"),
        String::new(),
        "#美食探店 #人气餐厅 #吃货日常".to_owned(),
    ]
    .join("\n");

    format!("{title}\n\n{body}")
}

/// Which review categories the reference posts mention.
///
/// The template itself is fixed-form; the matched categories only surface in
/// the logs, so a degraded run still records what the source material
/// covered.
fn detect_highlights(posts: &[Post]) -> Vec<&'static str> {
    let mut taste = false;
    let mut ambience = false;
    let mut service = false;
    let mut value = false;

    for post in posts {
        let text = format!("{} {}", post.title, post.desc).to_lowercase();
        taste |= TASTE_CUES.iter().any(|cue| text.contains(cue));
        ambience |= AMBIENCE_CUES.iter().any(|cue| text.contains(cue));
        service |= SERVICE_CUES.iter().any(|cue| text.contains(cue));
        value |= VALUE_CUES.iter().any(|cue| text.contains(cue));
    }

    let mut highlights = Vec::new();
    if taste {
        highlights.push("taste");
    }
    if ambience {
        highlights.push("ambience");
    }
    if service {
        highlights.push("service");
    }
    if value {
        highlights.push("value");
    }
    highlights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, desc: &str) -> Post {
        Post {
            post_id: "p".to_owned(),
            title: title.to_owned(),
            desc: desc.to_owned(),
            author: String::new(),
            liked_count: 1,
            comment_count: 0,
            collected_count: 0,
            images: vec!["http://img.example/1.jpg".to_owned()],
            url: String::new(),
        }
    }

    #[test]
    fn template_contains_keyword_in_title_and_body() {
        let text = template_review(&[], "烤肉");
        assert!(text.starts_with("探店烤肉"));
        assert!(text.contains("传说中的烤肉"));
        assert!(text.contains("烤肉真的值得一试"));
    }

    #[test]
    fn template_is_never_empty() {
        assert!(!template_review(&[], "串串香").is_empty());
        assert!(!template_review(&[post("好吃", "环境好")], "串串香").is_empty());
    }

    #[test]
    fn template_keeps_star_sections() {
        let text = template_review(&[], "烤肉");
        assert!(text.contains("【口味卖相】"));
        assert!(text.contains("【服务体验】"));
        assert!(text.contains("【环境氛围】"));
        assert!(text.contains("【价格水平】"));
        assert!(text.contains('#'));
    }

    #[test]
    fn detect_highlights_finds_each_category() {
        let posts = vec![
            post("这家真好吃", ""),
            post("", "环境很不错"),
            post("服务态度满分", ""),
            post("", "人均不贵很实惠"),
        ];
        assert_eq!(
            detect_highlights(&posts),
            vec!["taste", "ambience", "service", "value"]
        );
    }

    #[test]
    fn detect_highlights_empty_when_no_cues() {
        let posts = vec![post("标题", "无关内容")];
        assert!(detect_highlights(&posts).is_empty());
    }

    #[test]
    fn detect_highlights_empty_reference_list() {
        assert!(detect_highlights(&[]).is_empty());
    }
}

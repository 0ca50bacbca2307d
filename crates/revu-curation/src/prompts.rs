//! Prompt assembly for the completion backends.
//!
//! Prompts are written in the language of the source content (Chinese food
//! posts). Descriptions are truncated on character boundaries — the text is
//! predominantly CJK and byte slicing would split code points.

use std::fmt::Write as _;

use revu_core::Post;

use crate::types::ImageCandidate;

/// System-role persona sent with every cloud completion.
pub(crate) const SYSTEM_PERSONA: &str = "你是一个专业的美食内容创作者和图片分析师。";

/// How many candidates the selection prompt summarizes.
pub(crate) const PROMPT_CANDIDATE_LIMIT: usize = 30;

/// Description excerpt length in the selection prompt.
const SELECTION_DESC_CHARS: usize = 100;
/// Description excerpt length in the synthesis prompt.
const SYNTHESIS_DESC_CHARS: usize = 200;

/// Build the image-selection prompt over the first
/// [`PROMPT_CANDIDATE_LIMIT`] candidates.
pub(crate) fn build_selection_prompt(
    candidates: &[ImageCandidate],
    keyword: &str,
    target: usize,
) -> String {
    let mut listing = String::new();
    for (i, candidate) in candidates.iter().take(PROMPT_CANDIDATE_LIMIT).enumerate() {
        let _ = writeln!(listing, "{}. URL: {}", i + 1, candidate.url);
        let _ = writeln!(listing, "   帖子标题: {}", candidate.post_title);
        let _ = writeln!(listing, "   点赞数: {}", candidate.liked_count);
        let _ = writeln!(
            listing,
            "   描述片段: {}...",
            truncate_chars(&candidate.post_desc, SELECTION_DESC_CHARS)
        );
        listing.push('\n');
    }

    format!(
        "作为美食图片分析专家，请从以下图片候选列表中筛选出最适合{keyword}主题的{target}张图片。\n\
         \n\
         筛选标准：\n\
         1. 图片内容与{keyword}高度相关\n\
         2. 图片质量高，构图美观\n\
         3. 能体现食物的色香味\n\
         4. 适合在美食点评平台展示\n\
         5. 图片来源帖子的点赞数较高\n\
         \n\
         候选图片信息：\n\
         {listing}\n\
         请直接返回筛选出的图片URL列表，每行一个URL，不需要其他解释。"
    )
}

/// Build the review-synthesis prompt over the reference posts.
pub(crate) fn build_synthesis_prompt(
    posts: &[Post],
    keyword: &str,
    selected_count: usize,
) -> String {
    let mut listing = String::new();
    for (i, post) in posts.iter().enumerate() {
        let _ = writeln!(listing, "{}. 标题: {}", i + 1, post.title);
        let _ = writeln!(
            listing,
            "   描述: {}...",
            truncate_chars(&post.desc, SYNTHESIS_DESC_CHARS)
        );
        let _ = writeln!(listing, "   点赞数: {}", post.liked_count);
        listing.push('\n');
    }

    format!(
        "你是一位优秀的美食探店达人，请帮我写一篇针对{keyword}餐厅的美食测评。\n\
         \n\
         要求：\n\
         1. 请从口味卖相、服务、环境、价格的方面去做点评\n\
         2. 可以用一些表情符号，但是不要用-和**等格式符号\n\
         3. 要求200-300字左右\n\
         4. 写出一个特别有画面感的标题\n\
         5. 语言风格要真实自然，符合点评平台用户的习惯\n\
         \n\
         参考信息（来自高点赞帖子）：\n\
         {listing}\n\
         已筛选的图片数量：{selected_count}张精美图片\n\
         \n\
         请生成一篇完整的测评文案，包含标题和正文："
    )
}

/// Truncate to at most `max` characters, never splitting a code point.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

// ==========================================
// 运动目录数据整合工具 - 页面解析器
// ==========================================
// 职责: 列表页提取详情链接 / 详情页提取运动字段
// 字段来源: og:title / meta description / og:image:secure_url / 首个 <ol>
// ==========================================

use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::scraper::error::{ScrapeError, ScrapeResult};

/// 详情页解析结果（尚未编号）
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedExercise {
    pub name: String,
    pub category: String,
    pub image: String,
    pub content: Option<String>,
}

/// 收集列表页中指向详情页的链接
///
/// 取所有以 prefix 开头的 <a href>,按首次出现顺序去重
pub fn collect_detail_links(listing_html: &str, prefix: &str) -> ScrapeResult<Vec<String>> {
    let doc = Html::parse_document(listing_html);
    let anchors = selector("a[href]")?;

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for el in doc.select(&anchors) {
        if let Some(href) = el.value().attr("href") {
            if href.starts_with(prefix) && seen.insert(href.to_string()) {
                links.push(href.to_string());
            }
        }
    }
    Ok(links)
}

/// 解析详情页
///
/// - 名称: og:title 按 '-' 分割取首段去空白
/// - 分类: meta description 按 '|' 分割取首段去空白
/// - 图片: og:image:secure_url 去扩展名,拼成 "{base}.png,{base}.gif"
/// - 说明: 首个 <ol> 的各 <li> 文本去空白后用 " | " 连接,无 <ol> 为空
pub fn parse_detail(url: &str, html: &str) -> ScrapeResult<ScrapedExercise> {
    let doc = Html::parse_document(html);

    let title = meta_content(&doc, "meta[property=\"og:title\"]")?
        .ok_or_else(|| missing(url, "og:title"))?;
    let name = title
        .split('-')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    if name.is_empty() {
        return Err(missing(url, "og:title"));
    }

    let description = meta_content(&doc, "meta[name=\"description\"]")?
        .ok_or_else(|| missing(url, "description"))?;
    let category = description
        .split('|')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    if category.is_empty() {
        return Err(missing(url, "description"));
    }

    let image_url = meta_content(&doc, "meta[property=\"og:image:secure_url\"]")?
        .ok_or_else(|| missing(url, "og:image:secure_url"))?;
    // 去扩展名,png 与 gif 两个变体拼为一列
    let image_base = match image_url.rsplit_once('.') {
        Some((base, _ext)) => base.to_string(),
        None => image_url,
    };
    let image = format!("{0}.png,{0}.gif", image_base);

    let content = first_ol_steps(&doc)?;

    Ok(ScrapedExercise {
        name,
        category,
        image,
        content,
    })
}

/// 首个 <ol> 的步骤文本,用 " | " 连接
fn first_ol_steps(doc: &Html) -> ScrapeResult<Option<String>> {
    let ol = selector("ol")?;
    let li = selector("li")?;

    let Some(list) = doc.select(&ol).next() else {
        return Ok(None);
    };

    let steps: Vec<String> = list
        .select(&li)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();

    if steps.is_empty() {
        return Ok(None);
    }
    Ok(Some(steps.join(" | ")))
}

fn meta_content(doc: &Html, css: &str) -> ScrapeResult<Option<String>> {
    let sel = selector(css)?;
    Ok(doc
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.to_string()))
}

fn selector(css: &str) -> ScrapeResult<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::Other(anyhow::anyhow!("CSS 选择器无效 {}: {:?}", css, e)))
}

fn missing(url: &str, field: &str) -> ScrapeError {
    ScrapeError::MissingField {
        url: url.to_string(),
        field: field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_HTML: &str = r#"<html><head>
        <meta property="og:title" content="바벨 스쿼트 - 번핏" />
        <meta name="description" content="하체 | 바벨을 이용한 대표 하체 운동" />
        <meta property="og:image:secure_url" content="https://cdn.example.com/squat.jpg" />
        </head><body>
        <ol><li> 바르게 선다 </li><li>무릎을 굽힌다</li><li>일어선다</li></ol>
        </body></html>"#;

    #[test]
    fn test_parse_detail_extracts_all_fields() {
        let page = parse_detail("https://burnfit.io/x", DETAIL_HTML).unwrap();

        assert_eq!(page.name, "바벨 스쿼트");
        assert_eq!(page.category, "하체");
        assert_eq!(
            page.image,
            "https://cdn.example.com/squat.png,https://cdn.example.com/squat.gif"
        );
        assert_eq!(
            page.content.as_deref(),
            Some("바르게 선다 | 무릎을 굽힌다 | 일어선다")
        );
    }

    #[test]
    fn test_parse_detail_no_ol_gives_empty_content() {
        let html = r#"<html><head>
            <meta property="og:title" content="런지 - 번핏" />
            <meta name="description" content="하체 | 설명" />
            <meta property="og:image:secure_url" content="https://cdn.example.com/l.jpg" />
            </head><body></body></html>"#;

        let page = parse_detail("https://burnfit.io/x", html).unwrap();
        assert_eq!(page.content, None);
    }

    #[test]
    fn test_parse_detail_missing_title_fails() {
        let html = r#"<html><head>
            <meta name="description" content="하체 | 설명" />
            </head></html>"#;

        let result = parse_detail("https://burnfit.io/x", html);
        assert!(matches!(
            result,
            Err(ScrapeError::MissingField { ref field, .. }) if field == "og:title"
        ));
    }

    #[test]
    fn test_collect_detail_links_dedup_preserves_order() {
        let html = r#"<html><body>
            <a href="https://burnfit.io/라이브러리/squat">a</a>
            <a href="https://burnfit.io/blog/other">b</a>
            <a href="https://burnfit.io/라이브러리/lunge">c</a>
            <a href="https://burnfit.io/라이브러리/squat">d</a>
            </body></html>"#;

        let links = collect_detail_links(html, "https://burnfit.io/라이브러리/").unwrap();
        assert_eq!(
            links,
            vec![
                "https://burnfit.io/라이브러리/squat",
                "https://burnfit.io/라이브러리/lunge",
            ]
        );
    }
}

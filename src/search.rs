use eyre::Result;
use log::{debug, error};
use reqwest::Url;
use scraper::{Html, Selector};

const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// URL substrings that mark a result as a playable video link
const VIDEO_MARKERS: [&str; 3] = ["watch?v=", "youtu.be/", "youtube.com/shorts/"];

/// Bias the search toward YouTube video results
pub fn expand_query(query: &str) -> String {
    format!("{query} youtube")
}

/// Substring check only, not a URL parse; tolerates markers in odd positions
pub fn is_video_url(url: &str) -> bool {
    VIDEO_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Search the web for videos matching `query`.
///
/// Returns up to `limit` result URLs filtered to likely video links, in
/// provider order. Provider failures are logged and collapse to an empty
/// list rather than propagating.
pub async fn search_videos(client: &reqwest::Client, query: &str, limit: usize) -> Vec<String> {
    let expanded = expand_query(query);
    debug!("Searching for {expanded:?} (limit {limit})");

    let html = match fetch_results_page(client, &expanded).await {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error performing video search: {e}");
            error!("Search request failed: {e}");
            return Vec::new();
        }
    };

    parse_result_urls(&html, limit)
        .into_iter()
        .filter(|url| is_video_url(url))
        .collect()
}

async fn fetch_results_page(client: &reqwest::Client, query: &str) -> Result<String> {
    let text = client
        .get(SEARCH_ENDPOINT)
        // kp=-2 disables safe search
        .query(&[("q", query), ("kp", "-2")])
        .header("User-Agent", crate::transcript::USER_AGENT)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(text)
}

/// Pull result-anchor targets out of the search page, capped at `limit`
fn parse_result_urls(html: &str, limit: usize) -> Vec<String> {
    let selector = Selector::parse("a.result__a").unwrap();
    let doc = Html::parse_document(html);
    doc.select(&selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(resolve_redirect)
        .take(limit)
        .collect()
}

/// DuckDuckGo wraps result links in a redirect; the target rides in the `uddg` param
fn resolve_redirect(href: &str) -> Option<String> {
    if !href.contains("uddg=") {
        return Some(href.to_string());
    }

    let absolute = match href.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => href.to_string(),
    };
    let url = Url::parse(&absolute).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "uddg")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_query() {
        assert_eq!(expand_query("lofi beats"), "lofi beats youtube");
    }

    #[test]
    fn test_expand_query_empty() {
        assert_eq!(expand_query(""), " youtube");
    }

    #[test]
    fn test_is_video_url_watch() {
        assert!(is_video_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=5s"));
    }

    #[test]
    fn test_is_video_url_short_domain() {
        assert!(is_video_url("https://youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_is_video_url_shorts() {
        assert!(is_video_url("https://www.youtube.com/shorts/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_is_video_url_rejects_channel_page() {
        assert!(!is_video_url("https://www.youtube.com/@somechannel"));
        assert!(!is_video_url("https://example.com/video"));
    }

    #[test]
    fn test_resolve_redirect_wrapped() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3DdQw4w9WgXcQ&rut=abc123";
        assert_eq!(
            resolve_redirect(href).as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_resolve_redirect_direct_link() {
        let href = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
        assert_eq!(resolve_redirect(href).as_deref(), Some(href));
    }

    fn results_page(hrefs: &[&str]) -> String {
        let anchors: String = hrefs
            .iter()
            .map(|h| format!(r#"<div class="result"><a class="result__a" href="{h}">title</a></div>"#))
            .collect();
        format!("<html><body><div id=\"links\">{anchors}</div></body></html>")
    }

    #[test]
    fn test_parse_result_urls_preserves_order() {
        let html = results_page(&[
            "https://www.youtube.com/watch?v=aaaaaaaaaaa",
            "https://youtu.be/bbbbbbbbbbb",
        ]);
        let urls = parse_result_urls(&html, 10);
        assert_eq!(
            urls,
            vec![
                "https://www.youtube.com/watch?v=aaaaaaaaaaa".to_string(),
                "https://youtu.be/bbbbbbbbbbb".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_result_urls_ignores_other_anchors() {
        let html = r#"<html><body>
            <a href="https://example.com/nav">nav</a>
            <a class="result__a" href="https://youtu.be/ccccccccccc">title</a>
        </body></html>"#;
        let urls = parse_result_urls(html, 10);
        assert_eq!(urls, vec!["https://youtu.be/ccccccccccc".to_string()]);
    }

    #[test]
    fn test_parse_result_urls_respects_limit() {
        let html = results_page(&[
            "https://youtu.be/aaaaaaaaaaa",
            "https://youtu.be/bbbbbbbbbbb",
            "https://youtu.be/ccccccccccc",
        ]);
        let urls = parse_result_urls(&html, 2);
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], "https://youtu.be/aaaaaaaaaaa");
    }

    #[test]
    fn test_parse_result_urls_unwraps_redirects() {
        let html = results_page(&[
            "//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.youtube.com%2Fshorts%2FdQw4w9WgXcQ&rut=xyz",
        ]);
        let urls = parse_result_urls(&html, 10);
        assert_eq!(urls, vec!["https://www.youtube.com/shorts/dQw4w9WgXcQ".to_string()]);
    }
}

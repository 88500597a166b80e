//! HTML parser for extracting per-model detail links
//!
//! This is the only part of the crawler that depends on the remote site's
//! markup structure, so it is kept as a pure function from raw HTML to an
//! ordered list of (model, bundle URL) pairs.

use scraper::{Html, Selector};

/// One per-model detail link extracted from a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelLink {
    /// The link's visible text, whitespace-trimmed; may be empty
    pub model: String,

    /// Absolute URL of the model's document bundle
    pub bundle_url: String,
}

/// Extracts model detail links from listing page markup
///
/// # Link Selection Rules
///
/// **Include** anchors whose (trimmed) href starts with `/{make}/{year}/`,
/// with the make in its percent-encoded form.
///
/// **Exclude** anchors whose href ends with `/bundle/`, since those are the
/// listing page's own self-referential bundle links, not per-model detail
/// links.
///
/// For each surviving anchor, the bundle URL is the base URL plus the literal
/// segment `/bundle` plus the anchor's own relative href.
///
/// Output preserves document order; nothing is deduplicated or sorted, and
/// empty link text is kept as an empty model name. The function is
/// deterministic: the same markup always yields the same sequence.
///
/// # Example
///
/// ```
/// use charm_manifest::crawler::extract_model_links;
///
/// let html = r#"<html><body><a href="/Toyota/2006/camry-le/">Camry LE</a></body></html>"#;
/// let links = extract_model_links(html, "https://charm.li", "Toyota", 2006);
/// assert_eq!(links[0].model, "Camry LE");
/// assert_eq!(links[0].bundle_url, "https://charm.li/bundle/Toyota/2006/camry-le/");
/// ```
pub fn extract_model_links(html: &str, base_url: &str, make: &str, year: u16) -> Vec<ModelLink> {
    let document = Html::parse_document(html);
    let prefix = format!("/{}/{}/", make, year);
    let mut links = Vec::new();

    // "a[href]" is a valid selector; parse failure is impossible here
    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return links;
    };

    for element in document.select(&anchor_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim();

        if !href.starts_with(&prefix) || href.ends_with("/bundle/") {
            continue;
        }

        let model = element.text().collect::<String>().trim().to_string();
        let bundle_url = format!("{}/bundle{}", base_url, href);

        links.push(ModelLink { model, bundle_url });
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://charm.li";

    #[test]
    fn test_extract_single_detail_link() {
        let html = r#"<html><body><a href="/Toyota/2006/camry-le/">Camry LE</a></body></html>"#;
        let links = extract_model_links(html, BASE, "Toyota", 2006);
        assert_eq!(
            links,
            vec![ModelLink {
                model: "Camry LE".to_string(),
                bundle_url: "https://charm.li/bundle/Toyota/2006/camry-le/".to_string(),
            }]
        );
    }

    #[test]
    fn test_excludes_bundle_suffixed_anchor() {
        let html = r#"
            <html><body>
                <a href="/Toyota/2006/camry-le/">Camry LE</a>
                <a href="/Toyota/2006/bundle/">Download all</a>
            </body></html>
        "#;
        let links = extract_model_links(html, BASE, "Toyota", 2006);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].model, "Camry LE");
    }

    #[test]
    fn test_excludes_links_outside_prefix() {
        let html = r#"
            <html><body>
                <a href="/Toyota/2005/corolla/">Wrong year</a>
                <a href="/Honda/2006/civic/">Wrong make</a>
                <a href="/about/">Site link</a>
                <a href="https://elsewhere.example/Toyota/2006/x/">Absolute</a>
            </body></html>
        "#;
        let links = extract_model_links(html, BASE, "Toyota", 2006);
        assert!(links.is_empty());
    }

    #[test]
    fn test_preserves_document_order_without_dedup() {
        let html = r#"
            <html><body>
                <a href="/Toyota/2006/camry-le/">Camry LE</a>
                <a href="/Toyota/2006/corolla-s/">Corolla S</a>
                <a href="/Toyota/2006/camry-le/">Camry LE</a>
            </body></html>
        "#;
        let links = extract_model_links(html, BASE, "Toyota", 2006);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0], links[2]);
        assert_eq!(links[1].model, "Corolla S");
    }

    #[test]
    fn test_empty_link_text_yields_empty_model() {
        let html = r#"<html><body><a href="/Toyota/2006/unnamed/"></a></body></html>"#;
        let links = extract_model_links(html, BASE, "Toyota", 2006);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].model, "");
        assert_eq!(
            links[0].bundle_url,
            "https://charm.li/bundle/Toyota/2006/unnamed/"
        );
    }

    #[test]
    fn test_link_text_is_trimmed() {
        let html = r#"<html><body><a href="/Toyota/2006/camry-le/">  Camry LE  </a></body></html>"#;
        let links = extract_model_links(html, BASE, "Toyota", 2006);
        assert_eq!(links[0].model, "Camry LE");
    }

    #[test]
    fn test_href_is_trimmed_before_matching() {
        let html = r#"<html><body><a href=" /Toyota/2006/camry-le/ ">Camry LE</a></body></html>"#;
        let links = extract_model_links(html, BASE, "Toyota", 2006);
        assert_eq!(links.len(), 1);
        assert_eq!(
            links[0].bundle_url,
            "https://charm.li/bundle/Toyota/2006/camry-le/"
        );
    }

    #[test]
    fn test_encoded_make_prefix() {
        let html = r#"<html><body><a href="/Dodge%20and%20Ram/1999/ram-1500/">Ram 1500</a></body></html>"#;
        let links = extract_model_links(html, BASE, "Dodge%20and%20Ram", 1999);
        assert_eq!(links.len(), 1);
        assert_eq!(
            links[0].bundle_url,
            "https://charm.li/bundle/Dodge%20and%20Ram/1999/ram-1500/"
        );
    }

    #[test]
    fn test_deterministic_on_same_markup() {
        let html = r#"
            <html><body>
                <a href="/Toyota/2006/camry-le/">Camry LE</a>
                <a href="/Toyota/2006/corolla-s/">Corolla S</a>
            </body></html>
        "#;
        let first = extract_model_links(html, BASE, "Toyota", 2006);
        let second = extract_model_links(html, BASE, "Toyota", 2006);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_markup_yields_no_links() {
        assert!(extract_model_links("", BASE, "Toyota", 2006).is_empty());
        assert!(extract_model_links("<html></html>", BASE, "Toyota", 2006).is_empty());
    }
}

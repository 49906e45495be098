//! HTML content extraction
//!
//! This module turns a fetched HTML page into structured content:
//! - Meta description (captured before boilerplate removal)
//! - Boilerplate removal (headers, navigation, menus, footers, scripts, comments)
//! - Page title
//! - Headings, list items and text paragraphs in document order
//! - Outbound links, image sources and PDF links for the media extractors

use crate::crawler::sanitize::{clean_text, sanitize_title, NO_TITLE};
use crate::output::{BlockKind, ContentBlock};
use crate::url::{is_pdf_link, is_svg_link, resolve_url, NormalizedUrl};
use scraper::{ElementRef, Html, Node, Selector};
use thiserror::Error;
use url::Url;

/// Elements removed from the page, subtree included, before content is read
///
/// Header and banner blocks, navigation and menus, the footer, and every
/// non-content element (`meta`, `script`, `style`, `noscript`, `iframe`,
/// `link`, `svg`).
const BOILERPLATE_SELECTOR: &str = "header, [role=\"banner\"], \
    .header, .site-header, .main-header, .global-header, \
    .header-nav, .header-menu, .header-wrapper, \
    #header, #site-header, #main-header, #global-header, \
    #header-nav, #header-menu, #header-wrapper, \
    nav, #global-nav, #gnav, .global-nav, .menu, .nav, #footer, \
    meta, script, style, noscript, iframe, link, svg";

/// Errors raised while extracting content from a page
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// Everything read from one HTML page
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    /// Sanitized title, or `no_title` when the page has none
    pub title: String,

    /// Trimmed meta description, when present and non-empty
    pub description: Option<String>,

    /// Content blocks in document order
    pub blocks: Vec<ContentBlock>,

    /// Every `a[href]` that resolves to an HTTP(S) URL, normalized, in page order
    pub links: Vec<NormalizedUrl>,

    /// Absolute image URLs (SVG excluded) for text recognition
    pub image_urls: Vec<String>,

    /// Absolute URLs of linked PDF files
    pub pdf_urls: Vec<String>,
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::Selector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Extracts structured content from an HTML page
///
/// The meta description is read first, then boilerplate is stripped, and all
/// remaining reads (title, blocks, links, media) see the stripped tree.
///
/// # Example
///
/// ```
/// use sitescribe::crawler::extract_page;
/// use url::Url;
///
/// let html = r#"<html><head><title>Home</title></head>
///     <body><nav><a href="/menu">Menu</a></nav><main><h1>Welcome</h1></main></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let page = extract_page(html, &base_url).unwrap();
/// assert_eq!(page.title, "Home");
/// assert!(page.links.is_empty());
/// ```
pub fn extract_page(html: &str, base_url: &Url) -> Result<PageContent, ExtractError> {
    let mut document = Html::parse_document(html);

    let description = extract_description(&document)?;
    strip_boilerplate(&mut document)?;

    let title = extract_title(&document)?;
    let blocks = extract_blocks(&document)?;
    let links = collect_links(&document, base_url)?;
    let image_urls = collect_image_urls(&document, base_url)?;
    let pdf_urls = collect_pdf_urls(&document, base_url)?;

    Ok(PageContent {
        title,
        description,
        blocks,
        links,
        image_urls,
        pdf_urls,
    })
}

/// Extracts only the outbound links of a page, without removing boilerplate
///
/// Used by the URL inventory, which wants every link including navigation.
pub fn extract_links(html: &str, base_url: &Url) -> Result<Vec<NormalizedUrl>, ExtractError> {
    let document = Html::parse_document(html);
    collect_links(&document, base_url)
}

fn extract_description(document: &Html) -> Result<Option<String>, ExtractError> {
    let selector = parse_selector("meta[name=\"description\"]")?;

    Ok(document
        .root_element()
        .select(&selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| clean_text(content.trim()))
        .filter(|content| !content.is_empty()))
}

/// Detaches boilerplate elements and comment nodes from the tree
fn strip_boilerplate(document: &mut Html) -> Result<(), ExtractError> {
    let selector = parse_selector(BOILERPLATE_SELECTOR)?;

    // Never matches the root element itself, so the tree keeps its <html>
    let mut doomed: Vec<_> = document
        .root_element()
        .select(&selector)
        .map(|element| element.id())
        .collect();
    doomed.extend(
        document
            .tree
            .root()
            .descendants()
            .filter(|node| node.value().is_comment())
            .map(|node| node.id()),
    );

    for id in doomed {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    Ok(())
}

fn extract_title(document: &Html) -> Result<String, ExtractError> {
    let selector = parse_selector("title")?;

    let title = match document.root_element().select(&selector).next() {
        Some(element) => stripped_text(element),
        None => NO_TITLE.to_string(),
    };

    Ok(clean_text(&sanitize_title(&title)))
}

/// Walks the content root in document order and emits one block per match
///
/// The content root is the first `<main>` element, or the whole document.
/// Text nodes emit paragraphs wherever they sit, so the text of a heading or
/// list item also appears as a paragraph right after its own block.
fn extract_blocks(document: &Html) -> Result<Vec<ContentBlock>, ExtractError> {
    let main_selector = parse_selector("main")?;

    let root = match document.root_element().select(&main_selector).next() {
        Some(main) => *main,
        None => document.tree.root(),
    };

    let mut blocks = Vec::new();

    for node in root.descendants() {
        match node.value() {
            Node::Element(element) => {
                let kind = match element.name() {
                    "h1" => BlockKind::Heading(1),
                    "h2" => BlockKind::Heading(2),
                    "h3" => BlockKind::Heading(3),
                    "h4" => BlockKind::Heading(4),
                    "h5" => BlockKind::Heading(5),
                    "h6" => BlockKind::Heading(6),
                    "li" => BlockKind::Bullet,
                    _ => continue,
                };

                if let Some(element_ref) = ElementRef::wrap(node) {
                    push_block(&mut blocks, kind, &stripped_text(element_ref));
                }
            }
            Node::Text(text) => push_block(&mut blocks, BlockKind::Paragraph, text.trim()),
            _ => {}
        }
    }

    Ok(blocks)
}

fn push_block(blocks: &mut Vec<ContentBlock>, kind: BlockKind, text: &str) {
    let text = clean_text(text);
    if !text.is_empty() {
        blocks.push(ContentBlock { kind, text });
    }
}

/// Concatenates the trimmed text fragments of an element
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn collect_links(document: &Html, base_url: &Url) -> Result<Vec<NormalizedUrl>, ExtractError> {
    let selector = parse_selector("a[href]")?;

    Ok(document
        .root_element()
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| resolve_url(href, base_url).ok())
        .collect())
}

fn collect_image_urls(document: &Html, base_url: &Url) -> Result<Vec<String>, ExtractError> {
    let selector = parse_selector("img[src]")?;

    Ok(document
        .root_element()
        .select(&selector)
        .filter_map(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty())
        .filter_map(|src| base_url.join(src).ok())
        .map(|url| url.to_string())
        .filter(|url| !is_svg_link(url))
        .collect())
}

fn collect_pdf_urls(document: &Html, base_url: &Url) -> Result<Vec<String>, ExtractError> {
    let selector = parse_selector("a[href]")?;

    Ok(document
        .root_element()
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| is_pdf_link(href))
        .filter_map(|href| base_url.join(href).ok())
        .map(|url| url.to_string())
        .collect())
}

use newswatch_core::Article;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid title selector: {0}")]
    InvalidSelector(String),
    #[error("no element matched title selector {0:?}")]
    TitleMarkerMissing(String),
    #[error("title element has no enclosing link")]
    LinkMissing,
    #[error("link element has no usable href")]
    HrefMissing,
    #[error("extracted title is empty")]
    EmptyTitle,
    #[error("could not resolve article link {0:?}")]
    UnresolvableLink(String),
}

/// Extract the newest article from a news-listing page.
///
/// Finds the first element matching `title_selector`, walks up to its
/// enclosing `<a>`, and returns the trimmed title text together with the
/// link href resolved against `base_url`.
pub fn latest_article(
    html: &str,
    base_url: &Url,
    title_selector: &str,
) -> Result<Article, ExtractError> {
    let selector = Selector::parse(title_selector)
        .map_err(|err| ExtractError::InvalidSelector(err.to_string()))?;

    let doc = Html::parse_document(html);
    let title_element = doc
        .select(&selector)
        .next()
        .ok_or_else(|| ExtractError::TitleMarkerMissing(title_selector.to_string()))?;
    let anchor = enclosing_anchor(title_element).ok_or(ExtractError::LinkMissing)?;

    let title = title_element.text().collect::<String>().trim().to_string();
    if title.is_empty() {
        return Err(ExtractError::EmptyTitle);
    }

    let href = anchor
        .value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .ok_or(ExtractError::HrefMissing)?;
    let url =
        resolve_url(href, base_url).ok_or_else(|| ExtractError::UnresolvableLink(href.to_string()))?;

    Ok(Article::new(title, url))
}

fn enclosing_anchor(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|candidate| candidate.value().name().eq_ignore_ascii_case("a"))
}

fn resolve_url(reference: &str, base: &Url) -> Option<String> {
    if let Ok(url) = Url::parse(reference) {
        return Some(url.into());
    }
    base.join(reference).ok().map(String::from)
}

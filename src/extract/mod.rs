pub mod strategy;

#[cfg(test)]
mod tests;

use scraper::{ElementRef, Html, Node, Selector};

use crate::fetch::PageFetcher;
use crate::results::{EntryRecord, LinkRecord};
use strategy::{DescriptionStrategy, TitleStrategy};

/// Heading text that terminates description capture
pub const REFERENCES_MARKER: &str = "Литература";

/// Sentinel title when the fallback chain finds nothing
pub const TITLE_NOT_FOUND: &str = "Заголовок не найден";

/// Sentinel description when the page yields no text
pub const DESCRIPTION_NOT_FOUND: &str = "Описание не найдено";

/// Element names whose text never counts as page content
const EXCLUDED_TAGS: [&str; 5] = ["script", "style", "nav", "header", "footer"];

/// Fetch a detail page and extract one entry record.
///
/// Returns None when the fetch fails; the failure is logged and the caller
/// moves on to the next link.
pub async fn extract_entry(
    fetcher: &PageFetcher,
    link: &LinkRecord,
    title_strategy: TitleStrategy,
    description_strategy: DescriptionStrategy,
) -> Option<EntryRecord> {
    let html = match fetcher.fetch(&link.url).await {
        Ok(html) => html,
        Err(e) => {
            ::log::warn!("Skipping page {}: {}", link.url, e);
            return None;
        }
    };

    Some(entry_from_html(
        &html,
        link,
        title_strategy,
        description_strategy,
    ))
}

/// Build an entry record from already-fetched detail page HTML.
///
/// Extraction never fails: missing titles and descriptions degrade to empty
/// or sentinel strings according to the selected strategies.
pub fn entry_from_html(
    html: &str,
    link: &LinkRecord,
    title_strategy: TitleStrategy,
    description_strategy: DescriptionStrategy,
) -> EntryRecord {
    let doc = Html::parse_document(html);
    let title = pick_title(&doc, title_strategy);
    let description = pick_description(&doc, &title, description_strategy);

    EntryRecord {
        url: link.url.clone(),
        link_text: link.link_text.clone(),
        title,
        description,
    }
}

/// Locate the entry title according to the strategy
fn pick_title(doc: &Html, strategy: TitleStrategy) -> String {
    match strategy {
        TitleStrategy::HeadingThenCell => {
            let title = first_text(doc, "h1");
            if !title.is_empty() {
                return title;
            }
            first_text(doc, "td")
        }
        TitleStrategy::AnyHeadingThenDocTitle => {
            let title = collapse_whitespace(&first_text(doc, "h1, h2, h3"));
            if !title.is_empty() {
                return title;
            }
            let title = collapse_whitespace(&first_text(doc, "title"));
            if title.is_empty() {
                TITLE_NOT_FOUND.to_string()
            } else {
                title
            }
        }
    }
}

/// Extract the description region according to the strategy
fn pick_description(doc: &Html, title: &str, strategy: DescriptionStrategy) -> String {
    match strategy {
        DescriptionStrategy::UntilReferences => description_until_references(doc, title),
        DescriptionStrategy::FullBody => full_body_description(doc),
    }
}

/// Single linear scan over all elements in document order with a capture flag.
///
/// Per element visit the order of checks is fixed: the "Литература" h4 stops
/// the scan, then captured p/td text is accumulated, then the h1 (or the td
/// matching the title) turns capture on. The element that turns capture on
/// therefore contributes no text in its own visit.
fn description_until_references(doc: &Html, title: &str) -> String {
    let all = Selector::parse("*").unwrap();
    let mut fragments: Vec<String> = Vec::new();
    let mut capturing = false;

    for element in doc.select(&all) {
        let name = element.value().name();
        let text = trimmed_text(&element);

        if name == "h4" && text == REFERENCES_MARKER {
            break;
        }
        if capturing
            && (name == "p" || name == "td")
            && !text.is_empty()
            && text != REFERENCES_MARKER
        {
            fragments.push(text.clone());
        }
        if name == "h1" || (name == "td" && !title.is_empty() && text == title) {
            capturing = true;
        }
    }

    flatten(&fragments.join(" "))
}

/// Whole-page description: the `#text` container when present, otherwise the
/// body, with chrome elements excluded
fn full_body_description(doc: &Html) -> String {
    let text_selector = Selector::parse("#text").unwrap();
    let body_selector = Selector::parse("body").unwrap();

    let root = doc
        .select(&text_selector)
        .next()
        .or_else(|| doc.select(&body_selector).next());
    let root = match root {
        Some(root) => root,
        None => return DESCRIPTION_NOT_FOUND.to_string(),
    };

    let mut raw = String::new();
    collect_visible_text(root, &mut raw);

    let text = collapse_whitespace(&raw);
    if text.is_empty() {
        DESCRIPTION_NOT_FOUND.to_string()
    } else {
        text
    }
}

/// Append the text of an element and its descendants, skipping chrome
/// elements and anything carrying the `menu` class
fn collect_visible_text(element: ElementRef, out: &mut String) {
    let value = element.value();
    if EXCLUDED_TAGS.contains(&value.name()) || value.classes().any(|class| class == "menu") {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_visible_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

/// Trimmed text of the first element matching the selector
fn first_text(doc: &Html, selector: &str) -> String {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .next()
        .map(|element| trimmed_text(&element))
        .unwrap_or_default()
}

/// Concatenated, trimmed text of an element's text nodes
fn trimmed_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Replace newlines with spaces and trim
fn flatten(text: &str) -> String {
    text.replace('\n', " ").trim().to_string()
}

/// Collapse all whitespace runs to single spaces
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Per-field extractors. Each takes one table cell and produces one field
//! of the final record.

use std::sync::OnceLock;

use ego_tree::NodeRef;
use regex::Regex;
use scraper::node::Node;
use scraper::{ElementRef, Selector};

use crate::error::ExtractError;
use crate::model::{Media, Requirement, Webpages};
use crate::report::Report;
use crate::reqs::{self, ReqKind};

fn link_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("a").unwrap())
}

fn span_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("span").unwrap())
}

fn first_link(cell: ElementRef) -> Result<ElementRef, ExtractError> {
    cell.select(link_sel())
        .next()
        .ok_or_else(|| ExtractError::MissingLink {
            snippet: cell.html(),
        })
}

/// The mod's display name: the text of the cell's link.
pub fn name_from_cell(cell: ElementRef) -> Result<String, ExtractError> {
    Ok(first_link(cell)?.text().collect())
}

/// Classify the cell's link into exactly one webpage slot.
pub fn webpages_from_cell(cell: ElementRef) -> Result<Webpages, ExtractError> {
    let link = first_link(cell)?;
    let url = link
        .value()
        .attr("href")
        .ok_or_else(|| ExtractError::MissingLink {
            snippet: cell.html(),
        })?;

    let mut pages = Webpages::empty();
    if url.contains("steamcommunity.com") {
        pages.steam = Some(url.to_string());
    } else if url.contains("nexusmods.com") {
        pages.nexus = Some(url.to_string());
    } else if url.contains("bethesda.net") {
        pages.bethesda = Some(url.to_string());
    } else {
        pages.others.push(url.to_string());
    }
    Ok(pages)
}

/// Free-text description: the cell's text with every marker span removed,
/// then requirement tags stripped. Read-only walk, the document is never
/// mutated.
pub fn description_from_cell(cell: ElementRef) -> String {
    let mut text = String::new();
    collect_text_outside_spans(*cell, &mut text);
    reqs::strip_requirement_tags(&text)
}

fn collect_text_outside_spans(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if element.name() == "span" => {}
            Node::Element(_) => collect_text_outside_spans(child, out),
            _ => {}
        }
    }
}

/// Free-text notes: marker spans whose text is not a requirement tag, with
/// the double-asterisk emphasis stripped. Document order.
pub fn notes_from_cell(cell: ElementRef) -> Vec<String> {
    cell.select(span_sel())
        .filter_map(|span| {
            let text: String = span.text().collect();
            if reqs::is_tag_text(&text) {
                return None;
            }
            Some(text.replace("**", "").trim().to_string())
        })
        .collect()
}

/// Requirements: marker spans whose first class names a known kind.
pub fn requirements_from_cell(cell: ElementRef) -> Vec<Requirement> {
    cell.select(span_sel())
        .filter_map(|span| span.value().classes().next())
        .filter_map(ReqKind::from_class)
        .map(ReqKind::to_requirement)
        .collect()
}

/// Whether the description marks the mod as superseded or abandoned.
pub fn deprecated_from_cell(cell: ElementRef) -> bool {
    static USE_INSTEAD_RE: OnceLock<Regex> = OnceLock::new();
    static UNSUPPORTED_RE: OnceLock<Regex> = OnceLock::new();
    let use_instead =
        USE_INSTEAD_RE.get_or_init(|| Regex::new(r"[Uu]se .*? instead").unwrap());
    let unsupported =
        UNSUPPORTED_RE.get_or_init(|| Regex::new(r"[Nn]o longer supported").unwrap());

    let text = cell.text().collect::<String>().replace('\n', " ");

    // "use X instead of Y" and "use X instead if Z" are not deprecations;
    // the regex crate has no lookahead, so check the text after each match.
    let superseded = use_instead.find_iter(&text).any(|m| {
        let rest = &text[m.end()..];
        !rest.starts_with(" of") && !rest.starts_with(" if")
    });
    superseded || unsupported.is_match(&text)
}

/// Classify every link in the cell as a screenshot or a video. URLs that
/// match neither pattern are dropped and reported.
pub fn media_from_cell(cell: ElementRef, report: &mut Report) -> Media {
    static IMAGE_RE: OnceLock<Regex> = OnceLock::new();
    static VIDEO_RE: OnceLock<Regex> = OnceLock::new();
    let image = IMAGE_RE.get_or_init(|| Regex::new(r"(?:png|jpe?g|gif|resizedimage)$").unwrap());
    let video =
        VIDEO_RE.get_or_init(|| Regex::new(r"(?:youtube|youtu\.be|ajax%2Fmodvideo)").unwrap());

    let mut images = Vec::new();
    let mut videos = Vec::new();
    for link in cell.select(link_sel()) {
        let Some(url) = link.value().attr("href") else {
            continue;
        };
        if image.is_match(url) {
            images.push(url.to_string());
        } else if video.is_match(url) {
            videos.push(url.to_string());
        } else {
            report.unknown_media(url);
        }
    }
    Media { images, videos }
}

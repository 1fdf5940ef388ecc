// src/extractors/contact.rs
use super::cases::element_text;
use super::PageExtractor;
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;

// Only the leading site-meta blocks carry contact details; later ones are UI chrome
const CONTACT_META_NODES: usize = 3;

static SITE_META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.site-meta").expect("Failed to compile SITE_META_SELECTOR"));
static BLINKING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.blinking").expect("Failed to compile BLINKING_SELECTOR"));
static STRONG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("strong").expect("Failed to compile STRONG_SELECTOR"));
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("Failed to compile ANCHOR_SELECTOR"));

// Payload starts at the first capital letter and runs to the end of that line
static PAYLOAD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z].*").expect("Failed to compile PAYLOAD_RE"));
static HELPLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+[0-9].*-[0-9].*-[0-9].*$").expect("Failed to compile HELPLINE_RE"));
static TOLLFREE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9].*$").expect("Failed to compile TOLLFREE_RE"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+").expect("Failed to compile EMAIL_RE")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub helpline: String,
    pub tollfree: String,
    pub email: String,
    pub technical_query_email: String,
}

impl PageExtractor {
    /// Reads helpline, toll-free number and both e-mail addresses.
    /// Either all four are found or the whole extraction fails.
    pub fn extract_contact_info(&self, html_content: &str) -> Result<ContactInfo, ExtractError> {
        let document = Html::parse_document(html_content);

        let meta_nodes: Vec<_> = document.select(&SITE_META_SELECTOR).collect();
        if meta_nodes.len() < CONTACT_META_NODES {
            return Err(ExtractError::TooFewNodes {
                marker: "div.site-meta".to_string(),
                expected: CONTACT_META_NODES,
                found: meta_nodes.len(),
            });
        }

        let payloads = meta_nodes
            .into_iter()
            .take(CONTACT_META_NODES)
            .map(|node| first_match(&PAYLOAD_RE, &element_text(node), "site-meta payload"))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Contact payloads: {:?}", payloads);

        Ok(ContactInfo {
            helpline: first_match(&HELPLINE_RE, &payloads[0], "helpline")?,
            tollfree: first_match(&TOLLFREE_RE, &payloads[1], "tollfree")?,
            email: first_match(&EMAIL_RE, &payloads[2], "email")?,
            technical_query_email: technical_query_email(&document)?,
        })
    }
}

fn first_match(re: &Regex, text: &str, field: &'static str) -> Result<String, ExtractError> {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ExtractError::PatternMismatch { field, text: text.trim().to_string() })
}

/// `span.blinking` > `strong` > `a`, every link required.
fn technical_query_email(document: &Html) -> Result<String, ExtractError> {
    let blinking = document
        .select(&BLINKING_SELECTOR)
        .next()
        .ok_or_else(|| ExtractError::NodeNotFound("span.blinking".to_string()))?;
    let strong = blinking
        .select(&STRONG_SELECTOR)
        .next()
        .ok_or_else(|| ExtractError::NodeNotFound("span.blinking strong".to_string()))?;
    let anchor = strong
        .select(&ANCHOR_SELECTOR)
        .next()
        .ok_or_else(|| ExtractError::NodeNotFound("span.blinking strong a".to_string()))?;

    let email = element_text(anchor).trim().to_string();
    if email.is_empty() {
        return Err(ExtractError::LabelNotFound("span.blinking strong a".to_string()));
    }
    Ok(email)
}

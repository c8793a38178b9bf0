//! Structural SVG optimization.
//!
//! A streaming rewrite of rendered diagram markup: comments, doctype
//! declarations, processing instructions, `<metadata>` subtrees and
//! inter-element whitespace are dropped. Whitespace inside text-bearing
//! elements is kept untouched, which also fixes text-node positioning
//! glitches some display surfaces exhibit when renderers emit padded
//! text nodes.
//!
//! Id cleanup (renumbering identifiers to short reused names) exists as a
//! profile option but is off by default: multiple diagrams are inlined
//! side by side into one document, and renumbered ids collide across them.

use std::collections::HashMap;
use std::fmt::Write;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::OptimizeError;

/// Elements whose text content must be preserved verbatim.
const TEXT_CONTENT_TAGS: &[&str] = &["text", "tspan", "textPath", "title", "desc", "style", "script"];

/// Optimization profile.
///
/// The default profile is the "safe" one: structural cleanup only, with
/// [`cleanup_ids`](Self::cleanup_ids) disabled so the set of identifier
/// values in the output equals the set in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeProfile {
    /// Drop XML comments.
    pub remove_comments: bool,
    /// Drop the XML declaration, doctype and processing instructions.
    pub remove_doctype: bool,
    /// Drop `<metadata>` subtrees.
    pub remove_metadata: bool,
    /// Drop whitespace-only text nodes between elements.
    pub collapse_whitespace: bool,
    /// Renumber ids to short names and rewrite `url(#...)`/`href`
    /// references. Off by default: short names repeat across diagrams
    /// inlined into the same document.
    pub cleanup_ids: bool,
}

impl Default for OptimizeProfile {
    fn default() -> Self {
        Self {
            remove_comments: true,
            remove_doctype: true,
            remove_metadata: true,
            collapse_whitespace: true,
            cleanup_ids: false,
        }
    }
}

/// Streaming SVG optimizer.
pub struct SvgOptimizer {
    profile: OptimizeProfile,
}

impl SvgOptimizer {
    /// Create an optimizer with the given profile.
    #[must_use]
    pub fn new(profile: OptimizeProfile) -> Self {
        Self { profile }
    }

    /// Create an optimizer with the default safe profile.
    #[must_use]
    pub fn safe() -> Self {
        Self::new(OptimizeProfile::default())
    }

    /// Optimize SVG markup.
    ///
    /// # Errors
    ///
    /// Returns an error if the markup cannot be parsed as XML. Callers
    /// are expected to fall back to the unoptimized markup.
    pub fn optimize(&self, svg: &str) -> Result<String, OptimizeError> {
        let id_map = if self.profile.cleanup_ids {
            collect_id_map(svg)?
        } else {
            HashMap::new()
        };

        let mut reader = Reader::from_str(svg);
        reader.config_mut().trim_text(false);

        let mut out = String::with_capacity(svg.len());
        // Stack of open element names, used to protect text content.
        let mut open: Vec<String> = Vec::new();
        // Non-zero while skipping a removed subtree.
        let mut skip_depth = 0usize;

        loop {
            let event = reader.read_event()?;
            if skip_depth > 0 {
                match event {
                    Event::Start(_) => skip_depth += 1,
                    Event::End(_) => skip_depth -= 1,
                    Event::Eof => break,
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(e) => {
                    let qname = e.name();
                    let name = reader.decoder().decode(qname.as_ref())?.into_owned();
                    if self.profile.remove_metadata && name == "metadata" {
                        skip_depth = 1;
                        continue;
                    }
                    write_element(&mut out, &reader, &e, &id_map, false)?;
                    open.push(name);
                }
                Event::Empty(e) => {
                    let qname = e.name();
                    let name = reader.decoder().decode(qname.as_ref())?;
                    if self.profile.remove_metadata && name == "metadata" {
                        continue;
                    }
                    write_element(&mut out, &reader, &e, &id_map, true)?;
                }
                Event::End(e) => {
                    open.pop();
                    let qname = e.name();
                    let name = reader.decoder().decode(qname.as_ref())?;
                    write!(out, "</{name}>").expect("writing to String cannot fail");
                }
                Event::Text(e) => {
                    let text = reader.decoder().decode(&e)?;
                    if self.profile.collapse_whitespace
                        && text.trim().is_empty()
                        && !in_text_content(&open)
                    {
                        continue;
                    }
                    out.push_str(&text);
                }
                Event::GeneralRef(e) => {
                    let entity = reader.decoder().decode(&e)?;
                    write!(out, "&{entity};").expect("writing to String cannot fail");
                }
                Event::CData(e) => {
                    let text = reader.decoder().decode(&e)?;
                    write!(out, "<![CDATA[{text}]]>").expect("writing to String cannot fail");
                }
                Event::Comment(e) => {
                    if !self.profile.remove_comments {
                        let text = reader.decoder().decode(&e)?;
                        write!(out, "<!--{text}-->").expect("writing to String cannot fail");
                    }
                }
                Event::Decl(e) => {
                    if !self.profile.remove_doctype {
                        let text = reader.decoder().decode(&e)?;
                        write!(out, "<?{text}?>").expect("writing to String cannot fail");
                    }
                }
                Event::PI(e) => {
                    if !self.profile.remove_doctype {
                        let text = reader.decoder().decode(&e)?;
                        write!(out, "<?{text}?>").expect("writing to String cannot fail");
                    }
                }
                Event::DocType(e) => {
                    if !self.profile.remove_doctype {
                        let text = reader.decoder().decode(&e)?;
                        write!(out, "<!DOCTYPE {text}>").expect("writing to String cannot fail");
                    }
                }
                Event::Eof => break,
            }
        }

        Ok(out)
    }
}

/// Serialize an element tag, rewriting id references when a rename map is
/// present.
fn write_element(
    out: &mut String,
    reader: &Reader<&[u8]>,
    e: &BytesStart,
    id_map: &HashMap<String, String>,
    self_closing: bool,
) -> Result<(), OptimizeError> {
    let qname = e.name();
    let name = reader.decoder().decode(qname.as_ref())?;
    out.push('<');
    out.push_str(&name);

    for attr in e.attributes() {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?;
        let value = reader.decoder().decode(&attr.value)?;
        let value = if id_map.is_empty() {
            value.into_owned()
        } else {
            rewrite_id_refs(&key, &value, id_map)
        };
        write!(out, r#" {key}="{value}""#).expect("writing to String cannot fail");
    }

    out.push_str(if self_closing { "/>" } else { ">" });
    Ok(())
}

/// First pass for id cleanup: map every id, in document order, to a
/// generated short name.
fn collect_id_map(svg: &str) -> Result<HashMap<String, String>, OptimizeError> {
    let mut reader = Reader::from_str(svg);
    reader.config_mut().trim_text(false);

    let mut ids = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.as_ref() == b"id" {
                        let value = reader.decoder().decode(&attr.value)?.into_owned();
                        ids.push(value);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(ids
        .into_iter()
        .enumerate()
        .map(|(i, id)| (id, short_name(i)))
        .collect())
}

/// Whether any open element protects its text content.
fn in_text_content(open: &[String]) -> bool {
    open.iter().any(|tag| TEXT_CONTENT_TAGS.contains(&tag.as_str()))
}

/// Rewrite an attribute value against the id rename map.
///
/// Handles `id="..."` declarations, `url(#...)` functional references and
/// `href`/`xlink:href` fragment references.
fn rewrite_id_refs(key: &str, value: &str, id_map: &HashMap<String, String>) -> String {
    if key == "id" {
        if let Some(renamed) = id_map.get(value) {
            return renamed.clone();
        }
        return value.to_owned();
    }

    if (key == "href" || key.ends_with(":href"))
        && let Some(target) = value.strip_prefix('#')
        && let Some(renamed) = id_map.get(target)
    {
        return format!("#{renamed}");
    }

    if value.contains("url(#") {
        let mut rewritten = value.to_owned();
        for (old, new) in id_map {
            rewritten = rewritten.replace(&format!("url(#{old})"), &format!("url(#{new})"));
        }
        return rewritten;
    }

    value.to_owned()
}

/// Generate the n-th short id name: a, b, ..., z, aa, ab, ...
fn short_name(mut n: usize) -> String {
    let mut name = String::new();
    loop {
        #[allow(clippy::cast_possible_truncation)]
        let c = (b'a' + (n % 26) as u8) as char;
        name.insert(0, c);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    name
}

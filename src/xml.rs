//! XML parsing and serialization
//!
//! Bridges between XML text and the arena [`Document`] using `xot`. Parsing
//! keeps elements, attributes and text; comments and processing instructions
//! are dropped. Element and attribute names are reduced to their local part,
//! since the legacy exports carry no namespaces.
//!
//! ## Text handling
//!
//! Text is kept in position using the text/tail model of [`Document`]: text
//! before the first child becomes the element's text, text after a child
//! becomes that child's tail. An element without element children keeps its
//! text verbatim, whitespace included. When an element has element children
//! and all of its text is whitespace, that text is the source's indentation
//! and is discarded; mixed content is kept exactly.

use xot::output::xml::{Declaration, Parameters};
use xot::output::Indentation;
use xot::{Value, Xot};

use crate::document::{Document, NodeId};

/// Parse XML text into a [`Document`] rooted at the document element
///
/// Errors are returned as plain messages; callers attach the file path.
pub fn parse_str(xml: &str) -> std::result::Result<Document, String> {
    let mut xot = Xot::new();
    let root = xot.parse(xml).map_err(|e| e.to_string())?;
    let element = xot.document_element(root).map_err(|e| e.to_string())?;

    let mut doc = Document::new(element_name(&xot, element));
    let doc_root = doc.root();
    import_element(&xot, element, &mut doc, doc_root);
    Ok(doc)
}

fn element_name(xot: &Xot, node: xot::Node) -> &str {
    match xot.element(node) {
        Some(element) => xot.local_name_str(element.name()),
        None => "",
    }
}

/// Copy attributes, text and children of `source` onto the existing `target`
fn import_element(xot: &Xot, source: xot::Node, doc: &mut Document, target: NodeId) {
    for (name, value) in xot.attributes(source).iter() {
        doc.set_attribute(target, xot.local_name_str(name), value.as_str());
    }

    // Each chunk is anchored to the element it follows; `None` is leading text
    let mut chunks: Vec<(Option<NodeId>, String)> = Vec::new();
    let mut last_element = None;
    for child in xot.children(source) {
        match xot.value(child) {
            Value::Element(element) => {
                let node = doc.append_element(target, xot.local_name_str(element.name()));
                import_element(xot, child, doc, node);
                last_element = Some(node);
            }
            Value::Text(text) => {
                if let Some(open) = chunks.last_mut().filter(|open| open.0 == last_element) {
                    open.1.push_str(text.get());
                } else {
                    chunks.push((last_element, text.get().to_string()));
                }
            }
            _ => {}
        }
    }

    let indentation_only = chunks.iter().all(|(_, chunk)| chunk.trim().is_empty());
    if last_element.is_some() && indentation_only {
        return;
    }
    for (anchor, chunk) in chunks {
        match anchor {
            Some(child) => doc.set_tail(child, chunk),
            None => doc.set_text(target, chunk),
        }
    }
}

/// Serialize a [`Document`] as indented UTF-8 XML with a declaration
pub fn to_string(doc: &Document) -> std::result::Result<String, String> {
    let mut xot = Xot::new();
    let root = export_element(&mut xot, doc, doc.root()).map_err(|e| e.to_string())?;
    let document = xot
        .new_document_with_element(root)
        .map_err(|e| e.to_string())?;

    let parameters = Parameters {
        indentation: Some(Indentation::default()),
        declaration: Some(Declaration {
            encoding: Some("UTF-8".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    xot.serialize_xml_string(parameters, document)
        .map_err(|e| e.to_string())
}

fn export_element(
    xot: &mut Xot,
    doc: &Document,
    node: NodeId,
) -> std::result::Result<xot::Node, xot::Error> {
    let name = xot.add_name(doc.name(node));
    let element = xot.new_element(name);

    for (key, value) in doc.attributes(node) {
        let key = xot.add_name(key);
        xot.attributes_mut(element).insert(key, value.to_string());
    }

    if let Some(text) = doc.text(node).filter(|t| !t.is_empty()) {
        xot.append_text(element, text)?;
    }

    for &child in doc.children(node) {
        let exported = export_element(xot, doc, child)?;
        xot.append(element, exported)?;
        if let Some(tail) = doc.tail(child).filter(|t| !t.is_empty()) {
            xot.append_text(element, tail)?;
        }
    }

    Ok(element)
}

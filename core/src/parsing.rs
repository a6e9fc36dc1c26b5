use crate::error::ParseError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::debug;

const TAG_ELEMENT: &[u8] = b"tag";

/// Streams the `v` attribute of every `<tag k="{key}">` nested inside a
/// chosen element (`node` and `way` by default), in document order.
///
/// Values are produced one at a time without loading the whole document.
/// A malformed document yields a single error and ends the stream.
pub struct TagValues<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    key: String,
    element_kinds: Vec<String>,
    open_chosen: usize,
    finished: bool,
}

impl<R: BufRead> TagValues<R> {
    pub fn from_reader(source: R, key: &str) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
            key: key.to_string(),
            element_kinds: vec!["node".to_string(), "way".to_string()],
            open_chosen: 0,
            finished: false,
        }
    }

    /// Replace the element names whose tags are extracted.
    pub fn with_element_kinds<S: AsRef<str>>(mut self, element_kinds: &[S]) -> Self {
        self.element_kinds = element_kinds
            .iter()
            .map(|kind| kind.as_ref().to_string())
            .collect();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<R: BufRead> Iterator for TagValues<R> {
    type Item = Result<String, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.buf.clear();
            let position = self.reader.buffer_position();

            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(source) => {
                    self.finished = true;
                    return Some(Err(ParseError::Xml { position, source }));
                }
            };

            match event {
                Event::Start(element) => {
                    if is_chosen_tag(element.name().as_ref(), &self.element_kinds) {
                        self.open_chosen += 1;
                    } else if self.open_chosen > 0 && element.name().as_ref() == TAG_ELEMENT {
                        if let Some(value) = tag_value(&element, &self.key, position).transpose() {
                            return Some(value);
                        }
                    }
                }
                Event::Empty(element) => {
                    if self.open_chosen > 0 && element.name().as_ref() == TAG_ELEMENT {
                        if let Some(value) = tag_value(&element, &self.key, position).transpose() {
                            return Some(value);
                        }
                    }
                }
                Event::End(element) => {
                    if is_chosen_tag(element.name().as_ref(), &self.element_kinds) {
                        self.open_chosen = self.open_chosen.saturating_sub(1);
                    }
                }
                Event::Eof => {
                    self.finished = true;
                    return None;
                }
                _ => {}
            }
        }
    }
}

/// Open an OSM export and stream the values of tags keyed `key`.
pub fn parse_tag(osm_file: &Path, key: &str) -> Result<TagValues<BufReader<File>>, ParseError> {
    debug!(path = %osm_file.display(), key, "opening OSM document");
    let file = File::open(osm_file)?;
    Ok(TagValues::from_reader(BufReader::new(file), key))
}

pub fn is_chosen_tag<S: AsRef<str>>(element_name: &[u8], element_kinds: &[S]) -> bool {
    element_kinds
        .iter()
        .any(|kind| kind.as_ref().as_bytes() == element_name)
}

fn tag_value(element: &BytesStart<'_>, key: &str, position: u64) -> Result<Option<String>, ParseError> {
    let mut key_matches = false;
    let mut value = None;

    for attribute in element.attributes() {
        let attribute = attribute?;
        match attribute.key.as_ref() {
            b"k" => {
                let tag_key = attribute
                    .unescape_value()
                    .map_err(|source| ParseError::Xml { position, source })?;
                key_matches = tag_key == key;
            }
            b"v" => {
                let tag_value = attribute
                    .unescape_value()
                    .map_err(|source| ParseError::Xml { position, source })?;
                value = Some(tag_value.into_owned());
            }
            _ => {}
        }
    }

    if !key_matches {
        return Ok(None);
    }

    value.map(Some).ok_or_else(|| ParseError::MissingValue {
        key: key.to_string(),
        position,
    })
}

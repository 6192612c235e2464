//! Builder-pattern printer for parse errors.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use x12_lib::{Error, Location};


/// Renders one [`Error`], pointing at the failing byte when both a
/// location and the source text are known.
pub struct ErrorPrinter<'e, 's> {
    error: &'e Error,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let (Some(source), Some(location)) = (self.source, self.error.location()) else {
            return write!(w, "error: {}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.kind().to_string();
        let label = structural_label(location);
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(failing_byte(source, location.offset()))
                .label(&label),
        );

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

/// The last character consumed before `offset`, or the first character when
/// nothing was consumed.
fn failing_byte(source: &str, offset: usize) -> Range<usize> {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    match source[..end].char_indices().next_back() {
        Some((start, _)) => start..end,
        None => 0..source.chars().next().map_or(0, char::len_utf8),
    }
}

fn structural_label(location: &Location) -> String {
    if location.segment().is_empty() {
        return String::new();
    }

    let mut label = format!("segment {}", location.segment());
    if location.element() > 0 {
        write!(label, ", element {}", location.element()).expect("String write never fails");
    }
    if let Some(sub_element) = location.sub_element() {
        write!(label, ", sub-element {sub_element}").expect("String write never fails");
    }
    label
}

use color_print::ceprintln;

use crate::parser::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgKind {
    Error,
    Warn,
    Note,
}

/// A diagnostic attached to a source line.
#[derive(Debug, Clone)]
pub struct Msg {
    pub kind: MsgKind,
    pub text: String,
    pub line: Line,
}

impl Msg {
    pub fn print(&self) {
        match self.kind {
            MsgKind::Error => ceprintln!("<red,bold>error</>: {}", self.text),
            MsgKind::Warn => ceprintln!("<yellow,bold>warn</>: {}", self.text),
            MsgKind::Note => ceprintln!("<green,bold>note</>: {}", self.text),
        }
        ceprintln!("     <blue>--></> <underline>{}</>", self.line.pos());
        ceprintln!("      <blue>|</>");
        ceprintln!(" <blue>{:>4} |</> {}", self.line.no(), self.line.raw());
        ceprintln!("      <blue>|</>");
    }
}

// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Msgs(Vec<Msg>);

impl Msgs {
    pub fn new() -> Self {
        Msgs(vec![])
    }

    pub fn error(&mut self, text: String, line: Line) {
        self.push(MsgKind::Error, text, line);
    }

    pub fn warn(&mut self, text: String, line: Line) {
        self.push(MsgKind::Warn, text, line);
    }

    pub fn note(&mut self, text: String, line: Line) {
        self.push(MsgKind::Note, text, line);
    }

    fn push(&mut self, kind: MsgKind, text: String, line: Line) {
        self.0.push(Msg { kind, text, line });
    }

    pub fn extend(&mut self, other: Msgs) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Msg> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count(&self, kind: MsgKind) -> usize {
        self.0.iter().filter(|msg| msg.kind == kind).count()
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(|msg| msg.kind == MsgKind::Error)
    }

    pub fn dump(&self) {
        for msg in &self.0 {
            msg.print();
        }
    }
}

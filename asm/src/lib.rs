pub mod assign;
pub mod config;
pub mod encode;
pub mod error;
pub mod inst;
pub mod label;
pub mod listing;
pub mod loc;
pub mod msg;
pub mod parser;

use arch::word::{Cell, Word};

pub use assign::{Layout, Place};
pub use config::{Config, CpyMode, JmzLayout};
pub use error::Error;
pub use inst::Inst;
pub use label::Labels;
pub use loc::Location;
pub use msg::{Msg, MsgKind, Msgs};
pub use parser::{Line, Stmt};

/// Everything the three passes produced for one source file.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub program: Vec<Stmt>,
    pub layout: Layout,
    /// Cells per statement, parallel to `program`
    pub cells: Vec<Vec<Cell>>,
    pub msgs: Msgs,
}

impl Assembly {
    pub fn labels(&self) -> &Labels {
        &self.layout.labels
    }

    /// The program image, one word per memory cell.
    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        self.cells.iter().flatten().map(|cell| cell.to_word())
    }

    /// Newline-terminated words, ready to be loaded.
    pub fn to_text(&self) -> String {
        self.words().map(|word| format!("{}\n", word)).collect()
    }
}

/// Parse, assign addresses and encode. Problems end up in `msgs`.
pub fn assemble_lines<I, S>(path: &str, lines: I, cfg: &Config) -> Assembly
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (program, mut msgs) = parser::parse_lines(path, lines, cfg);
    let (layout, layout_msgs) = assign::assign(&program, cfg);
    msgs.extend(layout_msgs);
    let (cells, encode_msgs) = encode::encode(&program, &layout, cfg);
    msgs.extend(encode_msgs);
    Assembly {
        program,
        layout,
        cells,
        msgs,
    }
}

/// Like `assemble_lines`, for raw file contents that may not be UTF-8.
pub fn assemble_bytes(path: &str, bytes: &[u8], cfg: &Config) -> Assembly {
    let (lines, mut msgs) = parser::decode_lines(path, bytes);
    let mut asm = assemble_lines(path, &lines, cfg);
    msgs.extend(asm.msgs);
    asm.msgs = msgs;
    asm
}

pub fn assemble(path: &str, source: &str, cfg: &Config) -> Assembly {
    assemble_lines(path, source.lines(), cfg)
}

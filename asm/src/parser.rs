use std::borrow::Cow;

use crate::{
    config::{Config, CpyMode},
    error::Error,
    inst::{Inst, Keyword},
    loc::Location,
    msg::Msgs,
};

// ----------------------------------------------------------------------------
// Line

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    path: String,
    idx: usize,
    raw: String,
    code: String,
    comment: Option<String>,
}

impl Line {
    pub fn new(path: &str, idx: usize, str: &str) -> Self {
        let (code, comment) = match str.split_once(';') {
            Some((code, comment)) => (code, Some(comment.to_string())),
            None => (str, None),
        };
        Self {
            path: path.to_string(),
            idx,
            raw: str.to_string(),
            code: code.trim_end().to_string(),
            comment,
        }
    }
    pub fn pos(&self) -> String {
        format!("{}:{}", self.path, self.idx + 1)
    }
    pub fn path(&self) -> &str {
        &self.path
    }
    pub fn no(&self) -> usize {
        self.idx + 1
    }
    pub fn raw(&self) -> &str {
        &self.raw
    }
    pub fn code(&self) -> &str {
        &self.code
    }
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

// ----------------------------------------------------------------------------
// Statement

/// A parsed instruction together with the line it came from.
#[derive(Debug, Clone)]
pub struct Stmt {
    pub line: Line,
    pub inst: Inst,
}

impl Stmt {
    pub fn parse(line: &Line, cfg: &Config) -> (Option<Stmt>, Msgs) {
        let mut msgs = Msgs::new();

        if line.code().is_empty() {
            return (None, msgs);
        }

        let words: Vec<&str> = line.code().split(' ').collect();
        let Some((head, args)) = words.split_first() else {
            return (None, msgs);
        };

        let kw = match head.parse::<Keyword>() {
            Ok(kw) => kw,
            Err(_) => {
                if cfg.warn_unknown {
                    let err = Error::UnknownKeyword(head.to_string());
                    msgs.warn(format!("{}, line ignored", err), line.clone());
                }
                return (None, msgs);
            }
        };

        if args.len() < kw.arity() {
            let err = Error::MissingArgument {
                op: kw.to_string(),
                expected: kw.arity(),
                found: args.len(),
            };
            msgs.error(err.to_string(), line.clone());
            return (None, msgs);
        }
        if args.len() > kw.arity() {
            msgs.warn(
                format!("Too many arguments: `{}` ignored", args[kw.arity()..].join(" ")),
                line.clone(),
            );
        }

        if kw == Keyword::Lbl && !args[0].starts_with(cfg.sigil) {
            let err = Error::MalformedLabelName {
                name: args[0].to_string(),
                sigil: cfg.sigil,
            };
            msgs.warn(err.to_string(), line.clone());
        }

        match Inst::build(kw, args, cfg) {
            Ok(inst) => {
                let stmt = Stmt {
                    line: line.clone(),
                    inst,
                };
                (Some(stmt), msgs)
            }
            Err(err) => {
                msgs.error(format!("{}, line skipped", err), line.clone());
                (None, msgs)
            }
        }
    }
}

impl Inst {
    /// `args` must hold at least `kw.arity()` tokens.
    fn build(kw: Keyword, args: &[&str], cfg: &Config) -> Result<Inst, Error> {
        // Get argument by index and parse as Location
        macro_rules! arg {
            ($index:expr) => {
                Location::parse(args[$index], cfg.sigil)?
            };
        }

        let inst = match kw {
            Keyword::Def => Inst::Def(arg!(0)),
            Keyword::Inc => Inst::Inc(arg!(0)),
            Keyword::Add => Inst::Add(arg!(0), arg!(1)),
            Keyword::Sub => Inst::Sub(arg!(0), arg!(1)),
            Keyword::Cpy => match cfg.cpy {
                CpyMode::Copy => Inst::Copy(arg!(0), arg!(1)),
                CpyMode::Sub => Inst::Sub(arg!(0), arg!(1)),
            },
            Keyword::Inz => Inst::IncIfZero(arg!(0), arg!(1)),
            Keyword::Get => Inst::Load(arg!(0), arg!(1)),
            Keyword::Sto => Inst::Store(arg!(0), arg!(1)),
            Keyword::Out => Inst::Output(arg!(0)),
            Keyword::Inp => Inst::Input(arg!(0)),
            Keyword::Hlt => Inst::Halt,
            Keyword::Lbl => Inst::Label(args[0].to_string()),
            Keyword::Jmp => Inst::Jump(arg!(0)),
            Keyword::Jmz => Inst::JumpIfZero(arg!(0), arg!(1)),
            Keyword::Skp => Inst::SkipIfZero(arg!(0)),
        };
        Ok(inst)
    }
}

// ----------------------------------------------------------------------------
// Program

/// Split raw file contents into lines. Bytes that are not UTF-8 are replaced
/// and reported, the line itself is kept.
pub fn decode_lines(path: &str, bytes: &[u8]) -> (Vec<String>, Msgs) {
    let mut lines = vec![];
    let mut msgs = Msgs::new();
    if bytes.is_empty() {
        return (lines, msgs);
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    for (idx, raw) in body.split(|&b| b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let text = String::from_utf8_lossy(raw);
        if let Cow::Owned(_) = text {
            msgs.warn(
                "Line is not valid UTF-8, invalid bytes replaced".to_string(),
                Line::new(path, idx, &text),
            );
        }
        lines.push(text.into_owned());
    }
    (lines, msgs)
}

/// Parse every line of one source file, in order.
pub fn parse_lines<I, S>(path: &str, lines: I, cfg: &Config) -> (Vec<Stmt>, Msgs)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut program = vec![];
    let mut msgs = Msgs::new();
    for (idx, raw) in lines.into_iter().enumerate() {
        let line = Line::new(path, idx, raw.as_ref());
        let (stmt, line_msgs) = Stmt::parse(&line, cfg);
        msgs.extend(line_msgs);
        if let Some(stmt) = stmt {
            program.push(stmt);
        }
    }
    (program, msgs)
}

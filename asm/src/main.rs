use cellasm::{listing::listing, Config, CpyMode, Error, JmzLayout, MsgKind};
use clap::Parser;
use color_print::ceprintln;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::process::ExitCode;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input source file
    input: String,

    /// Output program image
    output: String,

    /// YAML config file
    #[clap(short, long)]
    config: Option<String>,

    /// Operation assembled for `cpy`
    #[clap(long, value_enum)]
    cpy: Option<CpyMode>,

    /// Cells reserved for `jmz`
    #[clap(long, value_enum)]
    jmz: Option<JmzLayout>,

    /// Warn about lines with an unknown keyword
    #[clap(long)]
    warn_unknown: bool,

    /// Dump annotated listing
    #[clap(short, long)]
    dump: bool,

    /// Write label map as YAML
    #[clap(short, long)]
    map: Option<String>,

    /// Print diagnostics only
    #[clap(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            err.print();
            ExitCode::from(2)
        }
    }
}

/// Returns whether the source assembled without errors.
fn run(args: &Args) -> Result<bool, Error> {
    let mut cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(cpy) = args.cpy {
        cfg.cpy = cpy;
    }
    if let Some(jmz) = args.jmz {
        cfg.jmz = jmz;
    }
    if args.warn_unknown {
        cfg.warn_unknown = true;
    }

    let say = |s: String| {
        if !args.quiet {
            println!("{}", s);
        }
    };

    say("1. Read File and Parse Lines".to_string());
    say(format!("  < {}", args.input));
    let mut bytes = vec![];
    File::open(&args.input)
        .map_err(|e| Error::FileOpen(args.input.clone(), e))?
        .read_to_end(&mut bytes)
        .map_err(|e| Error::FileRead(args.input.clone(), e))?;

    say("2. Assign Addresses & Encode".to_string());
    let asm = cellasm::assemble_bytes(&args.input, &bytes, &cfg);
    asm.msgs.dump();
    say(format!(
        "  - {} cells, {} labels",
        asm.layout.size,
        asm.labels().len()
    ));

    say("3. Write Program Image".to_string());
    say(format!("  > {}", args.output));
    let out = File::create(&args.output).map_err(|e| Error::FileCreate(args.output.clone(), e))?;
    let mut out = BufWriter::new(out);
    for word in asm.words() {
        writeln!(out, "{}", word).map_err(|e| Error::FileWrite(args.output.clone(), e))?;
    }
    out.flush()
        .map_err(|e| Error::FileWrite(args.output.clone(), e))?;

    if let Some(path) = &args.map {
        say(format!("  > {}", path));
        let yaml = asm.labels().to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| Error::FileWrite(path.clone(), e))?;
    }

    if args.dump {
        println!("{}", listing(&asm));
    }

    let errors = asm.msgs.count(MsgKind::Error);
    let warns = asm.msgs.count(MsgKind::Warn);
    if errors + warns > 0 {
        ceprintln!(
            "<bold>{}</> error(s), <bold>{}</> warning(s)",
            errors,
            warns
        );
    }
    Ok(errors == 0)
}

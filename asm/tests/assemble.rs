use cellasm::{assemble, assemble_bytes, Config, CpyMode, JmzLayout, MsgKind};

fn image(code: &str, cfg: &Config) -> Vec<String> {
    let asm = assemble("test.cell", code, cfg);
    for msg in asm.msgs.iter() {
        println!("{:?}: {}", msg.kind, msg.text);
    }
    asm.words().map(|w| w.to_string()).collect()
}

macro_rules! case {
    ($name:ident, $code:expr, $expect:expr) => {
        #[test]
        fn $name() {
            let words = image($code, &Config::default());
            let expect: Vec<&str> = $expect.to_vec();
            assert_eq!(words, expect, "source:\n{}", $code);
        }
    };
}

case!(
    loop_forever,
    "lbl @start\ninc 00\njmp @start",
    ["00000", "00000", "00", "30002"]
);
case!(skip_if_zero, "skp 05", ["40005"]);
case!(output, "out 10", ["70010"]);
case!(empty_lines_ignored, "\n\ninc 01\n\nhlt\n", ["00100", "90000"]);
case!(comments_ignored, "; header\nout 03 ; print\n", ["70003"]);
case!(
    data_words,
    "def 00\ndef 7\nset @end\nlbl @end\nhlt",
    ["00", "07", "03", "90000"]
);
case!(
    counter,
    "inp 20\nlbl @loop\njmz @done 20\nsub 20 21\nout 20\njmp @loop\nlbl @done\nhlt\ndef 01",
    [
        "82000", "00000", "40020", "00000", "30002", "22021", "70020", "00000", "01", "30008",
        "90000", "01"
    ]
);
case!(
    unknown_lines_dropped,
    "nop\ninc 01\nmov 01 02",
    ["00100"]
);

#[test]
fn label_before_output_resolves_to_output() {
    let code = "inc 01\nlbl @print\nout 10\njmp @print";
    let asm = assemble("test.cell", code, &Config::default());
    assert_eq!(asm.labels().get_addr("@print"), Some(1));
    let words: Vec<String> = asm.words().map(|w| w.to_string()).collect();
    assert_eq!(words[1], "70010");
    assert_eq!(words[3], "01");
}

#[test]
fn output_line_matches_address() {
    let code = "lbl @a\njmz @b 01\njmp @a\nlbl @b\nskp 02\nhlt";
    let asm = assemble("test.cell", code, &Config::default());
    let count = asm.words().count() as u32;
    assert_eq!(count, asm.layout.size);
    for (stmt, place) in asm.program.iter().zip(&asm.layout.places) {
        if let cellasm::Inst::Label(name) = &stmt.inst {
            assert_eq!(asm.labels().get_addr(name), Some(place.addr));
        }
    }
    assert_eq!(asm.labels().get_addr("@b"), Some(7));
}

#[test]
fn padded_jmz_keeps_image_in_sync() {
    let cfg = Config {
        jmz: JmzLayout::Padded,
        ..Config::default()
    };
    let asm = assemble("test.cell", "jmz @end 01\nlbl @end\nhlt", &cfg);
    let words: Vec<String> = asm.words().map(|w| w.to_string()).collect();
    assert_eq!(words.len(), 6);
    assert_eq!(words[5], "90000");
    assert_eq!(asm.labels().get_addr("@end"), Some(5));
}

#[test]
fn cpy_mode_changes_opcode() {
    let copy = image("cpy 01 02", &Config::default());
    let sub = image(
        "cpy 01 02",
        &Config {
            cpy: CpyMode::Sub,
            ..Config::default()
        },
    );
    assert_eq!(copy, vec!["30102"]);
    assert_eq!(sub, vec!["20102"]);
}

#[test]
fn bad_line_skipped_rest_written() {
    let asm = assemble("test.cell", "inc 01\nadd 01 zz\nhlt", &Config::default());
    assert!(asm.msgs.has_error());
    assert_eq!(asm.msgs.count(MsgKind::Error), 1);
    assert_eq!(asm.to_text(), "00100\n90000\n");
}

#[test]
fn same_source_same_image() {
    let code = "lbl @a\ninp 10\njmz @b 10\nout 10\njmp @a\nlbl @b\nhlt";
    let cfg = Config::default();
    assert_eq!(
        assemble("a.cell", code, &cfg).to_text(),
        assemble("a.cell", code, &cfg).to_text()
    );
}

#[test]
fn custom_sigil_from_yaml() {
    let cfg = Config::from_yaml("sigil: '%'").unwrap();
    let words = image("lbl %top\nhlt\njmp %top", &cfg);
    assert_eq!(words, vec!["90000", "00000", "00", "30002"]);
}

#[test]
fn non_utf8_source_still_assembles() {
    let asm = assemble_bytes("test.cell", b"inc 01\r\n; caf\xe9\nhlt\n", &Config::default());
    assert_eq!(asm.to_text(), "00100\n90000\n");
    assert_eq!(asm.msgs.count(MsgKind::Warn), 1);
    assert!(!asm.msgs.has_error());
}

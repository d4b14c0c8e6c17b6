use color_print::cformat;

use crate::Assembly;

const RULE: &str = "+------+------+--------+--------------+----------------------------------";

/// Annotated listing: source line, address, emitted word and its meaning.
pub fn listing(asm: &Assembly) -> String {
    let labels = asm.labels();
    let mut rows = vec![];
    let mut path: Option<&str> = None;

    for ((stmt, place), cells) in asm.program.iter().zip(&asm.layout.places).zip(&asm.cells) {
        if path != Some(stmt.line.path()) {
            path = Some(stmt.line.path());
            rows.push(RULE.to_string());
            rows.push(format!("| {:<68} |", stmt.line.path()));
            rows.push(RULE.to_string());
        }

        let source = stmt.inst.cformat(labels);
        let comment = match stmt.line.comment() {
            Some(s) => cformat!(" <dim>;{}</>", s),
            None => "".to_string(),
        };

        if cells.is_empty() {
            rows.push(format!(
                "| {:>4} |      |        |              | {}{}",
                stmt.line.no(),
                source,
                comment
            ));
            continue;
        }

        for (offset, cell) in cells.iter().enumerate() {
            let addr = cformat!("<green>{:0>4}</>", place.addr + offset as u32);
            let word = format!("{:<6}", cell.to_word());
            if offset == 0 {
                rows.push(format!(
                    "| {:>4} | {} | {} | {} | {}{}",
                    stmt.line.no(),
                    addr,
                    word,
                    cell.cformat(),
                    source,
                    comment
                ));
            } else {
                rows.push(format!(
                    "|      | {} | {} | {} |",
                    addr,
                    word,
                    cell.cformat()
                ));
            }
        }
    }
    rows.push(RULE.to_string());
    rows.join("\n")
}

//! Line, column and display-width assignment.
//!
//! Runs on every pass after cooking. Columns advance to tab stops of the
//! configured width; a width of 0 makes a tab one column wide. `\r\n` counts
//! as a single line break.

use sniff_ir::Token;

/// Fill in `line`, `column` and `length` for every token.
pub(crate) fn assign(tokens: &mut [Token], tab_width: u32) {
    let mut line = 1u32;
    let mut column = 1u32;
    for token in tokens {
        token.line = line;
        token.column = column;

        let mut seen_break = false;
        let mut chars = token.content.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' | '\r' => {
                    if !seen_break {
                        token.length = column - token.column;
                        seen_break = true;
                    }
                    line += 1;
                    column = 1;
                }
                '\t' => column = next_tab_stop(column, tab_width),
                _ => column += 1,
            }
        }
        if !seen_break {
            token.length = column - token.column;
        }
    }
}

/// Column after a tab at `column`.
fn next_tab_stop(column: u32, tab_width: u32) -> u32 {
    if tab_width == 0 {
        return column + 1;
    }
    column + (tab_width - (column - 1) % tab_width)
}

#[cfg(test)]
mod tests;

use super::*;
use sniff_ir::{Span, TokenKind};

fn positioned(pieces: &[&str], tab_width: u32) -> Vec<(u32, u32, u32)> {
    let mut tokens: Vec<Token> = pieces
        .iter()
        .map(|p| Token::new(TokenKind::String, *p, Span::DUMMY))
        .collect();
    assign(&mut tokens, tab_width);
    tokens.iter().map(|t| (t.line, t.column, t.length)).collect()
}

#[test]
fn columns_advance_by_chars() {
    assert_eq!(
        positioned(&["echo", " ", "'é'", ";"], 4),
        vec![(1, 1, 4), (1, 5, 1), (1, 6, 3), (1, 9, 1)]
    );
}

#[test]
fn tabs_expand_to_tab_stops() {
    assert_eq!(
        positioned(&["\t", "x", "  \t", "y"], 4),
        vec![(1, 1, 4), (1, 5, 1), (1, 6, 3), (1, 9, 1)]
    );
}

#[test]
fn zero_tab_width_counts_tab_as_one() {
    assert_eq!(positioned(&["\t\t", "x"], 0), vec![(1, 1, 2), (1, 3, 1)]);
}

#[test]
fn length_stops_at_first_line_break() {
    assert_eq!(
        positioned(&["  \n", "/* a\r\n", " b */", "\r", "z"], 4),
        vec![(1, 1, 2), (2, 1, 4), (3, 1, 5), (3, 6, 0), (4, 1, 1)]
    );
}

#[test]
fn empty_tokens_take_no_width() {
    assert_eq!(positioned(&["a", "", "b"], 4), vec![(1, 1, 1), (1, 2, 0), (1, 2, 1)]);
}

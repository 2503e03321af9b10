use super::*;

#[test]
fn sentinel_follows_source() {
    let buf = SourceBuffer::new("<?php");
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.as_bytes(), b"<?php");
    let cursor = buf.cursor();
    assert_eq!(cursor.source_len(), 5);
}

#[test]
fn empty_source_is_empty() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert!(buf.cursor().is_eof());
}

#[test]
fn padding_is_cache_line_aligned() {
    let source = "x".repeat(100);
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.buf.len() % CACHE_LINE, 0);
    assert!(buf.buf.len() > source.len());
}

#[test]
fn detects_utf8_bom() {
    let buf = SourceBuffer::new("\u{FEFF}<?php");
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        }]
    );
}

#[test]
fn detects_interior_nulls() {
    let buf = SourceBuffer::new("a\0b\0");
    let positions: Vec<u32> = buf
        .encoding_issues()
        .iter()
        .filter(|i| i.kind == EncodingIssueKind::InteriorNull)
        .map(|i| i.pos)
        .collect();
    assert_eq!(positions, vec![1, 3]);
}

#[test]
fn clean_source_has_no_issues() {
    let buf = SourceBuffer::new("<?php echo 1;");
    assert!(buf.encoding_issues().is_empty());
}

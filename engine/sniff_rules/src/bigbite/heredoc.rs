//! `BigBite.PHP.Heredoc`: heredoc strings are not allowed. Nowdoc is.

use sniff_ir::{TokenKind, TokenSet};

use crate::{Processed, Sniff, SniffContext, SniffError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Heredoc;

impl Heredoc {
    pub const CODE: &'static str = "BigBite.PHP.Heredoc";
}

impl Sniff for Heredoc {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn register(&self) -> TokenSet {
        TokenSet::from_kinds(&[TokenKind::StartHeredoc])
    }

    fn description(&self) -> &'static str {
        "Forbids heredoc strings. Nowdoc strings are allowed."
    }

    fn codes(&self) -> &'static [&'static str] {
        &["NotAllowed"]
    }

    fn process(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        position: usize,
    ) -> Result<Processed, SniffError> {
        ctx.add_error(
            "Use of heredoc syntax (\"<<<\") is not allowed; use standard strings or inline HTML instead",
            position,
            "NotAllowed",
            &[],
        )?;
        Ok(Processed::Continue)
    }
}

//! `BigBite.Classes.Stringable`: a class declaring `__toString` must
//! implement `\Stringable`.

use sniff_ir::{TokenKind, TokenSet};

use crate::{Processed, Sniff, SniffContext, SniffError};

/// How many tokens after `function` the method name may appear.
const NAME_WINDOW: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stringable;

impl Stringable {
    pub const CODE: &'static str = "BigBite.Classes.Stringable";
}

impl Sniff for Stringable {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn register(&self) -> TokenSet {
        TokenSet::single(TokenKind::Function)
    }

    fn description(&self) -> &'static str {
        "Classes that declare __toString must implement the Stringable interface."
    }

    fn codes(&self) -> &'static [&'static str] {
        &["NotImplemented"]
    }

    fn process(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        position: usize,
    ) -> Result<Processed, SniffError> {
        let store = ctx.store();
        let window = (position + NAME_WINDOW).min(store.len());
        let Some(name) = store.find_next(TokenKind::String, position, Some(window), false)? else {
            return Ok(Processed::Continue);
        };
        if ctx.token(name)?.content != "__toString" {
            return Ok(Processed::Continue);
        }
        let Some(class) = store.enclosing_scope(position, TokenSet::single(TokenKind::Class))? else {
            return Ok(Processed::Continue);
        };

        let interfaces = store.implemented_interface_names(class)?;
        if interfaces
            .iter()
            .flatten()
            .any(|i| i == "\\Stringable" || i == "Stringable")
        {
            return Ok(Processed::Continue);
        }

        if !ctx.add_fixable_error(
            "Classes that declare \"__toString\" should implement the Stringable interface.",
            class,
            "NotImplemented",
            &[],
        )? {
            return Ok(Processed::Continue);
        }
        let Some(opener) = ctx.token(class)?.links.scope_opener else {
            return Ok(Processed::Continue);
        };
        let Some(last) = store.previous_non_empty(opener - 1)? else {
            return Ok(Processed::Continue);
        };
        let addition = if interfaces.is_some() {
            ", \\Stringable"
        } else {
            " implements \\Stringable"
        };
        ctx.begin_changeset()?;
        ctx.add_content(last, addition)?;
        ctx.end_changeset()?;
        Ok(Processed::Continue)
    }
}

#[cfg(test)]
mod tests;

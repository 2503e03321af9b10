//! `BigBiteDocs.Commenting.FunctionComment`
//!
//! Every named function needs a `/** */` comment directly above it;
//! attributes and modifiers may sit in between. Inside the comment:
//!
//! ```text
//! /**
//!  * Fetch a widget.
//!  *
//!  * @param int    $id   Widget ID.
//!  * @param string $name Fallback name.
//!  *
//!  * @throws \RuntimeException When the store is down.
//!  *
//!  * @return array<string,mixed>
//!  */
//! ```
//!
//! `@param` tags follow the declaration order with their columns aligned,
//! and each carries a sentence. One `@return` tag names a type that agrees
//! with the body. Types are checked against `allowedTypes`; aliases such as
//! `boolean` are fixed to their canonical spelling.

mod signature;
mod types;

use sniff_ir::{StoreError, TokenKind, TokenSet, TokenStore};

use self::signature::{method_parameters, Parameter};
use self::types::{return_type_len, suggest_type};
use crate::{OptionError, Processed, Sniff, SniffContext, SniffError, SniffOptions};

const METRIC: &str = "Function has doc comment";

/// Tokens that may separate a function from its comment, besides attributes.
const PREFIXES: TokenSet = TokenSet::from_kinds(&[
    TokenKind::Whitespace,
    TokenKind::Public,
    TokenKind::Protected,
    TokenKind::Private,
    TokenKind::Static,
    TokenKind::Abstract,
    TokenKind::Final,
]);

/// Methods that need no `@return` tag.
const SPECIAL_METHODS: &[&str] = &["__construct", "__destruct"];

const DEFAULT_ALLOWED_TYPES: &[&str] = &[
    "array", "bool", "float", "int", "mixed", "object", "string", "resource", "callable",
];

/// Parses and verifies the doc comments of functions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionComment {
    /// Types accepted as written in `@param` and `@return` tags.
    pub allowed_types: Vec<String>,
    /// Skip the tag checks for comments that open with `{@inheritdoc}`.
    pub skip_if_inheritdoc: bool,
    /// Target PHP version as a `PHP_VERSION_ID`. Scalar type declarations
    /// are expected from 70000, `object` from 70200 and `mixed` from 80000.
    pub php_version: u32,
}

impl Default for FunctionComment {
    fn default() -> Self {
        FunctionComment {
            allowed_types: DEFAULT_ALLOWED_TYPES.iter().map(|t| (*t).to_owned()).collect(),
            skip_if_inheritdoc: false,
            php_version: 80000,
        }
    }
}

/// The doc comment above a function.
struct DocBlock {
    start: usize,
    closer: usize,
    /// Every tag in the comment, in order.
    tags: Vec<usize>,
}

impl DocBlock {
    /// End of the text belonging to the tag at `index`: the next tag or the
    /// closer.
    fn tag_end(&self, index: usize) -> usize {
        self.tags.get(index + 1).copied().unwrap_or(self.closer)
    }
}

/// One line of a tag's description.
#[derive(Clone, Debug)]
struct CommentLine {
    text: String,
    token: usize,
    /// Width of the padding before the line.
    indent: usize,
}

/// A parsed `@param` tag.
#[derive(Clone, Debug, Default)]
struct ParamTag {
    tag: usize,
    type_name: String,
    type_space: usize,
    var: String,
    var_space: usize,
    comment: String,
    lines: Vec<CommentLine>,
}

impl ParamTag {
    /// The tag string rebuilt with `type_name` and the given column gaps,
    /// keeping the first line of the description.
    fn rebuild(&self, type_name: &str, type_space: usize, var_space: usize) -> String {
        let first = self.lines.first().map_or("", |l| l.text.as_str());
        format!(
            "{type_name}{}{}{}{first}",
            " ".repeat(type_space),
            self.var,
            " ".repeat(var_space)
        )
    }
}

/// Pieces of a `@param` string: the type, then `$var` and a description
/// separated by whitespace.
struct ParamParts<'t> {
    type_part: &'t str,
    var: Option<&'t str>,
    /// Gap and description after the variable.
    comment: Option<(&'t str, &'t str)>,
}

fn param_parts(content: &str) -> Option<ParamParts<'_>> {
    const SIGILS: [char; 3] = ['$', '&', '.'];
    let start = content.find(|c: char| !SIGILS.contains(&c))?;
    let text = &content[start..];
    let type_len = text.find(SIGILS).unwrap_or(text.len());
    let (type_part, rest) = text.split_at(type_len);

    let after_dots = rest.strip_prefix("...").unwrap_or(rest);
    let var_len = after_dots.strip_prefix(['$', '&']).and_then(|name| {
        let run = name.find(char::is_whitespace).unwrap_or(name.len());
        (run > 0).then(|| rest.len() - name.len() + run)
    });
    let Some(var_len) = var_len else {
        return Some(ParamParts {
            type_part,
            var: None,
            comment: None,
        });
    };
    let (var, after) = rest.split_at(var_len);
    let gap = after.len() - after.trim_start().len();
    Some(ParamParts {
        type_part,
        var: Some(var),
        comment: (gap > 0).then(|| after.split_at(gap)),
    })
}

/// `content` with the first character of its suffix `tail` uppercased.
fn capitalise_tail(content: &str, tail: &str) -> String {
    let at = content.len() - tail.len();
    let mut out = String::with_capacity(content.len());
    out.push_str(&content[..at]);
    let mut chars = tail.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
    }
    out.push_str(chars.as_str());
    out
}

/// Last token of the comment belonging to the function at `function`,
/// stepping over modifiers and attributes.
fn comment_end(store: &TokenStore, function: usize) -> Result<Option<usize>, StoreError> {
    let mut at = function;
    while let Some(previous) = at.checked_sub(1) {
        let token = store.token(previous)?;
        if token.is_in(PREFIXES) {
            at = previous;
            continue;
        }
        if token.kind == TokenKind::CloseSquareBracket {
            if let Some(open) = token
                .links
                .bracket_opener
                .filter(|&o| store.get(o).is_some_and(|t| t.kind == TokenKind::Attribute))
            {
                at = open;
                continue;
            }
        }
        return Ok(Some(previous));
    }
    Ok(None)
}

/// The string after a tag on the same line.
fn tag_string(store: &TokenStore, tag: usize) -> Option<usize> {
    let (gap, string) = (store.get(tag + 1)?, store.get(tag + 2)?);
    let same_line = gap.kind == TokenKind::DocCommentWhitespace
        && !gap.content.contains(['\n', '\r'])
        && string.kind == TokenKind::DocCommentString;
    same_line.then_some(tag + 2)
}

/// Whether the first text of the comment is `{@inheritdoc}`.
fn is_inheritdoc(store: &TokenStore, block: &DocBlock) -> bool {
    store.tokens()[block.start + 1..block.closer]
        .iter()
        .find(|t| !matches!(t.kind, TokenKind::DocCommentWhitespace | TokenKind::DocCommentStar))
        .is_some_and(|t| t.content.trim().eq_ignore_ascii_case("{@inheritdoc}"))
}

/// First `return` or `yield` of a body, outside nested functions and
/// classes.
fn first_return(store: &TokenStore, opener: usize, closer: usize) -> Result<Option<usize>, StoreError> {
    let mut i = opener + 1;
    while i < closer {
        let token = store.token(i)?;
        match token.kind {
            TokenKind::Function | TokenKind::Class => {
                if let Some(end) = token.links.scope_closer {
                    i = end;
                }
            }
            TokenKind::Return | TokenKind::Yield => return Ok(Some(i)),
            _ => {}
        }
        i += 1;
    }
    Ok(None)
}

/// Whether the statement at `keyword` is a bare `return;`.
fn returns_nothing(store: &TokenStore, keyword: usize) -> Result<bool, StoreError> {
    let next = store.find_next(TokenKind::Whitespace, keyword + 1, None, true)?;
    Ok(next.is_some_and(|n| store.tokens()[n].kind == TokenKind::Semicolon))
}

impl FunctionComment {
    pub const CODE: &'static str = "BigBiteDocs.Commenting.FunctionComment";

    pub fn from_options(options: &SniffOptions) -> Result<Self, OptionError> {
        options.expect_keys(&["allowedTypes", "skipIfInheritdoc", "phpVersion"])?;
        let defaults = FunctionComment::default();
        Ok(FunctionComment {
            allowed_types: options.get_list("allowedTypes", DEFAULT_ALLOWED_TYPES)?,
            skip_if_inheritdoc: options.get_bool("skipIfInheritdoc", defaults.skip_if_inheritdoc)?,
            php_version: options.get_u32("phpVersion", defaults.php_version)?,
        })
    }

    fn is_allowed(&self, type_name: &str) -> bool {
        self.allowed_types.iter().any(|t| t == type_name)
    }

    /// Canonical spelling of a `|`-separated type list.
    fn suggest(&self, type_names: &[&str], dedup: bool) -> String {
        let mut suggested: Vec<String> = Vec::with_capacity(type_names.len());
        for name in type_names {
            let name = suggest_type(name, &self.allowed_types);
            if !dedup || !suggested.contains(&name) {
                suggested.push(name);
            }
        }
        suggested.join("|")
    }

    /// Type declaration expected for a parameter documented as `suggested`.
    /// Empty when the type cannot be declared.
    fn suggested_type_hint<'t>(&self, suggested: &'t str) -> &'t str {
        let mut hint = if suggested.contains("array") || suggested.ends_with("[]") {
            "array"
        } else if suggested.contains("callable") || suggested.contains("callback") {
            "callable"
        } else if !self.is_allowed(suggested) {
            suggested
        } else {
            ""
        };
        if self.php_version >= 70000 {
            match suggested {
                "string" => hint = "string",
                "int" | "integer" => hint = "int",
                "float" => hint = "float",
                "bool" | "boolean" => hint = "bool",
                _ => {}
            }
        }
        if self.php_version >= 70200 && suggested == "object" {
            hint = "object";
        }
        if self.php_version >= 80000 && suggested == "mixed" {
            hint = "mixed";
        }
        hint
    }

    // ─── Comment placement ─────────────────────────────────────

    fn check_spacing_after(
        ctx: &mut SniffContext<'_, '_>,
        closer: usize,
        function: usize,
    ) -> Result<(), SniffError> {
        let store = ctx.store();
        let blank: Vec<usize> = (closer + 1..function)
            .filter(|&i| {
                let token = &store.tokens()[i];
                token.kind == TokenKind::Whitespace
                    && token.column == 1
                    && token.content.ends_with(['\n', '\r'])
            })
            .collect();
        if blank.is_empty() {
            return Ok(());
        }
        if ctx.add_fixable_error(
            "There must be no blank lines after the function comment",
            closer,
            "SpacingAfter",
            &[],
        )? {
            ctx.begin_changeset()?;
            for line in blank {
                ctx.replace_token(line, "")?;
            }
            ctx.end_changeset()?;
        }
        Ok(())
    }

    fn check_sees(ctx: &mut SniffContext<'_, '_>, block: &DocBlock) -> Result<(), SniffError> {
        let store = ctx.store();
        for &tag in &block.tags {
            let token = ctx.token(tag)?;
            if token.content != "@see" {
                continue;
            }
            let string = store.find_next(TokenKind::DocCommentString, tag, Some(block.closer), false)?;
            if string.map(|s| store.tokens()[s].line) != Some(token.line) {
                ctx.add_error(
                    "Content missing for @see tag in function comment",
                    tag,
                    "EmptySees",
                    &[],
                )?;
            }
        }
        Ok(())
    }

    // ─── @return ───────────────────────────────────────────────

    fn process_return(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        function: usize,
        name: &str,
        block: &DocBlock,
    ) -> Result<(), SniffError> {
        let store = ctx.store();
        let mut return_tag = None;
        for &tag in &block.tags {
            if ctx.token(tag)?.content != "@return" {
                continue;
            }
            if return_tag.is_some() {
                ctx.add_error(
                    "Only 1 @return tag is allowed in a function comment",
                    tag,
                    "DuplicateReturn",
                    &[],
                )?;
                return Ok(());
            }
            return_tag = Some(tag);
        }

        let Some(tag) = return_tag else {
            if !SPECIAL_METHODS.contains(&name) {
                ctx.add_error(
                    "Missing @return tag in function comment",
                    block.closer,
                    "MissingReturn",
                    &[],
                )?;
            }
            return Ok(());
        };
        let Some(string) = tag_string(store, tag) else {
            ctx.add_error(
                "Return type missing for @return tag in function comment",
                tag,
                "MissingReturnType",
                &[],
            )?;
            return Ok(());
        };

        let content = ctx.token(string)?.content.trim_end();
        let (return_type, description) = content.split_at(return_type_len(content));
        let type_names: Vec<&str> = return_type.split('|').collect();
        let suggested = self.suggest(&type_names, true);
        if return_type != suggested
            && ctx.add_fixable_error(
                "Expected \"%s\" but found \"%s\" for function return type",
                tag,
                "InvalidReturn",
                &[suggested.as_str(), return_type],
            )?
        {
            ctx.begin_changeset()?;
            ctx.replace_token(string, &format!("{suggested}{description}"))?;
            ctx.end_changeset()?;
        }

        let links = ctx.token(function)?.links;
        let (Some(opener), Some(closer)) = (links.scope_opener, links.scope_closer) else {
            return Ok(());
        };
        let first = first_return(store, opener, closer)?;
        if return_type == "void" {
            if let Some(keyword) = first {
                if !returns_nothing(store, keyword)? {
                    ctx.add_error(
                        "Function return type is void, but function contains return statement",
                        tag,
                        "InvalidReturnVoid",
                        &[],
                    )?;
                }
            }
        } else if return_type != "mixed" && return_type != "never" && !type_names.contains(&"void") {
            match first {
                None => {
                    ctx.add_error(
                        "Function return type is not void, but function has no return statement",
                        tag,
                        "InvalidNoReturn",
                        &[],
                    )?;
                }
                Some(keyword) if returns_nothing(store, keyword)? => {
                    ctx.add_error(
                        "Function return type is not void, but function is returning void here",
                        keyword,
                        "InvalidReturnNotVoid",
                        &[],
                    )?;
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    // ─── @throws ───────────────────────────────────────────────

    fn process_throws(ctx: &mut SniffContext<'_, '_>, block: &DocBlock) -> Result<(), SniffError> {
        let store = ctx.store();
        for (index, &tag) in block.tags.iter().enumerate() {
            if ctx.token(tag)?.content != "@throws" {
                continue;
            }
            let Some(string) = tag_string(store, tag) else {
                ctx.add_error(
                    "Exception type and comment missing for @throws tag in function comment",
                    tag,
                    "InvalidThrows",
                    &[],
                )?;
                continue;
            };
            let content = ctx.token(string)?.content.trim_end();
            let first_line = content
                .find(char::is_whitespace)
                .map_or("", |space| content[space..].trim_start());
            if first_line.is_empty() {
                ctx.add_error(
                    "Comment missing for @throws tag in function comment",
                    tag,
                    "EmptyThrows",
                    &[],
                )?;
                continue;
            }

            let mut comment = first_line.to_owned();
            let mut last = string;
            for i in tag + 3..block.tag_end(index) {
                let token = ctx.token(i)?;
                if token.kind == TokenKind::DocCommentString {
                    comment.push(' ');
                    comment.push_str(token.content.trim_end());
                    last = i;
                }
            }

            if first_line.starts_with(|c: char| c.is_ascii_lowercase())
                && ctx.add_fixable_error(
                    "@throws tag comment must start with a capital letter",
                    string,
                    "ThrowsNotCapital",
                    &[],
                )?
            {
                ctx.begin_changeset()?;
                ctx.replace_token(string, &capitalise_tail(content, first_line))?;
                ctx.end_changeset()?;
            }

            if !comment.ends_with('.')
                && ctx.add_fixable_error(
                    "@throws tag comment must end with a full stop",
                    string,
                    "ThrowsNoFullStop",
                    &[],
                )?
            {
                let text = ctx.token(last)?.content.trim_end();
                ctx.begin_changeset()?;
                ctx.replace_token(last, &format!("{text}."))?;
                ctx.end_changeset()?;
            }
        }
        Ok(())
    }

    // ─── @param ────────────────────────────────────────────────

    /// Parse every `@param` tag, reporting the malformed ones. Returns the
    /// tags and the widest type and variable.
    fn parse_params(
        ctx: &mut SniffContext<'_, '_>,
        block: &DocBlock,
    ) -> Result<(Vec<ParamTag>, usize, usize), SniffError> {
        let store = ctx.store();
        let mut params = Vec::new();
        let (mut max_type, mut max_var) = (0, 0);
        for (index, &tag) in block.tags.iter().enumerate() {
            if ctx.token(tag)?.content != "@param" {
                continue;
            }
            let mut param = ParamTag {
                tag,
                ..ParamTag::default()
            };
            let Some(string) = tag_string(store, tag) else {
                ctx.add_error("Missing parameter type", tag, "MissingParamType", &[])?;
                params.push(param);
                continue;
            };

            let content = ctx.token(string)?.content.trim_end();
            let parts = param_parts(content);
            if let Some(parts) = &parts {
                param.type_name = parts.type_part.trim().to_owned();
                param.type_space = parts.type_part.len() - param.type_name.len();
                max_type = max_type.max(param.type_name.len());
            }

            match parts.and_then(|p| p.var.map(|var| (var, p.comment))) {
                Some((var, comment)) => {
                    param.var = var.to_owned();
                    max_var = max_var.max(var.len());
                    if let Some((gap, text)) = comment {
                        param.var_space = gap.len();
                        param.comment = text.to_owned();
                        param.lines.push(CommentLine {
                            text: text.to_owned(),
                            token: string,
                            indent: gap.len(),
                        });
                        for i in tag + 3..block.tag_end(index) {
                            let token = ctx.token(i)?;
                            if token.kind != TokenKind::DocCommentString {
                                continue;
                            }
                            let padding = ctx.token(i - 1)?;
                            let indent = if padding.kind == TokenKind::DocCommentWhitespace {
                                padding.length as usize
                            } else {
                                0
                            };
                            let text = token.content.trim_end();
                            param.comment.push(' ');
                            param.comment.push_str(text);
                            param.lines.push(CommentLine {
                                text: text.to_owned(),
                                token: i,
                                indent,
                            });
                        }
                    } else {
                        ctx.add_error("Missing parameter comment", tag, "MissingParamComment", &[])?;
                    }
                }
                None if content.starts_with('$') => {
                    ctx.add_error("Missing parameter type", tag, "MissingParamType", &[])?;
                }
                None => {
                    ctx.add_error("Missing parameter name", tag, "MissingParamName", &[])?;
                }
            }
            params.push(param);
        }
        Ok((params, max_type, max_var))
    }

    fn process_params(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        function: usize,
        block: &DocBlock,
    ) -> Result<(), SniffError> {
        let (params, max_type, max_var) = Self::parse_params(ctx, block)?;
        let real = method_parameters(ctx.store(), function)?;
        let mut found: Vec<String> = Vec::new();

        for (pos, param) in params.iter().enumerate() {
            if param.type_name.is_empty() {
                continue;
            }

            let type_names: Vec<&str> = param
                .type_name
                .split('|')
                .filter(|t| !t.is_empty())
                .map(|t| t.strip_prefix('?').unwrap_or(t))
                .collect();
            let suggested = self.suggest(&type_names, false);
            if let [only] = type_names.as_slice() {
                let only = suggest_type(only, &self.allowed_types);
                self.check_type_hint(ctx, function, param, real.get(pos), &only)?;
            }
            if param.type_name != suggested {
                Self::fix_param_type(ctx, param, &suggested)?;
            }

            if param.var.is_empty() {
                continue;
            }
            found.push(param.var.clone());
            Self::check_type_spacing(ctx, param, max_type)?;

            if let Some(declared) = real.get(pos) {
                let mut var = param.var.as_str();
                if let Some(stripped) = var.strip_prefix('&') {
                    var = stripped;
                    if let Some(last) = found.last_mut() {
                        *last = stripped.to_owned();
                    }
                    if !declared.by_reference && declared.name == var {
                        ctx.add_error(
                            "Doc comment for parameter %s is prefixed with \"&\" but parameter is not passed by reference",
                            param.tag,
                            "ParamNameUnexpectedAmpersandPrefix",
                            &[var],
                        )?;
                    }
                }
                if declared.name != var {
                    let (message, code) = if declared.name.eq_ignore_ascii_case(var) {
                        (
                            "Doc comment for parameter %s does not match case of actual variable name %s",
                            "ParamNameNoCaseMatch",
                        )
                    } else {
                        (
                            "Doc comment for parameter %s does not match actual variable name %s",
                            "ParamNameNoMatch",
                        )
                    };
                    ctx.add_error(message, param.tag, code, &[var, declared.name.as_str()])?;
                }
            } else if !param.var.ends_with(",...") {
                ctx.add_error("Superfluous parameter comment", param.tag, "ExtraParamComment", &[])?;
            }

            if param.comment.is_empty() {
                continue;
            }
            Self::check_name_spacing(ctx, param, max_var)?;
            Self::check_param_comment(ctx, param)?;
        }

        for declared in &real {
            if !found.contains(&declared.name) {
                ctx.add_error(
                    "Doc comment for parameter \"%s\" missing",
                    block.start,
                    "MissingParamTag",
                    &[declared.name.as_str()],
                )?;
            }
        }
        Ok(())
    }

    fn check_type_hint(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        function: usize,
        param: &ParamTag,
        declared: Option<&Parameter>,
        suggested: &str,
    ) -> Result<(), SniffError> {
        let Some(declared) = declared else {
            return Ok(());
        };
        let hint = self.suggested_type_hint(suggested);
        if hint.is_empty() {
            if !declared.type_hint.is_empty() {
                ctx.add_error(
                    "Unknown type hint \"%s\" found for %s",
                    function,
                    "InvalidTypeHint",
                    &[declared.type_hint.as_str(), param.var.as_str()],
                )?;
            }
            return Ok(());
        }
        if param.var.is_empty() {
            return Ok(());
        }

        let written = declared.type_hint.strip_prefix('?').unwrap_or(&declared.type_hint);
        if written.is_empty() {
            let code = if matches!(hint, "string" | "int" | "float" | "bool") {
                "ScalarTypeHintMissing"
            } else {
                "TypeHintMissing"
            };
            ctx.add_error(
                "Type hint \"%s\" missing for %s",
                function,
                code,
                &[hint, param.var.as_str()],
            )?;
        } else if !hint.ends_with(written) {
            // Namespace prefixes are ignored by comparing the tail.
            ctx.add_error(
                "Expected type hint \"%s\"; found \"%s\" for %s",
                function,
                "IncorrectTypeHint",
                &[hint, declared.type_hint.as_str(), param.var.as_str()],
            )?;
        }
        Ok(())
    }

    fn fix_param_type(
        ctx: &mut SniffContext<'_, '_>,
        param: &ParamTag,
        suggested: &str,
    ) -> Result<(), SniffError> {
        if !ctx.add_fixable_error(
            "Expected \"%s\" but found \"%s\" for parameter type",
            param.tag,
            "IncorrectParamVarName",
            &[suggested, param.type_name.as_str()],
        )? {
            return Ok(());
        }
        ctx.begin_changeset()?;
        ctx.replace_token(
            param.tag + 2,
            &param.rebuild(suggested, param.type_space, param.var_space),
        )?;
        reindent(ctx, param, param.type_name.len(), suggested.len())?;
        ctx.end_changeset()?;
        Ok(())
    }

    fn check_type_spacing(
        ctx: &mut SniffContext<'_, '_>,
        param: &ParamTag,
        max_type: usize,
    ) -> Result<(), SniffError> {
        let spaces = max_type - param.type_name.len() + 1;
        if param.type_space == spaces {
            return Ok(());
        }
        if ctx.add_fixable_error(
            "Expected %s spaces after parameter type; %s found",
            param.tag,
            "SpacingAfterParamType",
            &[spaces.to_string().as_str(), param.type_space.to_string().as_str()],
        )? {
            ctx.begin_changeset()?;
            ctx.replace_token(
                param.tag + 2,
                &param.rebuild(&param.type_name, spaces, param.var_space),
            )?;
            reindent(ctx, param, param.type_space, spaces)?;
            ctx.end_changeset()?;
        }
        Ok(())
    }

    fn check_name_spacing(
        ctx: &mut SniffContext<'_, '_>,
        param: &ParamTag,
        max_var: usize,
    ) -> Result<(), SniffError> {
        let spaces = max_var - param.var.len() + 1;
        if param.var_space == spaces {
            return Ok(());
        }
        if ctx.add_fixable_error(
            "Expected %s spaces after parameter name; %s found",
            param.tag,
            "SpacingAfterParamName",
            &[spaces.to_string().as_str(), param.var_space.to_string().as_str()],
        )? {
            ctx.begin_changeset()?;
            ctx.replace_token(
                param.tag + 2,
                &param.rebuild(&param.type_name, param.type_space, spaces),
            )?;
            reindent(ctx, param, param.var_space, spaces)?;
            ctx.end_changeset()?;
        }
        Ok(())
    }

    /// A parameter description starts with a capital letter and ends with
    /// a full stop.
    fn check_param_comment(
        ctx: &mut SniffContext<'_, '_>,
        param: &ParamTag,
    ) -> Result<(), SniffError> {
        let (Some(first_line), Some(last_line)) = (param.lines.first(), param.lines.last()) else {
            return Ok(());
        };
        if let Some(first) = param.comment.chars().next() {
            if first.is_lowercase() || !first.is_alphabetic() {
                let message = "Parameter comment must start with a capital letter";
                if !first.is_ascii_lowercase() {
                    ctx.add_error(message, param.tag, "ParamCommentNotCapital", &[])?;
                } else if ctx.add_fixable_error(message, param.tag, "ParamCommentNotCapital", &[])? {
                    let content = ctx.token(first_line.token)?.content.trim_end();
                    ctx.begin_changeset()?;
                    ctx.replace_token(first_line.token, &capitalise_tail(content, &first_line.text))?;
                    ctx.end_changeset()?;
                }
            }
        }

        if !param.comment.ends_with('.')
            && ctx.add_fixable_error(
                "Parameter comment must end with a full stop",
                param.tag,
                "ParamCommentFullStop",
                &[],
            )?
        {
            let content = ctx.token(last_line.token)?.content.trim_end();
            ctx.begin_changeset()?;
            ctx.replace_token(last_line.token, &format!("{content}."))?;
            ctx.end_changeset()?;
        }
        Ok(())
    }
}

/// Shift continuation lines of a description after its first line moved
/// from column gap `old` to `new`.
fn reindent(
    ctx: &mut SniffContext<'_, '_>,
    param: &ParamTag,
    old: usize,
    new: usize,
) -> Result<(), SniffError> {
    for line in param.lines.iter().skip(1).filter(|l| l.indent > 0) {
        if let Some(indent) = (line.indent + new).checked_sub(old).filter(|&i| i > 0) {
            ctx.replace_token(line.token - 1, &" ".repeat(indent))?;
        }
    }
    Ok(())
}

impl Sniff for FunctionComment {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn register(&self) -> TokenSet {
        TokenSet::single(TokenKind::Function)
    }

    fn description(&self) -> &'static str {
        "Named functions need a doc comment directly above them. It documents every \
         parameter in order with an `allowedTypes` type, an aligned variable name and a \
         capitalised sentence ending in a full stop, plus one `@return` tag that agrees with \
         the body (constructors and destructors excepted) and a sentence for each `@throws`."
    }

    fn codes(&self) -> &'static [&'static str] {
        &[
            "Missing",
            "WrongStyle",
            "SpacingAfter",
            "EmptySees",
            "DuplicateReturn",
            "MissingReturn",
            "MissingReturnType",
            "InvalidReturn",
            "InvalidReturnVoid",
            "InvalidNoReturn",
            "InvalidReturnNotVoid",
            "InvalidThrows",
            "EmptyThrows",
            "ThrowsNotCapital",
            "ThrowsNoFullStop",
            "MissingParamType",
            "MissingParamName",
            "MissingParamComment",
            "MissingParamTag",
            "IncorrectParamVarName",
            "ScalarTypeHintMissing",
            "TypeHintMissing",
            "IncorrectTypeHint",
            "InvalidTypeHint",
            "SpacingAfterParamType",
            "SpacingAfterParamName",
            "ParamNameUnexpectedAmpersandPrefix",
            "ParamNameNoMatch",
            "ParamNameNoCaseMatch",
            "ExtraParamComment",
            "ParamCommentNotCapital",
            "ParamCommentFullStop",
        ]
    }

    fn process(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        position: usize,
    ) -> Result<Processed, SniffError> {
        let store = ctx.store();
        // Closures are documented with their enclosing statement.
        let Some(name) = store.declaration_name(position)? else {
            return Ok(Processed::Continue);
        };

        let end = comment_end(store, position)?;
        let end_kind = end.map(|e| store.tokens()[e].kind);
        if end_kind == Some(TokenKind::Comment) {
            ctx.add_error(
                "You must use \"/**\" style comments for a function comment",
                position,
                "WrongStyle",
                &[],
            )?;
            return Ok(Processed::Continue);
        }
        let closer = match end {
            Some(closer) if end_kind == Some(TokenKind::DocCommentCloseTag) => closer,
            _ => {
                ctx.add_error("Missing doc comment for function %s()", position, "Missing", &[name])?;
                ctx.record_metric(position, METRIC, "no")?;
                return Ok(Processed::Continue);
            }
        };
        ctx.record_metric(position, METRIC, "yes")?;
        let Some(start) = ctx.token(closer)?.links.comment_opener else {
            return Ok(Processed::Continue);
        };

        let block = DocBlock {
            start,
            closer,
            tags: (start + 1..closer)
                .filter(|&i| store.tokens()[i].kind == TokenKind::DocCommentTag)
                .collect(),
        };
        Self::check_spacing_after(ctx, closer, position)?;
        Self::check_sees(ctx, &block)?;
        if self.skip_if_inheritdoc && is_inheritdoc(store, &block) {
            return Ok(Processed::Continue);
        }
        self.process_return(ctx, position, name, &block)?;
        Self::process_throws(ctx, &block)?;
        self.process_params(ctx, position, &block)?;
        Ok(Processed::Continue)
    }
}

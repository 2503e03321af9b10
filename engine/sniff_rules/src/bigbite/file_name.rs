//! `BigBite.Files.FileName`
//!
//! File names are lowercase and hyphenated, and a file declaring a class is
//! named after it:
//!
//! ```text
//! class My_Thing            -> class-my-thing.php
//! abstract class BaseThing  -> abstract-class-base-thing.php
//! ```
//!
//! Test classes are exempt from the class rule. The check runs once per
//! file and is skipped when a disable directive is still in effect at the
//! end of the file.

use sniff_ir::{TokenKind, TokenSet, TokenStore};

use crate::naming::{base_name, is_theme_exception, kebab_case, split_extension};
use crate::{OptionError, Processed, Sniff, SniffContext, SniffError, SniffOptions};

/// Base classes that mark a class as a test case.
const TEST_CLASSES: &[&str] = &[
    "WP_UnitTestCase_Base",
    "WP_UnitTestCase",
    "WP_Ajax_UnitTestCase",
    "WP_Canonical_UnitTestCase",
    "WP_Test_REST_TestCase",
    "WP_Test_REST_Controller_Testcase",
    "WP_Test_REST_Post_Type_Controller_Testcase",
    "WP_XMLTestCase",
    "PHPUnit_Framework_TestCase",
    "PHPUnit\\Framework\\TestCase",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileName {
    /// Allow theme template names such as `single-my_post.php`.
    pub is_theme: bool,
    pub strict_class_file_names: bool,
    /// Extra base classes treated as test cases.
    pub custom_test_classes: Vec<String>,
}

impl Default for FileName {
    fn default() -> Self {
        FileName {
            is_theme: false,
            strict_class_file_names: true,
            custom_test_classes: Vec::new(),
        }
    }
}

impl FileName {
    pub const CODE: &'static str = "BigBite.Files.FileName";

    pub fn from_options(options: &SniffOptions) -> Result<Self, OptionError> {
        options.expect_keys(&["isTheme", "strictClassFileNames", "customTestClasses"])?;
        let defaults = FileName::default();
        Ok(FileName {
            is_theme: options.get_bool("isTheme", defaults.is_theme)?,
            strict_class_file_names: options
                .get_bool("strictClassFileNames", defaults.strict_class_file_names)?,
            custom_test_classes: options.get_list("customTestClasses", &[])?,
        })
    }

    fn is_test_class(&self, store: &TokenStore, class: usize) -> Result<bool, SniffError> {
        let Some(parent) = store.extended_class_name(class)? else {
            return Ok(false);
        };
        let parent = parent.trim_start_matches('\\');
        Ok(TEST_CLASSES.contains(&parent)
            || self
                .custom_test_classes
                .iter()
                .any(|c| c.trim_start_matches('\\') == parent))
    }
}

/// First class in the file that has a name.
fn first_named_class(store: &TokenStore) -> Result<Option<(usize, &str)>, SniffError> {
    for (position, token) in store.iter().enumerate() {
        if token.kind == TokenKind::Class {
            if let Some(name) = store.declaration_name(position)? {
                return Ok(Some((position, name)));
            }
        }
    }
    Ok(None)
}

fn is_abstract(store: &TokenStore, class: usize) -> Result<bool, SniffError> {
    let mut at = class;
    while at > 0 {
        let Some(previous) = store.previous_non_empty(at - 1)? else {
            return Ok(false);
        };
        match store.kind(previous)? {
            TokenKind::Abstract => return Ok(true),
            TokenKind::Final | TokenKind::Readonly => at = previous,
            _ => return Ok(false),
        }
    }
    Ok(false)
}

impl Sniff for FileName {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn register(&self) -> TokenSet {
        TokenSet::from_kinds(&[TokenKind::OpenTag, TokenKind::OpenTagWithEcho])
    }

    fn description(&self) -> &'static str {
        "File names must be lowercase and hyphenated, and class files must be named \
         after their class."
    }

    fn codes(&self) -> &'static [&'static str] {
        &["NotHyphenatedLowercase", "InvalidClassFileName"]
    }

    fn process(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        _position: usize,
    ) -> Result<Processed, SniffError> {
        let file_name = base_name(ctx.path());
        if file_name.is_empty() || file_name == "STDIN" {
            return Ok(Processed::Done);
        }
        if ctx.suppressions().disabled_at_end(Self::CODE) {
            return Ok(Processed::Done);
        }

        let expected = match split_extension(file_name) {
            (stem, Some(ext)) => format!("{}.{ext}", kebab_case(stem)),
            (stem, None) => kebab_case(stem),
        };
        if expected != file_name && !(self.is_theme && is_theme_exception(file_name)) {
            ctx.add_error(
                "Filenames should be all lowercase with hyphens as word separators. Expected %s, but found %s.",
                0,
                "NotHyphenatedLowercase",
                &[expected.as_str(), file_name],
            )?;
        }

        if !self.strict_class_file_names {
            return Ok(Processed::Done);
        }
        let store = ctx.store();
        let Some((class, name)) = first_named_class(store)? else {
            return Ok(Processed::Done);
        };
        if self.is_test_class(store, class)? {
            return Ok(Processed::Done);
        }
        let (message, expected) = if is_abstract(store, class)? {
            (
                "Abstract class file names should be based on the class name with \"abstract-class-\" prepended. Expected %s, but found %s.",
                format!("abstract-class-{}", kebab_case(name)),
            )
        } else {
            (
                "Class file names should be based on the class name with \"class-\" prepended. Expected %s, but found %s.",
                format!("class-{}", kebab_case(name)),
            )
        };
        if split_extension(file_name).0 != expected {
            let expected = format!("{expected}.php");
            ctx.add_error(
                message,
                0,
                "InvalidClassFileName",
                &[expected.as_str(), file_name],
            )?;
        }
        Ok(Processed::Done)
    }
}

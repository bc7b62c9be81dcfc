// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `{token}` substitution for name templates.
//!
//! A template names its placeholders from a fixed token set. Each template
//! kind offers a subset of tokens through its [`Context`]; offered tokens
//! are replaced at every occurrence, anything else between braces is kept
//! literally.

/// A recognized placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Test file path, relative to the base directory when it applies.
    Filepath,
    /// Base name of the test file.
    Filename,
    /// Case title, or the top ancestor title for suite names.
    Title,
    /// Ancestor titles, or the resolved classname in title templates.
    Classname,
    /// Project label of a multi-project run.
    DisplayName,
}

impl Token {
    pub const ALL: [Token; 5] = [
        Token::Filepath,
        Token::Filename,
        Token::Title,
        Token::Classname,
        Token::DisplayName,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Token::Filepath => "filepath",
            Token::Filename => "filename",
            Token::Title => "title",
            Token::Classname => "classname",
            Token::DisplayName => "displayName",
        }
    }

    pub fn parse(name: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|t| t.name() == name)
    }

    /// The `{name}` form as written in templates.
    pub fn tag(self) -> String {
        format!("{{{}}}", self.name())
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Values offered to a template.
///
/// An offered token with an empty value substitutes the empty string; a
/// token that is not offered stays literal.
#[derive(Debug, Clone, Default)]
pub struct Context<'a> {
    values: [Option<&'a str>; Token::ALL.len()],
}

impl<'a> Context<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer `token` with `value`.
    pub fn with(mut self, token: Token, value: &'a str) -> Self {
        self.values[token.index()] = Some(value);
        self
    }

    pub fn get(&self, token: Token) -> Option<&'a str> {
        self.values[token.index()]
    }
}

/// Expand every offered `{token}` in `template`.
pub fn resolve(template: &str, ctx: &Context<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        // The placeholder name ends at the first `}`; a nested `{` restarts.
        let close = after.find(['}', '{']);
        match close.map(|i| (i, &after[i..i + 1])) {
            Some((i, "}")) => {
                let name = &after[..i];
                match Token::parse(name).and_then(|t| ctx.get(t)) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[i + 1..];
            }
            Some((i, _)) => {
                out.push('{');
                out.push_str(&after[..i]);
                rest = &after[i..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// True if `template` contains `{token}`.
pub fn mentions(template: &str, token: Token) -> bool {
    template.contains(&token.tag())
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;

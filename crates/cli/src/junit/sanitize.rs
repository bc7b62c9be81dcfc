// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal escape stripping for text bound for XML.
//!
//! Jest colors failure messages and console output with ANSI sequences.
//! Everything starting with ESC is removed, as are bare C0 control
//! characters other than tab, newline and carriage return.

use std::iter::Peekable;
use std::str::Chars;

const ESC: char = '\u{1b}';
const BEL: char = '\u{07}';
/// Single-character CSI introducer (C1 form of `ESC [`).
const CSI: char = '\u{9b}';

/// Remove terminal control and escape sequences from `text`.
///
/// Idempotent: the output never contains ESC or stray control characters.
pub fn sanitize(text: &str) -> String {
    if !text.chars().any(is_stripped) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESC => skip_escape(&mut chars),
            CSI => skip_csi(&mut chars),
            c if is_stripped(c) => {}
            c => out.push(c),
        }
    }

    out
}

/// Drop stack-frame lines (`    at fn (file:line:col)`) from a failure message.
pub fn strip_stack_trace(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("at "))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_stripped(c: char) -> bool {
    match c {
        '\n' | '\r' | '\t' => false,
        ESC | CSI => true,
        c => (c as u32) < 0x20 || c == '\u{7f}',
    }
}

/// Consume the remainder of a sequence whose ESC was already read.
fn skip_escape(chars: &mut Peekable<Chars<'_>>) {
    let Some(&next) = chars.peek() else {
        return;
    };
    match next {
        '[' => {
            chars.next();
            skip_csi(chars);
        }
        // OSC, DCS, SOS, PM, APC: string terminated by BEL or ST
        ']' | 'P' | 'X' | '^' | '_' => {
            chars.next();
            skip_string(chars);
        }
        // nF: intermediates then a final byte (e.g. `ESC ( B`)
        '\u{20}'..='\u{2f}' => {
            while chars.next_if(|c| ('\u{20}'..='\u{2f}').contains(c)).is_some() {}
            chars.next_if(|c| ('\u{30}'..='\u{7e}').contains(c));
        }
        // Fp, Fe, Fs: a single final byte
        '\u{30}'..='\u{7e}' => {
            chars.next();
        }
        _ => {}
    }
}

/// Parameters, intermediates, then one final byte.
fn skip_csi(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| ('\u{30}'..='\u{3f}').contains(c)).is_some() {}
    while chars.next_if(|c| ('\u{20}'..='\u{2f}').contains(c)).is_some() {}
    chars.next_if(|c| ('\u{40}'..='\u{7e}').contains(c));
}

fn skip_string(chars: &mut Peekable<Chars<'_>>) {
    while let Some(c) = chars.next() {
        match c {
            BEL => return,
            ESC => {
                chars.next_if_eq(&'\\');
                return;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod tests;

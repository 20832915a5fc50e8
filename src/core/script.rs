//! Compact target-script parsing.
//!
//! `targets.gantry` is a line-oriented alternative to Gantry.toml, one
//! directive per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! target SGame type=game modules=SGame
//! target SGameEditor type=editor modules=SGame,SGameEditor
//! ```
//!
//! Directives are declarative only; validation happens at registration.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::core::target::{TargetDefinition, TargetType};
use crate::util::Symbol;

/// Parse failure in a target script, with the offending span.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(gantry::script::parse))]
pub struct ScriptError {
    /// What went wrong
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,
}

/// Parse a target script into definitions, in declaration order.
pub fn parse(content: &str, path: &Path) -> Result<Vec<TargetDefinition>, ScriptError> {
    let mut definitions = Vec::new();
    let mut offset = 0usize;

    for line in content.lines() {
        let line_offset = offset;
        offset += line.len() + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        definitions.push(parse_directive(line, line_offset, content, path)?);
    }

    tracing::debug!(
        "parsed {} target directive(s) from {}",
        definitions.len(),
        path.display()
    );

    Ok(definitions)
}

/// Parse one `target <name> key=value ...` directive.
fn parse_directive(
    line: &str,
    line_offset: usize,
    content: &str,
    path: &Path,
) -> Result<TargetDefinition, ScriptError> {
    let toks = tokens(line);
    let err = |offset: usize, len: usize, message: String| {
        error_at(path, content, line_offset + offset, len, message)
    };

    let (kw_offset, kw) = toks[0];
    if kw != "target" {
        return Err(err(
            kw_offset,
            kw.len(),
            format!("expected `target` directive, found `{}`", kw),
        ));
    }

    if toks.len() < 2 || toks[1].1.contains('=') {
        return Err(err(
            kw_offset,
            kw.len(),
            "missing target name after `target`".to_string(),
        ));
    }
    let (_, name) = toks[1];

    let mut target_type = None;
    let mut modules = None;

    for &(tok_offset, tok) in &toks[2..] {
        let Some((key, value)) = tok.split_once('=') else {
            return Err(err(
                tok_offset,
                tok.len(),
                format!("expected key=value, found `{}`", tok),
            ));
        };

        match key {
            "type" => {
                if target_type.is_some() {
                    return Err(err(tok_offset, tok.len(), "duplicate `type` key".to_string()));
                }
                let parsed = value.parse::<TargetType>().map_err(|parse_err| {
                    err(tok_offset, tok.len(), parse_err.to_string())
                })?;
                target_type = Some(parsed);
            }

            "modules" => {
                if modules.is_some() {
                    return Err(err(
                        tok_offset,
                        tok.len(),
                        "duplicate `modules` key".to_string(),
                    ));
                }
                modules = Some(value.split(',').map(Symbol::intern).collect());
            }

            _ => {
                return Err(err(
                    tok_offset,
                    tok.len(),
                    format!("unknown directive key `{}`", key),
                ));
            }
        }
    }

    Ok(TargetDefinition {
        name: Symbol::intern(name),
        target_type: target_type.unwrap_or_default(),
        modules: modules.unwrap_or_default(),
    })
}

/// Split a line into whitespace-separated tokens with their offsets.
fn tokens(line: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for tok in line.split_whitespace() {
        // split_whitespace walks left to right, so the next occurrence
        // past the cursor is this token's position.
        let found = line[cursor..]
            .find(tok)
            .map(|i| i + cursor)
            .unwrap_or(cursor);
        out.push((found, tok));
        cursor = found + tok.len();
    }
    out
}

fn error_at(
    path: &Path,
    content: &str,
    offset: usize,
    len: usize,
    message: String,
) -> ScriptError {
    ScriptError {
        message,
        src: NamedSource::new(path.display().to_string(), content.to_string()),
        span: (offset, len.max(1)).into(),
    }
}

use hashbrown::HashSet;
use regex::Regex;
use std::sync::LazyLock;

use super::{PatternError, PatternResult, SegmentDef, SegmentPart, SegmentPattern};
use crate::path::split_segments;

static PARAM_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("param name pattern should compile")
});

#[tracing::instrument(level = "trace", skip(template), fields(tpl=%template))]
pub fn compile_template(template: &str, case_sensitive: bool) -> PatternResult<Vec<SegmentDef>> {
    if !template.starts_with('/') {
        return Err(PatternError::NotAbsolute {
            template: template.to_string(),
        });
    }

    let raw = split_segments(template);
    let mut defs = Vec::with_capacity(raw.len());
    let mut seen: HashSet<String> = HashSet::new();

    for (idx, seg) in raw.iter().enumerate() {
        let def = parse_segment(seg, case_sensitive)?;

        if matches!(def, SegmentDef::CatchAll { .. }) && idx + 1 != raw.len() {
            return Err(PatternError::CatchAllNotTerminal {
                template: template.to_string(),
                segment: seg.to_string(),
            });
        }

        for name in def.param_names() {
            if !seen.insert(name.to_string()) {
                return Err(PatternError::DuplicateParamName {
                    template: template.to_string(),
                    name: name.to_string(),
                });
            }
        }

        defs.push(def);
    }

    Ok(defs)
}

/// Accepts `:name` and `[name]` parameters (optionally surrounded by literal
/// text) and `*name`, `*` or `[...name]` catch-alls.
#[tracing::instrument(level = "trace", fields(segment=%seg))]
pub fn parse_segment(seg: &str, case_sensitive: bool) -> PatternResult<SegmentDef> {
    if seg.contains('(') || seg.contains(')') {
        return Err(PatternError::ParenthesisNotAllowed {
            segment: seg.to_string(),
        });
    }

    if let Some(rest) = seg.strip_prefix('*') {
        let name = if rest.is_empty() {
            "*"
        } else {
            validate_param_name(seg, rest)?;
            rest
        };
        return Ok(SegmentDef::CatchAll {
            name: name.to_string(),
        });
    }

    if let Some(start) = seg.find("[...") {
        let Some(close) = seg[start..].find(']') else {
            return Err(PatternError::UnterminatedBracket {
                segment: seg.to_string(),
            });
        };
        if start != 0 || close + 1 != seg.len() {
            return Err(PatternError::CatchAllMixed {
                segment: seg.to_string(),
            });
        }
        let name = &seg[4..close];
        validate_param_name(seg, name)?;
        return Ok(SegmentDef::CatchAll {
            name: name.to_string(),
        });
    }

    let mut parts: Vec<SegmentPart> = Vec::new();
    let mut literal = String::new();
    let mut rest = seg;

    while let Some(ch) = rest.chars().next() {
        match ch {
            ':' => {
                let body = &rest[1..];
                let len = body
                    .bytes()
                    .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
                    .count();
                flush_literal(&mut parts, &mut literal, case_sensitive);
                push_param(seg, &mut parts, &body[..len])?;
                rest = &body[len..];
            }
            '[' => {
                let body = &rest[1..];
                let Some(end) = body.find(']') else {
                    return Err(PatternError::UnterminatedBracket {
                        segment: seg.to_string(),
                    });
                };
                flush_literal(&mut parts, &mut literal, case_sensitive);
                push_param(seg, &mut parts, &body[..end])?;
                rest = &body[end + 1..];
            }
            _ => {
                literal.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    flush_literal(&mut parts, &mut literal, case_sensitive);

    if let [SegmentPart::Literal(only)] = parts.as_slice() {
        return Ok(SegmentDef::Literal(only.clone()));
    }

    Ok(SegmentDef::Dynamic(SegmentPattern { parts }))
}

fn flush_literal(parts: &mut Vec<SegmentPart>, literal: &mut String, case_sensitive: bool) {
    if literal.is_empty() {
        return;
    }
    let mut value = std::mem::take(literal);
    if !case_sensitive {
        value.make_ascii_lowercase();
    }
    parts.push(SegmentPart::Literal(value));
}

fn push_param(seg: &str, parts: &mut Vec<SegmentPart>, name: &str) -> PatternResult<()> {
    validate_param_name(seg, name)?;

    if matches!(parts.last(), Some(SegmentPart::Param { .. })) {
        return Err(PatternError::AdjacentParameters {
            segment: seg.to_string(),
        });
    }

    parts.push(SegmentPart::Param {
        name: name.to_string(),
    });
    Ok(())
}

fn validate_param_name(segment: &str, name: &str) -> PatternResult<()> {
    if PARAM_NAME.is_match(name) {
        return Ok(());
    }

    let Some(first) = name.chars().next() else {
        return Err(PatternError::ParameterMissingName {
            segment: segment.to_string(),
        });
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(PatternError::ParameterInvalidStart {
            segment: segment.to_string(),
            name: name.to_string(),
            found: first,
        });
    }

    match name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        Some(invalid) => Err(PatternError::ParameterInvalidCharacter {
            segment: segment.to_string(),
            name: name.to_string(),
            invalid,
        }),
        None => Ok(()),
    }
}

use crate::directive::{SectionMarker, section_marker};
use crate::types::section::SectionType;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Content cannot be empty")]
    Empty,
    #[error("Line {line}: Unexpected end_of_{block}")]
    UnexpectedEnd { line: usize, block: SectionType },
    #[error("Line {line}: Unmatched brackets in chords")]
    UnmatchedBrackets { line: usize },
    #[error("Unclosed block(s): {}", join_blocks(.blocks))]
    UnclosedBlocks { blocks: Vec<SectionType> },
}

fn join_blocks(blocks: &[SectionType]) -> String {
    blocks
        .iter()
        .map(|block| block.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Names of every `{...}` directive on a line, wherever it appears.
fn directive_names(line: &str) -> impl Iterator<Item = &str> {
    line.split('{').skip(1).filter_map(|chunk| {
        let body = &chunk[..chunk.find('}')?];
        let name = body.split(':').next().unwrap_or(body);
        (!name.is_empty()).then_some(name)
    })
}

/// Checks that section blocks nest and chord brackets balance.
pub fn validate(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut open_blocks: Vec<SectionType> = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let line_num = line_idx + 1;

        for name in directive_names(line) {
            match section_marker(name) {
                Some(SectionMarker::Start(block)) => open_blocks.push(block),
                Some(SectionMarker::End(block)) => {
                    if open_blocks.last() != Some(&block) {
                        return Err(ValidationError::UnexpectedEnd {
                            line: line_num,
                            block,
                        });
                    }
                    open_blocks.pop();
                }
                None => {
                    if !crate::directive::is_known_directive(name) {
                        log::debug!("Line {}: unknown directive \"{}\"", line_num, name);
                    }
                }
            }
        }

        if line.matches('[').count() != line.matches(']').count() {
            return Err(ValidationError::UnmatchedBrackets { line: line_num });
        }
    }

    if !open_blocks.is_empty() {
        return Err(ValidationError::UnclosedBlocks {
            blocks: open_blocks,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid() {
        let content = r#"{title:Song}
{soc}
[C]La [G]la
{eoc}
{start_of_verse}{c:inline}
words
{end_of_verse}"#;
        assert_eq!(validate(content), Ok(()));
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate("  \n "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_unexpected_end() {
        let err = validate("{sov}\nla\n{eoc}").unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnexpectedEnd {
                line: 3,
                block: SectionType::Chorus
            }
        );
        assert_eq!(err.to_string(), "Line 3: Unexpected end_of_chorus");
    }

    #[test]
    fn test_unmatched_brackets() {
        let err = validate("ok\n[C]la [G la").unwrap_err();
        assert_eq!(err, ValidationError::UnmatchedBrackets { line: 2 });
        assert_eq!(err.to_string(), "Line 2: Unmatched brackets in chords");
    }

    #[test]
    fn test_unclosed() {
        let err = validate("{soc}\n{sot}\nx").unwrap_err();
        assert_eq!(err.to_string(), "Unclosed block(s): chorus, tab");
    }
}

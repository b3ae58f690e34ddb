use std::fs;
use std::path::Path;

use crate::common::{HEADER_LEN, MAGIC, TERMINAL_BIT};
use crate::compiler::Compile;
use crate::errors::{GriddleError, Result};

#[derive(Default)]
struct BuildNode {
    children: [Option<usize>; 26],
    word: Option<String>,
}

/// Encodes a plain (non-suffix-sharing) trie over the given uppercase words
/// in the cache-file format.
pub(crate) fn encode_words<I, W>(words: I) -> Vec<u8>
where
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let mut nodes = vec![BuildNode::default()];
    for word in words {
        let word = word.as_ref();
        let mut cur = 0;
        for letter in word.bytes() {
            let index = usize::from(letter - b'A');
            cur = match nodes[cur].children[index] {
                Some(next) => next,
                None => {
                    nodes.push(BuildNode::default());
                    let next = nodes.len() - 1;
                    nodes[cur].children[index] = Some(next);
                    next
                }
            };
        }
        nodes[cur].word = Some(word.to_string());
    }

    let mut offsets = vec![0u32; nodes.len()];
    let mut pos = u32::try_from(HEADER_LEN).unwrap();
    for (i, node) in nodes.iter().enumerate() {
        offsets[i] = pos;
        let count = node.children.iter().flatten().count();
        pos += 4 + 4 * u32::try_from(count).unwrap();
        if let Some(word) = &node.word {
            pos += 1 + u32::try_from(word.len()).unwrap();
        }
    }

    let mut out = Vec::with_capacity(usize::try_from(pos).unwrap());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&offsets[0].to_le_bytes());
    for node in &nodes {
        let mut mask = 0u32;
        for (i, child) in node.children.iter().enumerate() {
            if child.is_some() {
                mask |= 1 << i;
            }
        }
        if node.word.is_some() {
            mask |= TERMINAL_BIT;
        }
        out.extend_from_slice(&mask.to_le_bytes());
        for child in node.children.iter().flatten() {
            out.extend_from_slice(&offsets[*child].to_le_bytes());
        }
        if let Some(word) = &node.word {
            out.push(u8::try_from(word.len()).unwrap());
            out.extend_from_slice(word.as_bytes());
        }
    }
    out
}

/// Reference compiler used as the collaborator in `open_with` tests.
pub(crate) struct WordListCompiler;

impl Compile for WordListCompiler {
    fn compile(&self, source: &Path, output: &Path) -> Result<()> {
        let text = fs::read_to_string(source).map_err(|e| GriddleError::build(e.to_string()))?;
        let words: Vec<_> = text
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .collect();
        fs::write(output, encode_words(words)).map_err(|e| GriddleError::build(e.to_string()))?;
        Ok(())
    }
}

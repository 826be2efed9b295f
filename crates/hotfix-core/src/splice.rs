use crate::types::{InsertPos, PatchError, TextPatch};
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Splice {
    Applied(String),
    AlreadyApplied,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpliceSummary {
    pub content: String,
    pub applied: usize,
    pub skipped: usize,
}

pub fn splice_patch(content: &str, patch: &TextPatch) -> Result<Splice, PatchError> {
    if content.contains(&patch.marker) {
        debug!("marker {:?} already present, skipping", patch.marker);
        return Ok(Splice::AlreadyApplied);
    }

    let (offset, needs_sep) = insertion_point(content, patch)?;
    debug!(
        "splicing {} bytes at offset {} (separator: {})",
        patch.insert.len(),
        offset,
        needs_sep
    );

    let mut out = String::with_capacity(content.len() + patch.insert.len() + 1);
    out.push_str(&content[..offset]);
    if needs_sep {
        out.push('\n');
    }
    out.push_str(&patch.insert);
    out.push_str(&content[offset..]);
    Ok(Splice::Applied(out))
}

// The first missing anchor aborts the whole batch, so a caller never writes
// a half-patched file.
pub fn splice_all(content: &str, patches: &[TextPatch]) -> Result<SpliceSummary, PatchError> {
    let mut current = content.to_string();
    let mut applied = 0;
    let mut skipped = 0;

    for patch in patches {
        match splice_patch(&current, patch)? {
            Splice::Applied(next) => {
                current = next;
                applied += 1;
            }
            Splice::AlreadyApplied => skipped += 1,
        }
    }

    Ok(SpliceSummary {
        content: current,
        applied,
        skipped,
    })
}

// Returns the splice offset, plus whether a separating newline is needed
// first (anchor on a final line with no trailing newline).
fn insertion_point(content: &str, patch: &TextPatch) -> Result<(usize, bool), PatchError> {
    match patch.pos {
        InsertPos::AfterAnchorLine => {
            let hit = content
                .find(&patch.anchor)
                .ok_or_else(|| PatchError::AnchorNotFound(patch.anchor.clone()))?;
            match content[hit..].find('\n') {
                Some(nl) => Ok((hit + nl + 1, false)),
                None => Ok((content.len(), true)),
            }
        }
        InsertPos::BeforeLastAnchor => {
            let hit = content
                .rfind(&patch.anchor)
                .ok_or_else(|| PatchError::AnchorNotFound(patch.anchor.clone()))?;
            Ok((hit, false))
        }
    }
}

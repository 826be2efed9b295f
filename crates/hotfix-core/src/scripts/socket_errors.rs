use crate::types::{Fix, FixOp, InsertPos, TextPatch};
use std::path::PathBuf;

pub const TARGET: &str = "server/index.js";

const HANDLER_MARKER: &str = "socket.on('error'";
const HANDLER_ANCHOR: &str = "io.on('connection', (socket) => {";
const HANDLER_BLOCK: &str = r#"  socket.on('error', (err) => {
    console.error(`[socket ${socket.id}] error:`, err.message);
  });

"#;

pub fn fixes() -> Vec<Fix> {
    vec![Fix {
        rel_path: PathBuf::from(TARGET),
        op: FixOp::Splice(vec![TextPatch {
            marker: HANDLER_MARKER.to_string(),
            anchor: HANDLER_ANCHOR.to_string(),
            insert: HANDLER_BLOCK.to_string(),
            pos: InsertPos::AfterAnchorLine,
        }]),
    }]
}

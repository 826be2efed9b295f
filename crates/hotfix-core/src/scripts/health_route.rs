use crate::types::{Fix, FixOp, InsertPos, TextPatch};
use std::path::PathBuf;

pub const TARGET: &str = "server/index.js";

const ROUTE_MARKER: &str = "app.get('/health'";
const ROUTE_ANCHOR: &str = "app.use(express.json());";
const ROUTE_BLOCK: &str = r#"
app.get('/health', (req, res) => {
  res.json({ status: 'ok', uptime: process.uptime() });
});
"#;

pub fn fixes() -> Vec<Fix> {
    vec![Fix {
        rel_path: PathBuf::from(TARGET),
        op: FixOp::Splice(vec![TextPatch {
            marker: ROUTE_MARKER.to_string(),
            anchor: ROUTE_ANCHOR.to_string(),
            insert: ROUTE_BLOCK.to_string(),
            pos: InsertPos::AfterAnchorLine,
        }]),
    }]
}

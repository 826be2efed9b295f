use crate::types::{Fix, FixOp, InsertPos, TextPatch};
use std::path::PathBuf;

pub const TARGET: &str = "client/src/App.jsx";

const IMPORT_MARKER: &str = "import DebugPage from './pages/DebugPage';";
const IMPORT_ANCHOR: &str = "import RoomPage from './pages/RoomPage';";

const ROUTE_MARKER: &str = "path=\"/debug\"";
const ROUTE_ANCHOR: &str = "</Routes>";
// Trailing spaces re-indent the closing tag the insertion displaced.
const ROUTE_BLOCK: &str =
    "  <Route path=\"/debug\" element={<DebugPage />} />\n      ";

pub fn fixes() -> Vec<Fix> {
    vec![Fix {
        rel_path: PathBuf::from(TARGET),
        op: FixOp::Splice(vec![
            TextPatch {
                marker: IMPORT_MARKER.to_string(),
                anchor: IMPORT_ANCHOR.to_string(),
                insert: format!("{}\n", IMPORT_MARKER),
                pos: InsertPos::AfterAnchorLine,
            },
            TextPatch {
                marker: ROUTE_MARKER.to_string(),
                anchor: ROUTE_ANCHOR.to_string(),
                insert: ROUTE_BLOCK.to_string(),
                pos: InsertPos::BeforeLastAnchor,
            },
        ]),
    }]
}

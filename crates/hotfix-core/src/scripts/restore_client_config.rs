use crate::types::{Fix, FixOp};
use std::path::PathBuf;

pub const TARGET: &str = "client/vite.config.js";

const KNOWN_GOOD: &str = r#"import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
  server: {
    port: 5173,
    proxy: {
      '/api': {
        target: 'http://localhost:3001',
        changeOrigin: true,
      },
      '/socket.io': {
        target: 'http://localhost:3001',
        ws: true,
      },
    },
  },
});
"#;

pub fn fixes() -> Vec<Fix> {
    vec![Fix {
        rel_path: PathBuf::from(TARGET),
        op: FixOp::ReplaceAll(KNOWN_GOOD.to_string()),
    }]
}

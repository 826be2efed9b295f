use crate::types::{Fix, FixOp};
use std::path::PathBuf;

pub const TARGET: &str = "server/socketHandlers.js";

const KNOWN_GOOD: &str = r#"const { rooms } = require('./rooms');

function registerHandlers(io, socket) {
  socket.on('room:join', ({ roomId, name }) => {
    try {
      const room = rooms.join(roomId, socket.id, name);
      socket.join(roomId);
      io.to(roomId).emit('room:state', room.snapshot());
    } catch (err) {
      socket.emit('room:error', { message: err.message });
    }
  });

  socket.on('room:leave', ({ roomId }) => {
    try {
      const room = rooms.leave(roomId, socket.id);
      socket.leave(roomId);
      if (room) {
        io.to(roomId).emit('room:state', room.snapshot());
      }
    } catch (err) {
      socket.emit('room:error', { message: err.message });
    }
  });

  socket.on('disconnect', () => {
    for (const room of rooms.forMember(socket.id)) {
      rooms.leave(room.id, socket.id);
      io.to(room.id).emit('room:state', room.snapshot());
    }
  });
}

module.exports = { registerHandlers };
"#;

pub fn fixes() -> Vec<Fix> {
    vec![Fix {
        rel_path: PathBuf::from(TARGET),
        op: FixOp::ReplaceAll(KNOWN_GOOD.to_string()),
    }]
}

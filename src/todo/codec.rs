//! # Record Codec
//!
//! Fixed-width binary layout of a single todo and of a whole list.
//!
//! ```text
//! ┌──────────────────────────────┬─────────────┐
//! │ name: 32 bytes, zero-padded  │ status: i32 │   = one block (36 bytes)
//! └──────────────────────────────┴─────────────┘
//! ```
//!
//! The status is a little-endian `i32`, `0` for pending and `1` for done. A list
//! is just blocks back to back: no header, no length prefix, no checksum. The
//! record count is the byte length divided by [`BLOCK_SIZE`].
//!
//! A trailing partial block is not an error. Decoding stops at the last whole block,
//! and never goes past [`CAPACITY`] blocks.

use crate::model::{Todo, TodoList, TodoName, CAPACITY, NAME_LEN};

const STATUS_LEN: usize = std::mem::size_of::<i32>();

/// Size of one encoded todo.
pub const BLOCK_SIZE: usize = NAME_LEN + STATUS_LEN;

/// Largest byte image a full list can occupy.
pub const MAX_IMAGE_LEN: usize = BLOCK_SIZE * CAPACITY;

pub fn encode(todo: &Todo) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    block[..NAME_LEN].copy_from_slice(todo.name.buffer());
    let status = i32::from(todo.is_completed);
    block[NAME_LEN..].copy_from_slice(&status.to_le_bytes());
    block
}

pub fn decode(block: &[u8; BLOCK_SIZE]) -> Todo {
    let mut name = [0u8; NAME_LEN];
    name.copy_from_slice(&block[..NAME_LEN]);
    let mut status = [0u8; STATUS_LEN];
    status.copy_from_slice(&block[NAME_LEN..]);

    Todo {
        name: TodoName::from_buffer(name),
        is_completed: i32::from_le_bytes(status) != 0,
    }
}

pub fn encode_all(todos: &TodoList) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(todos.len() * BLOCK_SIZE);
    for todo in todos {
        bytes.extend_from_slice(&encode(todo));
    }
    bytes
}

/// Decodes every whole block at the front of `bytes`, up to [`CAPACITY`].
pub fn decode_all(bytes: &[u8]) -> TodoList {
    TodoList::from_prefix(bytes.chunks_exact(BLOCK_SIZE).map(|chunk| {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        decode(&block)
    }))
}

/// Bytes at the end of `bytes` that do not form a whole block.
pub fn trailing_len(bytes: &[u8]) -> usize {
    bytes.len() % BLOCK_SIZE
}

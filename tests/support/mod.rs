#![allow(dead_code)]

pub mod mock_buffer;
pub mod mock_clipboard;
pub mod mock_dispatcher;

pub mod blocking_task;
pub mod image_codec;

//! Code generators: one submodule per unit code type.
//!
//! Every generator validates its inputs, runs the appropriate similarity
//! kernel, and returns a result object carrying the encoded `ISCC:` URI
//! plus the side products of the computation (character counts, content
//! hashes, file sizes). The `gen_*_code` functions dispatch to the latest
//! algorithm version; the `gen_*_code_v0` functions pin version 0.

pub mod audio;
pub mod data;
pub mod image;
pub mod instance;
pub mod meta;
pub mod mixed;
pub mod text;
pub mod video;

pub use audio::{gen_audio_code, gen_audio_code_v0, soft_hash_audio_v0, AudioCode};
pub use data::{gen_data_code, gen_data_code_v0, DataCode, DataHasher};
pub use image::{gen_image_code, gen_image_code_v0, soft_hash_image_v0, ImageCode};
pub use instance::{gen_instance_code, gen_instance_code_v0, InstanceCode, InstanceHasher};
pub use meta::{gen_meta_code, gen_meta_code_v0, soft_hash_meta_v0, Description, MetaCode};
pub use mixed::{gen_mixed_code, gen_mixed_code_v0, soft_hash_codes_v0, MixedCode};
pub use text::{gen_text_code, gen_text_code_v0, soft_hash_text_v0, TextCode};
pub use video::{gen_video_code, gen_video_code_v0, soft_hash_video_v0, VideoCode};

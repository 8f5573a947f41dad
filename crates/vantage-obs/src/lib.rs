//! Observation tensor encoding for the vantage RTS adapter.
//!
//! Turns raw per-tile feature maps into fixed-shape float tensors
//! suitable as network input: scalar layers are log-compressed,
//! categorical layers are expanded into per-category indicator
//! channels, and the legal-action set becomes a flat availability
//! mask over the vocabulary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod encode;
pub mod mask;
pub mod onehot;
pub mod tensor;

pub use encode::encode_feature_map;
pub use mask::availability_mask;
pub use onehot::one_hot;
pub use tensor::EncodedTensor;

pub(crate) mod sampler;
pub(crate) mod text_mask;
pub(crate) mod uniforms;

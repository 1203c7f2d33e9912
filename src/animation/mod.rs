pub(crate) mod color;
pub(crate) mod ease;
pub(crate) mod keyframe;
pub(crate) mod sample;
pub(crate) mod track;

pub mod prelude;

pub mod music;
pub mod music_local_model;

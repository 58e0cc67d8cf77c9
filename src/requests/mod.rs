pub mod music_request;

pub mod anki;
pub mod http;
pub mod translator;

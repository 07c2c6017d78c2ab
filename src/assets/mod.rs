pub mod decode;
pub mod naming;
pub mod source;

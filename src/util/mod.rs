pub(crate) mod epoch;
pub(crate) mod escape;
pub(crate) mod parse;

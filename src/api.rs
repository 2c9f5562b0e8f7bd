mod file;
mod http;
mod source;

pub use self::{
    file::FileSource,
    http::HttpSource,
    source::{RecordSource, Source},
};

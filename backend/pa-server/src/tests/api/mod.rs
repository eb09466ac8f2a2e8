mod error;
mod extractors;
mod middleware;

//! Repository Module
//!
//! Cache-first access to the catalog API and the HTTP transport it sits on.

mod pokeapi;
mod transport;

pub use pokeapi::PokeApi;
pub use transport::{HttpResponse, ReqwestTransport, Transport};

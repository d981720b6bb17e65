//! Bindings generated at build time from `fixtures/introspection.json`.

#[allow(deprecated)]
pub mod bindings {
    include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
}

#[cfg(test)]
mod tests;

pub mod handlers;
pub mod registry;
pub mod routes;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

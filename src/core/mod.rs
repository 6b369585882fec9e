pub mod interfaces;
pub mod models;
pub mod orchestrators;
pub mod services;

#[cfg(test)]
pub(crate) mod test_doubles;

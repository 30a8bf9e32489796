//! Request guards used by controllers.

pub mod auth;

#[cfg(test)]
mod test;

pub mod favorites;
pub mod lookup;
pub mod quote;
pub mod speech;
pub mod storage;
pub mod theme;
pub mod topics;

#[cfg(test)]
pub(crate) mod testing;

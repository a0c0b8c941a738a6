pub mod practicum;
pub mod telegram;

#[cfg(test)]
mod tests;

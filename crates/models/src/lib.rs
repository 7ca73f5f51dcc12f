pub mod errors;
pub mod db;
pub mod student;

#[cfg(test)]
mod tests;

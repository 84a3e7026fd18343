pub mod environment;

pub mod prelude {
    pub use super::environment::*;
}

#[cfg(test)]
mod tests;

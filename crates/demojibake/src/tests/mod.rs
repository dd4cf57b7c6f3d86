#[cfg(feature = "std")]
mod manual;

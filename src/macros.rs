// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! err {
    // Boxed error shorthand for `Result<_, Box<dyn Error>>` returns
    ($($arg:tt)*) => {
        ::std::boxed::Box::<dyn ::std::error::Error>::from(format!($($arg)*))
    };
}

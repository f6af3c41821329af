/// Signature of a built-in unary function.
pub type BuiltinFn = fn(f64) -> f64;

/// Defines the functions every new symbol table starts with.
///
/// Each entry maps a name to a plain `f64` function. The macro produces
/// `BUILTIN_FUNCTIONS`, the table used to seed the function namespace.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        pub static BUILTIN_FUNCTIONS: &[(&str, BuiltinFn)] = &[
            $(
                ($name, $func as BuiltinFn),
            )*
        ];
    };
}

builtin_functions! {
    "sin"   => f64::sin,
    "cos"   => f64::cos,
    "tan"   => f64::tan,
    "log"   => f64::ln,
    "log10" => f64::log10,
}

/// Named constants every new symbol table starts with.
pub static BUILTIN_CONSTANTS: &[(&str, f64)] =
    &[("PI", std::f64::consts::PI), ("E", std::f64::consts::E)];

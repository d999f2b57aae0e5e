/// `impl From<module::Variant> for Enum` for every tuple variant wrapping a struct of the same name.
#[macro_export]
macro_rules! impl_from_variants {
    ($t:ident : $m:ident :: { $($var:ident),* $(,)? }) => {
        $(impl From<$m::$var> for $t {
            fn from(inner: $m::$var) -> Self {
                $t::$var(inner)
            }
        })*
    };
}

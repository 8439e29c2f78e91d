macro_rules! quantity {
    (@define $(#[$meta:meta])* $name:ident, $container:ty, $unit:literal, [$($derive:path),*]) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(
            ::derive_more::Add,
            ::derive_more::AddAssign,
            ::derive_more::From,
            ::derive_more::Sub,
            ::derive_more::SubAssign,
            ::derive_more::Sum,
            ::serde::Deserialize,
            ::serde::Serialize,
            ::std::clone::Clone,
            ::std::default::Default,
            ::std::marker::Copy,
            $($derive),*
        )]
        #[serde(transparent)]
        pub struct $name(pub $container);

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.0, formatter)?;
                write!(formatter, "{}", $unit)
            }
        }
    };

    ($(#[$meta:meta])* $name:ident, via: Decimal, unit: $unit:literal) => {
        quantity!(
            @define $(#[$meta])* $name, ::rust_decimal::Decimal, $unit,
            [
                ::derive_more::FromStr,
                ::derive_more::Neg,
                ::std::cmp::Eq,
                ::std::cmp::Ord,
                ::std::cmp::PartialEq,
                ::std::cmp::PartialOrd,
                ::std::hash::Hash
            ]
        );

        #[allow(dead_code)]
        impl $name {
            pub const ZERO: Self = Self(::rust_decimal::Decimal::ZERO);

            #[must_use]
            pub fn is_zero(self) -> bool {
                self.0.is_zero()
            }
        }

        impl ::std::ops::Mul<::rust_decimal::Decimal> for $name {
            type Output = Self;

            fn mul(self, rhs: ::rust_decimal::Decimal) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl ::std::ops::Div<::rust_decimal::Decimal> for $name {
            type Output = Self;

            fn div(self, rhs: ::rust_decimal::Decimal) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };

    ($(#[$meta:meta])* $name:ident, via: f64, unit: $unit:literal) => {
        quantity!(@define $(#[$meta])* $name, f64, $unit, [::derive_more::Neg]);

        #[allow(dead_code)]
        impl $name {
            pub const ZERO: Self = Self(0.0);
        }

        ordered_float!($name);
    };
}

macro_rules! ordered_float {
    ($name:ty) => {
        impl ::std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                ::ordered_float::OrderedFloat(self.0).cmp(&::ordered_float::OrderedFloat(other.0))
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                ::ordered_float::OrderedFloat(self.0).eq(&::ordered_float::OrderedFloat(other.0))
            }
        }

        impl ::std::cmp::Eq for $name {}
    };
}

/// Implement `lhs × rhs = output` between two quantities.
macro_rules! implement_mul {
    ($lhs:ty, $rhs:ty, $output:ty) => {
        impl ::std::ops::Mul<$rhs> for $lhs {
            type Output = $output;

            fn mul(self, rhs: $rhs) -> Self::Output {
                <$output>::from(self.0 * rhs.0)
            }
        }

        impl ::std::ops::Mul<$lhs> for $rhs {
            type Output = $output;

            fn mul(self, rhs: $lhs) -> Self::Output {
                <$output>::from(self.0 * rhs.0)
            }
        }
    };
}

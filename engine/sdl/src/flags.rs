/// Declares a transparent bitmask newtype over an integer with the usual set
/// operations. Individual flags are added as associated consts by the caller.
macro_rules! flags_def {
    ($name:ident: $repr:ty) => {
        #[repr(transparent)]
        #[derive(PartialEq, Hash, Debug)]
        pub struct $name($repr);

        impl $name {
            #[inline]
            pub const fn empty() -> Self {
                Self(0)
            }

            #[inline]
            pub const fn from_raw(value: $repr) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn as_raw(self) -> $repr {
                self.0
            }

            #[inline]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            #[inline]
            pub const fn intersects(self, rhs: Self) -> bool {
                self.0 & rhs.0 != 0
            }

            #[inline]
            pub const fn contains(self, rhs: Self) -> bool {
                self.0 & rhs.0 == rhs.0
            }

            #[inline]
            pub const fn cardinality(self) -> u32 {
                self.0.count_ones()
            }
        }

        impl Clone for $name {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl Copy for $name {}

        impl Default for $name {
            fn default() -> Self {
                Self(0)
            }
        }

        impl Eq for $name {}

        impl std::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self::Output {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0
            }
        }

        impl std::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self::Output {
                Self(self.0 & rhs.0)
            }
        }

        impl std::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0
            }
        }

        impl std::ops::BitXor for $name {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self::Output {
                Self(self.0 ^ rhs.0)
            }
        }

        impl std::ops::BitXorAssign for $name {
            fn bitxor_assign(&mut self, rhs: Self) {
                self.0 ^= rhs.0
            }
        }

        impl std::ops::Not for $name {
            type Output = Self;
            fn not(self) -> Self::Output {
                Self(!self.0)
            }
        }
    };
}

pub(crate) use flags_def;

#[cfg(test)]
mod tests {
    flags_def!(TestFlags: u32);

    impl TestFlags {
        const A: Self = Self(0x1);
        const B: Self = Self(0x4);
    }

    #[test]
    fn set_operations() {
        let both = TestFlags::A | TestFlags::B;
        assert_eq!(both.as_raw(), 0x5);
        assert!(both.contains(TestFlags::A));
        assert!(!TestFlags::A.contains(both));
        assert!(TestFlags::A.intersects(both));
        assert_eq!(both.cardinality(), 2);
        assert_eq!(both & TestFlags::B, TestFlags::B);
        assert_eq!(both ^ TestFlags::B, TestFlags::A);
        assert!(TestFlags::default().is_empty());
        assert_eq!(TestFlags::empty(), TestFlags::from_raw(0));
    }
}

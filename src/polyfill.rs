#![allow(unused_imports)]

#[macro_use]
#[allow(unstable_name_collisions)]
mod definitions {
    use cfg_if::cfg_if;

    cfg_if! {
        if #[cfg(feature = "hasher_prefixfree_extras")] {
            pub use core::hash::Hasher;
        } else {
            pub trait Hasher: core::hash::Hasher {
                #[inline]
                fn write_length_prefix(&mut self, len: usize) {
                    self.write_usize(len);
                }
            }

            impl<H: core::hash::Hasher> Hasher for H {}
        }
    }

    cfg_if! {
        if #[cfg(feature = "tracing")] {
            macro_rules! trace_event {
                ($($arg:tt)+) => { tracing::trace!(target: "chainset", $($arg)+) };
            }

            macro_rules! debug_event {
                ($($arg:tt)+) => { tracing::debug!(target: "chainset", $($arg)+) };
            }
        } else {
            macro_rules! trace_event {
                ($($arg:tt)+) => {};
            }

            macro_rules! debug_event {
                ($($arg:tt)+) => {};
            }
        }
    }
}

pub(crate) use definitions::Hasher as _;

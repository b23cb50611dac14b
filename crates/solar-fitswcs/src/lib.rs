#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod builder;
pub mod ephemeris;
pub mod error;
pub mod frame;
pub mod header;
pub mod keywords;
pub mod time;
pub mod units;
pub mod value;

#[cfg(feature = "array")]
pub mod map;

pub use builder::{make_fitswcs_header, Argument, HeaderBuilder, ImageShape};
pub use error::{Error, Result};
pub use frame::{CoordinateSource, Frame, FrameKind, HeliographicPosition, Observer, SkyCoord};
pub use header::Header;
pub use keywords::meta_keywords;
pub use units::{Quantity, Unit};
pub use value::Value;

#[cfg(feature = "array")]
pub use map::GenericMap;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<Header>();
        assert_send_sync::<Value>();
        assert_send_sync::<Frame>();
        assert_send_sync::<SkyCoord>();
        assert_send_sync::<Quantity>();
        assert_send_sync::<Error>();
        assert_send_sync::<HeaderBuilder<'static, [usize], SkyCoord>>();
        #[cfg(feature = "array")]
        assert_send_sync::<GenericMap<f64>>();
    }
}
